//! Instruction handlers for the `xbasic` program.

pub mod cash_check;
pub mod create_check;
pub mod initialize;
pub mod introduce_yourself;
pub mod update;
pub mod visit;

pub use cash_check::process_cash_check;
pub use create_check::process_create_check;
pub use initialize::process_initialize;
pub use introduce_yourself::process_introduce_yourself;
pub use update::process_update;
pub use visit::process_visit;
