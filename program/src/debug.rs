//! Internal debugging helpers for local development and testing.

/// Logs through `solana_program_log` only when the `debug` feature is enabled.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug")]
        solana_program_log::log!($($arg)*)
    };
}
