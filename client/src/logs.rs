use colored::{
    Color,
    Colorize,
};

/// Format a key/value pair with optional color overrides.
///
/// Requires the `colored::Colorize` trait to be in scope.
///
/// Examples, where `key_color` and `value_color` are `LogColor` values:
/// - fmt_kv!(key, value)
/// - fmt_kv!(key, value, key_color)
/// - fmt_kv!(key, value, key_color, value_color)
#[macro_export]
macro_rules! fmt_kv {
    ($key:expr, $value:expr $(,)?) => {
        $crate::fmt_kv!(
            $key,
            $value,
            $crate::LogColor::Highlight,
            $crate::LogColor::FadedGray
        )
    };
    ($key:expr, $value:expr, $key_color:expr $(,)?) => {
        $crate::fmt_kv!($key, $value, $key_color, $crate::LogColor::FadedGray)
    };
    ($key:expr, $value:expr, $key_color:expr, $value_color:expr $(,)?) => {{
        let __k = ::std::string::ToString::to_string(&$key);
        let __v = ::std::string::ToString::to_string(&$value);
        ::std::format!("{}: {}", __k.color($key_color), __v.color($value_color))
    }};
}

/// Prints a key/value pair with optional color overrides. Takes the same arguments as
/// [`fmt_kv!`].
///
/// Requires the `colored::Colorize` trait to be in scope.
#[macro_export]
macro_rules! print_kv {
    ($($args:expr),+ $(,)?) => {
        ::std::println!("{}", $crate::fmt_kv!($($args),+))
    };
}

#[derive(Clone, Copy, Debug)]
pub enum LogColor {
    Highlight,
    Error,
    Warning,
    Header,
    Info,
    Success,
    FadedGray,
}

#[rustfmt::skip]
mod unformatted {
    use super::*;

    pub fn fmt_divider() -> String { "--------------------------------------------------------------------------------".into() }

    pub fn log_divider() { println!("{}", fmt_divider()); }

    impl From<LogColor> for Color {
        fn from(value: LogColor) -> Color {
            match value {
                LogColor::Highlight  => Color::TrueColor { r: 255, g: 215, b: 87  },
                LogColor::Error      => Color::TrueColor { r: 255, g: 0,   b: 45  },
                LogColor::Warning    => Color::TrueColor { r: 180, g: 105, b: 0   },
                LogColor::Header     => Color::TrueColor { r: 0,   g: 255, b: 0   },
                LogColor::Info       => Color::TrueColor { r: 0,   g: 95,  b: 255 },
                LogColor::Success    => Color::TrueColor { r: 95,  g: 215, b: 95  },
                LogColor::FadedGray  => Color::TrueColor { r: 95,  g: 95,  b: 95  },
            }
        }
    }
}

pub use unformatted::*;

/// Prints a section header surrounded by dividers.
pub fn log_header(title: &str) {
    log_divider();
    println!("{}", title.color(LogColor::Header).bold());
    log_divider();
}

/// Prints program log lines, indented under the transaction that emitted them.
pub fn log_program_logs(logs: &[String]) {
    for line in logs {
        println!("  {}", line.color(LogColor::FadedGray));
    }
}
