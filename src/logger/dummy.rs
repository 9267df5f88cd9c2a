// Stand-ins for the `log` macros when the `log` feature is off. Arguments are
// still type checked but nothing is emitted.

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}
