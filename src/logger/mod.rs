#[cfg(feature = "log")]
mod inner {
    use std::collections::HashMap;
    use std::string::ToString;
    use log::{Level, Metadata, Record};
    use colored::Colorize;

    lazy_static::lazy_static! {
        pub static ref LOGGER_COLORS: HashMap<Level, String> = HashMap::from([
            (Level::Debug, "green".to_string()),
            (Level::Info, "blue".to_string()),
            (Level::Warn, "yellow".to_string()),
            (Level::Error, "red".to_string()),
        ]);
    }

    pub static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;

    /// Writes records of this crate to stderr, level colored.
    pub struct ConsoleLogger;

    impl ConsoleLogger {
        pub fn format(record: &Record) -> String {
            let level = format!("{:>7}", record.level());
            format!(
                "{}: {}",
                match LOGGER_COLORS.get(&record.level()) {
                    Some(c) => level.color(&**c).to_string(),
                    None => level,
                },
                record.args()
            )
        }
    }

    impl log::Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Debug
        }

        fn log(&self, record: &Record) {
            // stdout carries the addresses, everything else goes to stderr
            if self.enabled(record.metadata()) && record.module_path().unwrap_or("").starts_with("print_ip") {
                eprintln!("{}", ConsoleLogger::format(record));
            }
        }

        fn flush(&self) {}
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use log::Log;

        #[test]
        fn format_contains_level_and_message() {
            colored::control::set_override(false);
            let line = ConsoleLogger::format(
                &Record::builder()
                    .args(format_args!("loaded {} addresses", 3))
                    .level(Level::Info)
                    .build(),
            );
            assert_eq!(line, "   INFO: loaded 3 addresses");
        }

        #[test]
        fn trace_is_disabled() {
            let metadata = Metadata::builder().level(Level::Trace).build();
            assert!(!CONSOLE_LOGGER.enabled(&metadata));
            let metadata = Metadata::builder().level(Level::Debug).build();
            assert!(CONSOLE_LOGGER.enabled(&metadata));
        }
    }
}

#[cfg(feature = "log")]
pub use inner::{ConsoleLogger, CONSOLE_LOGGER};

#[cfg(not(feature = "log"))]
mod dummy;
