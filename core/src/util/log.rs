use std::env;
use std::io::Write;
use std::str::FromStr;

use chrono::Local;
use lazy_static::lazy_static;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use parking_lot::RwLock;

use crate::constants::env_variables::LOG_LEVEL_VAR;

lazy_static! {
    static ref LOG_LEVEL: RwLock<LevelFilter> = RwLock::new(LevelFilter::Warn);
}

static LOGGER: DynamicLogger = DynamicLogger;

struct DynamicLogger;

impl Log for DynamicLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= *LOG_LEVEL.read()
    }

    // stderr only, applet output owns stdout
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = Local::now();
            let _ = writeln!(
                std::io::stderr(),
                "[{}] [{}] - {}",
                now.format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

pub fn init_logger() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

pub fn set_log_level(level: LevelFilter) {
    *LOG_LEVEL.write() = level;
}

pub fn log_level() -> LevelFilter {
    *LOG_LEVEL.read()
}

/// Level from `ABOX_LOG_LEVEL`, falling back to `fallback` when unset or unparsable.
pub fn level_from_env(fallback: LevelFilter) -> LevelFilter {
    env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|level| LevelFilter::from_str(level.trim()).ok())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;
    use crate::util::test_util::EnvSnapshot;

    #[test]
    #[serial]
    fn test_level_from_env_var() {
        let _env = EnvSnapshot::take();
        env::set_var(LOG_LEVEL_VAR, "debug");
        assert_eq!(level_from_env(LevelFilter::Warn), LevelFilter::Debug);

        env::set_var(LOG_LEVEL_VAR, "loud");
        assert_eq!(level_from_env(LevelFilter::Warn), LevelFilter::Warn);

        env::remove_var(LOG_LEVEL_VAR);
        assert_eq!(level_from_env(LevelFilter::Error), LevelFilter::Error);
    }

    #[test]
    #[serial]
    fn test_dynamic_level() {
        let previous = log_level();
        set_log_level(LevelFilter::Trace);
        assert!(LOGGER.enabled(&Metadata::builder().level(log::Level::Trace).build()));
        set_log_level(LevelFilter::Error);
        assert!(!LOGGER.enabled(&Metadata::builder().level(log::Level::Warn).build()));
        set_log_level(previous);
    }
}
