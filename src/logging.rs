use std::fs::File;
use std::path::Path;

use clap::ValueEnum;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::{Error, Result};

/// Verbosity accepted by `--log-level`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Routes the `log` facade into `path`.
///
/// The terminal is in raw mode while the game runs, so logs never go to
/// stdout or stderr. Without a call to this function every log macro is a
/// no-op.
pub fn init_file_logger(path: &Path, level: LogLevel) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    WriteLogger::init(level.into(), Config::default(), file)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use simplelog::LevelFilter;

    use super::LogLevel;

    #[test]
    fn log_levels_map_onto_filters() {
        assert_eq!(LevelFilter::from(LogLevel::Error), LevelFilter::Error);
        assert_eq!(LevelFilter::from(LogLevel::Info), LevelFilter::Info);
        assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::Trace);
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }
}
