use core::fmt;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::runtime::ConfigErrors;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;

const CONSOLE_APPENDER: &str = "console";
pub const DEFAULT_PATTERN: &str = "{d(%H:%M:%S)} {l} {t} - {m}{n}";

pub struct LoggerConfig {
    pub level: LevelFilter,
    pub pattern: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            pattern: String::from(DEFAULT_PATTERN),
        }
    }
}

impl LoggerConfig {
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = String::from(pattern);
        self
    }
}

pub enum LoggerError {
    InvalidConfig(ConfigErrors),
    AlreadyInitialized,
}

impl Debug for LoggerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for LoggerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::InvalidConfig(e) => write!(f, "Invalid logger config ({}).", e),
            LoggerError::AlreadyInitialized => write!(f, "Logger already initialized."),
        }
    }
}

impl Error for LoggerError {}

fn build_config(config: &LoggerConfig) -> Result<Config, LoggerError> {
    let console = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(&config.pattern)))
        .build();

    Config::builder()
        .appender(Appender::builder().build(CONSOLE_APPENDER, Box::new(console)))
        .build(Root::builder().appender(CONSOLE_APPENDER).build(config.level))
        .map_err(LoggerError::InvalidConfig)
}

///
/// Installs a console logger for the whole process.
/// Only the first call succeeds, use the returned handle to reconfigure.
///
pub fn init_logger(config: &LoggerConfig) -> Result<Handle, LoggerError> {
    let built = build_config(config)?;
    log4rs::init_config(built).map_err(|_| LoggerError::AlreadyInitialized)
}

///
/// Swaps the configuration of an installed logger.
///
pub fn reconfigure(handle: &Handle, config: &LoggerConfig) -> Result<(), LoggerError> {
    handle.set_config(build_config(config)?);
    Ok(())
}
