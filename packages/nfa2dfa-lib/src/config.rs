use std::{fmt::Display, str::FromStr};

use nfa2dfa_macros::config;
use serde::{Deserialize, Serialize};

pub trait IntoOr<T> {
    fn into_or(self, or: T) -> T;
}

impl<T> IntoOr<Option<T>> for Option<T> {
    fn into_or(self, or: Option<T>) -> Option<T> {
        match self {
            Some(t) => Some(t),
            None => or,
        }
    }
}

impl<T> IntoOr<T> for Option<T> {
    fn into_or(self, or: T) -> T {
        self.unwrap_or(or)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "info" | "inf" => Ok(LogLevel::Info),
            "warn" | "warning" | "war" => Ok(LogLevel::Warn),
            "error" | "err" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Which end of the worklist subset construction takes the next composite
/// state from. The resulting DFA is the same up to canonicalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorklistOrder {
    Fifo,
    Lifo,
}

/// How the converter prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Encoding,
    SetNotation,
    Graphviz,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "encoding" | "enc" => Ok(OutputFormat::Encoding),
            "set-notation" | "set" | "pretty" => Ok(OutputFormat::SetNotation),
            "graphviz" | "dot" => Ok(OutputFormat::Graphviz),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Encoding => write!(f, "encoding"),
            OutputFormat::SetNotation => write!(f, "set-notation"),
            OutputFormat::Graphviz => write!(f, "graphviz"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

config! {
    pub struct LoggerConfig {
        enabled: bool = false,
        log_level: LogLevel = LogLevel::Warn,
    }
}

config! {
    pub struct SubsetConstructionConfig {
        worklist: WorklistOrder = WorklistOrder::Fifo,
    }
}

config! {
    pub struct ConverterConfig {
        /// Prune states of the NFA that are unreachable from its initial state
        /// before converting it.
        remove_unreachable: bool = false,
        /// Renumber the DFA before printing it.
        canonicalize: bool = true,
        format: OutputFormat = OutputFormat::Encoding,
        subset_construction: SubsetConstructionConfig (Option<PartialSubsetConstructionConfig> = SubsetConstructionConfig::default()),
        logger: LoggerConfig (Option<PartialLoggerConfig> = LoggerConfig::default()),
    }
}

#[test]
fn test_converter_config_defaults() {
    let config = ConverterConfig::from_toml("").unwrap();
    assert_eq!(config, ConverterConfig::default());
    assert!(*config.get_canonicalize());
    assert_eq!(*config.get_format(), OutputFormat::Encoding);
    assert_eq!(
        *config.get_subset_construction().get_worklist(),
        WorklistOrder::Fifo
    );
    assert!(!*config.get_logger().get_enabled());
}

#[test]
fn test_converter_config_partial_file() {
    let config = ConverterConfig::from_toml(
        r#"
        format = "set-notation"
        remove_unreachable = true

        [subset_construction]
        worklist = "lifo"

        [logger]
        enabled = true
        log_level = "debug"
        "#,
    )
    .unwrap();

    assert_eq!(*config.get_format(), OutputFormat::SetNotation);
    assert!(*config.get_remove_unreachable());
    assert!(*config.get_canonicalize());
    assert_eq!(
        *config.get_subset_construction().get_worklist(),
        WorklistOrder::Lifo
    );
    assert_eq!(*config.get_logger().get_log_level(), LogLevel::Debug);
}

#[test]
fn test_converter_config_rejects_unknown_keys() {
    assert!(ConverterConfig::from_toml("minimize = true").is_err());
}
