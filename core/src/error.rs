use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not readable: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("env var invalid: {key}={value}")]
    EnvInvalid { key: &'static str, value: String },
}

/// Per-run failures. The run stops before a summary is produced.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to start test command: {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("test command stdout is not available")]
    StdoutUnavailable,
}

/// Setup failures of the change watcher. These are fatal.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("failed to create file watcher")]
    Init(#[source] notify::Error),

    #[error("failed to enumerate directory: {path}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to watch directory: {path}")]
    Register {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Watch(#[from] WatchError),
}
