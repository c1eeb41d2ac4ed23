//! Configuration and initialization for application logging.
//!
//! `LogConfig` selects the output targets (stdout, stderr, journald, file)
//! and the minimum level; `LogDriver` builds the matching `tracing` layer for
//! each target.

use std::{fs::OpenOptions, path::PathBuf};

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use tracing_subscriber::{
    Layer, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
};

#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LogConfig {
    /// Optional path of a log file; `None` disables file logging.
    #[serde(default = "LogConfig::default_file_path")]
    pub file_path: Option<PathBuf>,

    #[serde(default = "LogConfig::default_emit_journald")]
    pub emit_journald: bool,

    #[serde(default = "LogConfig::default_emit_stdout")]
    pub emit_stdout: bool,

    #[serde(default = "LogConfig::default_emit_stderr")]
    pub emit_stderr: bool,

    /// Minimum level to record; lower levels are filtered out.
    #[serde(default = "LogConfig::default_log_level")]
    #[serde_as(as = "DisplayFromStr")]
    pub level: tracing::Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file_path: Self::default_file_path(),
            emit_journald: Self::default_emit_journald(),
            emit_stdout: Self::default_emit_stdout(),
            emit_stderr: Self::default_emit_stderr(),
            level: Self::default_log_level(),
        }
    }
}

impl LogConfig {
    #[inline]
    #[must_use]
    pub const fn default_log_level() -> tracing::Level { tracing::Level::INFO }

    #[inline]
    #[must_use]
    pub const fn default_file_path() -> Option<PathBuf> { None }

    #[inline]
    #[must_use]
    pub const fn default_emit_journald() -> bool { false }

    #[inline]
    #[must_use]
    pub const fn default_emit_stdout() -> bool { false }

    #[inline]
    #[must_use]
    pub const fn default_emit_stderr() -> bool { true }

    /// Initializes the global `tracing` subscriber from this configuration.
    ///
    /// # Panics
    ///
    /// Panics if a global subscriber was already installed, as
    /// `SubscriberInitExt::init` does.
    pub fn registry(&self) {
        let Self { emit_journald, file_path, emit_stdout, emit_stderr, level: log_level } = self;

        let filter_layer = tracing_subscriber::filter::LevelFilter::from_level(*log_level);

        tracing_subscriber::registry()
            .with(filter_layer)
            .with(emit_journald.then(|| LogDriver::Journald.layer()))
            .with(file_path.clone().map(|path| LogDriver::File(path).layer()))
            .with(emit_stdout.then(|| LogDriver::Stdout.layer()))
            .with(emit_stderr.then(|| LogDriver::Stderr.layer()))
            .init();
    }
}

/// A single log output target.
#[derive(Clone, Debug)]
enum LogDriver {
    Stdout,
    Stderr,
    Journald,
    File(PathBuf),
}

impl LogDriver {
    /// Builds the `tracing` layer for this target, or `None` when the target
    /// cannot be opened (missing journald socket, unwritable file).
    fn layer<S>(self) -> Option<Box<dyn Layer<S> + Send + Sync + 'static>>
    where
        S: tracing::Subscriber,
        for<'a> S: LookupSpan<'a>,
    {
        // Shared configuration regardless of where logs are output to.
        let fmt =
            tracing_subscriber::fmt::layer().pretty().with_thread_ids(true).with_thread_names(true);

        match self {
            Self::Stdout => Some(Box::new(fmt.with_writer(std::io::stdout))),
            Self::Stderr => Some(Box::new(fmt.with_writer(std::io::stderr))),
            Self::File(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path).ok()?;
                Some(Box::new(fmt.with_writer(file)))
            }
            Self::Journald => Some(Box::new(tracing_journald::layer().ok()?)),
        }
    }
}
