mod error;
mod log;
mod output;

use std::path::{Path, PathBuf};

use resolve_path::PathResolveExt;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

pub use self::{error::Error, log::LogConfig, output::OutputConfig};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    pub fn search_config_file_path() -> PathBuf {
        let paths = vec![Self::default_path()]
            .into_iter()
            .chain(crate::fallback_project_config_directories().into_iter().map(|mut path| {
                path.push(crate::CLI_CONFIG_NAME);
                path
            }))
            .collect::<Vec<_>>();
        for path in paths {
            let Ok(exists) = path.try_exists() else {
                continue;
            };
            if exists {
                return path;
            }
        }
        Self::default_path()
    }

    #[inline]
    pub fn default_path() -> PathBuf {
        [crate::PROJECT_CONFIG_DIR.to_path_buf(), PathBuf::from(crate::CLI_CONFIG_NAME)]
            .into_iter()
            .collect()
    }

    /// Loads the configuration from `path`; a missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be resolved, the file cannot be
    /// read, or its content is not valid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref().try_resolve().map(|path| path.to_path_buf()).with_context(
            |_| error::ResolveFilePathSnafu { file_path: path.as_ref().to_path_buf() },
        )?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let mut config: Self = {
            let data =
                std::fs::read(&path).context(error::OpenConfigSnafu { filename: path.clone() })?;
            serde_yaml::from_slice(&data).context(error::ParseConfigSnafu { filename: path })?
        };

        config.log.file_path = match config.log.file_path.map(|path| {
            path.try_resolve()
                .map(|path| path.to_path_buf())
                .with_context(|_| error::ResolveFilePathSnafu { file_path: path.clone() })
        }) {
            Some(Ok(path)) => Some(path),
            Some(Err(err)) => return Err(err),
            None => None,
        };

        Ok(config)
    }

    /// The default configuration rendered as YAML, for `default-config`.
    #[must_use]
    pub fn template_basic() -> Vec<u8> {
        serde_yaml::to_string(&Self::default())
            .expect("Serializing the default config should always success")
            .into_bytes()
    }
}
