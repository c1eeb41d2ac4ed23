use serde::{Deserialize, Serialize};

use crate::table::PrintOptions;

/// Default table-rendering options, applied when the matching CLI flags are
/// not given.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    #[serde(default)]
    pub wide: bool,

    #[serde(default)]
    pub no_headers: bool,
}

impl OutputConfig {
    /// Resolves the effective print options: a set CLI flag wins, otherwise
    /// the configured default applies.
    #[must_use]
    pub const fn resolve(&self, wide: bool, no_headers: bool) -> PrintOptions {
        PrintOptions { wide: wide || self.wide, no_headers: no_headers || self.no_headers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags_override_defaults() {
        let config = OutputConfig { wide: false, no_headers: false };
        assert_eq!(config.resolve(true, false), PrintOptions { wide: true, no_headers: false });
    }

    #[test]
    fn test_configured_defaults_apply_without_flags() {
        let config = OutputConfig { wide: true, no_headers: true };
        assert_eq!(config.resolve(false, false), PrintOptions { wide: true, no_headers: true });
    }

    #[test]
    fn test_from_yaml() {
        let config: OutputConfig = serde_yaml::from_str("wide: true\nnoHeaders: false\n").unwrap();
        assert!(config.wide);
        assert!(!config.no_headers);
    }
}
