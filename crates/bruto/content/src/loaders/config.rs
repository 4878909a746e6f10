//! Engine configuration loader.

use std::path::Path;

use bruto_core::EngineConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing fields take their `EngineConfig::DEFAULT_*` values.
    pub fn load(path: &Path) -> LoadResult<EngineConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<EngineConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bruto_core::TimingSet;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn fields_override_defaults() {
        let config = ConfigLoader::parse(
            r#"
            seed = 1234
            resolve_timings = "PASSIVE"
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, 1234);
        assert_eq!(config.resolve_timings, TimingSet::PASSIVE);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = ConfigLoader::parse("seed = \"soon\"").unwrap_err();
        assert!(err.to_string().contains("config TOML"));
    }
}
