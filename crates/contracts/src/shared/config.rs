use serde::Deserialize;
use toml::{Table, Value};

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub storage: StorageConfig,
    pub export: ExportConfig,
    pub tabs: TabsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// localStorage key of the workspace snapshot
    pub key: String,
    /// Message handed to the browser's leave-page confirmation
    pub unload_message: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub archive_name: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct TabsConfig {
    /// Tab opened when nothing was saved before
    pub first_visit: String,
    /// Tab opened when the saved snapshot could not be read
    pub recovered: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[storage]
key = "samplests"
unload_message = "Your workspace will be saved locally"

[export]
archive_name = "samplests.zip"

[tabs]
first_visit = "Hello world"
recovered = "Welcome back"
"#;

impl Default for EditorConfig {
    /// The embedded default config.
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded editor config is valid")
    }
}

/// Load the editor configuration
///
/// Search order:
/// 1. TOML provided by the hosting page, laid over the embedded default
///    (missing keys keep their defaults)
/// 2. Falls back to the embedded default config
pub fn load_config(page_config: Option<&str>) -> EditorConfig {
    if let Some(text) = page_config {
        match with_page_overrides(text) {
            Ok(config) => {
                log::info!("Loaded editor config from page");
                return config;
            }
            Err(e) => log::warn!("Ignoring invalid page config: {}", e),
        }
    }

    EditorConfig::default()
}

fn with_page_overrides(text: &str) -> Result<EditorConfig, toml::de::Error> {
    let mut config: Table = toml::from_str(DEFAULT_CONFIG)?;
    let overrides: Table = toml::from_str(text)?;
    merge_tables(&mut config, overrides);
    Value::Table(config).try_into()
}

fn merge_tables(base: &mut Table, overrides: Table) {
    for (key, value) in overrides {
        match value {
            Value::Table(section) => match base.get_mut(&key) {
                Some(Value::Table(existing)) => merge_tables(existing, section),
                _ => {
                    base.insert(key, Value::Table(section));
                }
            },
            value => {
                base.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<EditorConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.storage.key, "samplests");
        assert_eq!(config.export.archive_name, "samplests.zip");
    }

    #[test]
    fn test_page_config_overrides_single_key() {
        let config = load_config(Some("[export]\narchive_name = \"fixtures.zip\"\n"));
        assert_eq!(config.export.archive_name, "fixtures.zip");
        assert_eq!(config.tabs.first_visit, "Hello world");
    }

    #[test]
    fn test_page_config_with_wrong_type_falls_back() {
        let config = load_config(Some("[tabs]\nrecovered = 5\n"));
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_invalid_page_config_falls_back() {
        let config = load_config(Some("[export"));
        assert_eq!(config, EditorConfig::default());
    }
}
