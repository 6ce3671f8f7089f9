use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads a document once, caches it, and validates it on every read and write.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    fn cached(&self) -> Result<MutexGuard<'_, Option<TConfig>>, String> {
        self.config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.cached()?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self.cached()?;
        *current = Some(config.clone());
        Ok(())
    }

    /// Read-modify-write; the closure's return value is handed back to the caller.
    pub fn update<R>(&self, change: impl FnOnce(&mut TConfig) -> R) -> Result<R, String> {
        let mut config = self.get_config()?;
        let result = change(&mut config);
        self.set_config(&config)?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryContentProvider;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        tick_ms: u32,
    }

    impl Default for Sample {
        fn default() -> Self {
            Self { tick_ms: 150 }
        }
    }

    impl Validate for Sample {
        fn validate(&self) -> Result<(), String> {
            if self.tick_ms == 0 {
                return Err("tick_ms must be positive".to_string());
            }
            Ok(())
        }
    }

    fn memory_manager(initial: Option<&str>) -> ConfigManager<MemoryContentProvider, Sample> {
        ConfigManager::new(
            MemoryContentProvider::new(initial.map(str::to_string)),
            YamlConfigSerializer::new(),
        )
    }

    #[test]
    fn test_missing_content_yields_default() {
        let manager = memory_manager(None);
        assert_eq!(manager.get_config().unwrap(), Sample::default());
    }

    #[test]
    fn test_reads_existing_content() {
        let manager = memory_manager(Some("tick_ms: 90\n"));
        assert_eq!(manager.get_config().unwrap().tick_ms, 90);
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let manager = memory_manager(Some("tick_ms: 0\n"));
        let err = manager.get_config().unwrap_err();
        assert!(err.contains("validation"));
    }

    #[test]
    fn test_set_config_rejects_invalid_and_keeps_cache() {
        let manager = memory_manager(None);
        manager.set_config(&Sample { tick_ms: 120 }).unwrap();
        assert!(manager.set_config(&Sample { tick_ms: 0 }).is_err());
        assert_eq!(manager.get_config().unwrap().tick_ms, 120);
    }

    #[test]
    fn test_update_persists_change() {
        let manager = memory_manager(None);
        let previous = manager
            .update(|config| {
                let previous = config.tick_ms;
                config.tick_ms = 80;
                previous
            })
            .unwrap();
        assert_eq!(previous, 150);
        assert_eq!(manager.get_config().unwrap().tick_ms, 80);
    }
}
