//! Theme service
//!
//! Visual theme state used to be scattered writes to global
//! presentation state; here it is an explicit store. `apply` is the
//! only writer, and persistence goes through an injected storage
//! interface so the service owns no I/O policy of its own. The
//! persisted keys are `theme_color` (the active theme identifier) and
//! `brainbuzz_theme_config` (a JSON `{light, dark}` CSS-variable map).

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::errors::{AppError, AppResult};

pub const THEME_COLOR_KEY: &str = "theme_color";
pub const THEME_CONFIG_KEY: &str = "brainbuzz_theme_config";

pub type CssVars = BTreeMap<String, String>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeConfig {
    pub light: CssVars,
    pub dark: CssVars,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let mut light = CssVars::new();
        light.insert("--bg".to_string(), "#ffffff".to_string());
        light.insert("--fg".to_string(), "#1f2430".to_string());
        light.insert("--accent".to_string(), "#4f46e5".to_string());

        let mut dark = CssVars::new();
        dark.insert("--bg".to_string(), "#101420".to_string());
        dark.insert("--fg".to_string(), "#e8eaf0".to_string());
        dark.insert("--accent".to_string(), "#818cf8".to_string());

        Self { light, dark }
    }
}

/// The currently applied theme snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppliedTheme {
    pub color: String,
    pub config: ThemeConfig,
}

/// Key-value persistence behind the theme store
#[async_trait]
pub trait ThemeStorage: Send + Sync {
    async fn get(&self, key: &str) -> AppResult<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;
}

/// JSON-file backed storage (one flat object of string keys)
pub struct FileThemeStorage {
    path: PathBuf,
}

impl FileThemeStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    async fn read_map(&self) -> AppResult<BTreeMap<String, String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| AppError::theme_storage(e.to_string())),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(error) => Err(AppError::theme_storage(error.to_string())),
        }
    }
}

#[async_trait]
impl ThemeStorage for FileThemeStorage {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.read_map().await?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::theme_storage(e.to_string()))?;
        }
        let contents = serde_json::to_string_pretty(&map)
            .map_err(|e| AppError::theme_storage(e.to_string()))?;
        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|e| AppError::theme_storage(e.to_string()))
    }
}

/// Single writer of applied theme state
#[derive(Clone)]
pub struct ThemeStore {
    storage: Arc<dyn ThemeStorage>,
    applied: Arc<RwLock<AppliedTheme>>,
}

impl ThemeStore {
    /// Load persisted state, falling back to defaults for anything
    /// missing or unreadable (a corrupt config must not block startup)
    pub async fn load(storage: Arc<dyn ThemeStorage>) -> AppResult<Self> {
        let color = storage
            .get(THEME_COLOR_KEY)
            .await?
            .unwrap_or_else(|| "default".to_string());
        let config = match storage.get(THEME_CONFIG_KEY).await? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => ThemeConfig::default(),
        };
        info!(theme = %color, "theme loaded");

        Ok(Self {
            storage,
            applied: Arc::new(RwLock::new(AppliedTheme { color, config })),
        })
    }

    pub async fn applied(&self) -> AppliedTheme {
        self.applied.read().await.clone()
    }

    /// Persist and apply a new theme. This is the only path that
    /// mutates the applied snapshot.
    pub async fn apply(&self, color: String, config: ThemeConfig) -> AppResult<AppliedTheme> {
        self.storage.set(THEME_COLOR_KEY, &color).await?;
        let raw = serde_json::to_string(&config)
            .map_err(|e| AppError::theme_storage(e.to_string()))?;
        self.storage.set(THEME_CONFIG_KEY, &raw).await?;

        let mut applied = self.applied.write().await;
        *applied = AppliedTheme { color, config };
        Ok(applied.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStorage {
        map: Mutex<BTreeMap<String, String>>,
    }

    #[async_trait]
    impl ThemeStorage for MemoryStorage {
        async fn get(&self, key: &str) -> AppResult<Option<String>> {
            Ok(self.map.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> AppResult<()> {
            self.map
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn load_falls_back_to_defaults() {
        let store = ThemeStore::load(Arc::new(MemoryStorage::default()))
            .await
            .unwrap();
        let applied = store.applied().await;
        assert_eq!(applied.color, "default");
        assert_eq!(applied.config, ThemeConfig::default());
    }

    #[tokio::test]
    async fn apply_persists_and_swaps_snapshot() {
        let storage = Arc::new(MemoryStorage::default());
        let store = ThemeStore::load(storage.clone()).await.unwrap();

        let mut config = ThemeConfig::default();
        config
            .dark
            .insert("--accent".to_string(), "#22d3ee".to_string());
        store.apply("ocean".to_string(), config.clone()).await.unwrap();

        assert_eq!(store.applied().await.color, "ocean");
        assert_eq!(
            storage.get(THEME_COLOR_KEY).await.unwrap().as_deref(),
            Some("ocean")
        );

        // A reload sees the persisted state
        let reloaded = ThemeStore::load(storage).await.unwrap();
        assert_eq!(reloaded.applied().await.config, config);
    }

    #[tokio::test]
    async fn corrupt_persisted_config_falls_back() {
        let storage = Arc::new(MemoryStorage::default());
        storage.set(THEME_CONFIG_KEY, "not json").await.unwrap();
        let store = ThemeStore::load(storage).await.unwrap();
        assert_eq!(store.applied().await.config, ThemeConfig::default());
    }
}
