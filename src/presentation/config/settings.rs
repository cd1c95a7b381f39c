use std::fmt;
use std::path::PathBuf;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::DEFAULT_PLACEHOLDER_COVER_URL;
use crate::infrastructure::audio::DEFAULT_TRANSCRIPTION_MODEL;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub persistence: PersistenceSettings,
    pub transcription: TranscriptionSettings,
    pub report: ReportSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers `appsettings.<environment>` (optional) under `APP__`-prefixed
    /// environment variables, e.g. `APP__SERVER__PORT=8080`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let configuration = Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;

        if settings.transcription.api_key.is_none() {
            settings.transcription.api_key = std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty());
        }

        Ok(settings)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    #[default]
    Memory,
    Local,
    Azure,
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub local_path: String,
    pub azure_account: Option<String>,
    pub azure_access_key: Option<String>,
    pub azure_container: Option<String>,
    /// Base of every blob URL handed out, normally this service's own address.
    pub public_base_url: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            provider: StorageProviderSetting::Memory,
            local_path: "./data/blobs".to_string(),
            azure_account: None,
            azure_access_key: None,
            azure_container: None,
            public_base_url: "http://localhost:3000".to_string(),
        }
    }
}

impl fmt::Debug for StorageSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageSettings")
            .field("provider", &self.provider)
            .field("local_path", &self.local_path)
            .field("azure_account", &self.azure_account)
            .field("azure_access_key", &redacted(&self.azure_access_key))
            .field("azure_container", &self.azure_container)
            .field("public_base_url", &self.public_base_url)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistenceProviderSetting {
    #[default]
    Memory,
    Postgres,
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct PersistenceSettings {
    pub provider: PersistenceProviderSetting,
    pub database_url: Option<String>,
    pub max_connections: u32,
}

impl Default for PersistenceSettings {
    fn default() -> Self {
        Self {
            provider: PersistenceProviderSetting::Memory,
            database_url: None,
            max_connections: 10,
        }
    }
}

impl fmt::Debug for PersistenceSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistenceSettings")
            .field("provider", &self.provider)
            .field("database_url", &redacted(&self.database_url))
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProviderSetting {
    #[default]
    #[serde(rename = "openai")]
    OpenAi,
    Azure,
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProviderSetting,
    pub api_key: Option<String>,
    /// OpenAI-compatible API root, or the Azure resource endpoint.
    pub base_url: Option<String>,
    pub model: String,
    pub azure_deployment: Option<String>,
    pub azure_api_version: Option<String>,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            provider: TranscriptionProviderSetting::OpenAi,
            api_key: None,
            base_url: None,
            model: DEFAULT_TRANSCRIPTION_MODEL.to_string(),
            azure_deployment: None,
            azure_api_version: None,
        }
    }
}

impl fmt::Debug for TranscriptionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranscriptionSettings")
            .field("provider", &self.provider)
            .field("api_key", &redacted(&self.api_key))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("azure_deployment", &self.azure_deployment)
            .field("azure_api_version", &self.azure_api_version)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub placeholder_cover_url: String,
    pub template_path: Option<PathBuf>,
    pub product_name: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            placeholder_cover_url: DEFAULT_PLACEHOLDER_COVER_URL.to_string(),
            template_path: None,
            product_name: env!("CARGO_PKG_NAME").to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub json: bool,
}

fn redacted(value: &Option<String>) -> Option<&'static str> {
    value.as_ref().map(|_| "[REDACTED]")
}
