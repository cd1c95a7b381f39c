mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    LoggingSettings, PersistenceProviderSetting, PersistenceSettings, ReportSettings,
    ServerSettings, Settings, StorageProviderSetting, StorageSettings,
    TranscriptionProviderSetting, TranscriptionSettings,
};
