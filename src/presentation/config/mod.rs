mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ConversionSettings, ExtractionSettings, LimitsSettings, LlmSettings, LoggingSettings,
    ServerSettings, Settings, StorageSettings, WebpageSettings,
};
