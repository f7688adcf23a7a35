use std::str::FromStr;

use serde::Deserialize;
use serde_with::serde_as;
use strum::{Display, EnumString};
use time::UtcOffset;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub storage: StorageSettings,
    pub calendar: CalendarSettings,
}

#[serde_as]
#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
    pub app_url: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct StorageSettings {
    pub path: String,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct CalendarSettings {
    /// Offset from UTC used to decide what "today" is.
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub utc_offset_minutes: i32,
}

impl CalendarSettings {
    pub fn utc_offset(&self) -> Result<UtcOffset, config::ConfigError> {
        UtcOffset::from_whole_seconds(self.utc_offset_minutes * 60).map_err(|e| {
            config::ConfigError::Message(format!(
                "invalid calendar.utc_offset_minutes {}: {}",
                self.utc_offset_minutes, e
            ))
        })
    }
}

pub fn read_config() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("failed to determine the current directory: {}", e))
    })?;
    let config_directory = base_path.join("config");

    let raw_environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".into());
    let environment = Environment::from_str(&raw_environment).map_err(|_| {
        config::ConfigError::Message(format!("failed to parse APP_ENVIRONMENT: {}", raw_environment))
    })?;
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")))
        .add_source(config::File::from(
            config_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("CLASSBOOK")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, EnumString)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}
