use std::path::Path;
use std::str::FromStr;

use config::ConfigError;
use nest_calendar::{CalendarTime, GridLayout};
use serde::Deserialize;
use serde_with::serde_as;
use strum::{Display, EnumString};
use time::UtcOffset;

use crate::adapters::inbound::http::DateResolution;
use crate::domain::services::PlannerOptions;

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationSettings,
    #[serde(default)]
    pub calendar: CalendarSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct CalendarSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(default)]
    pub grid_layout: GridLayout,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(default)]
    pub utc_offset_hours: i8,
    /// Time of day given to tasks scheduled with a bare date.
    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(default = "default_task_time")]
    pub default_task_time: CalendarTime,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            grid_layout: GridLayout::default(),
            utc_offset_hours: 0,
            default_task_time: default_task_time(),
        }
    }
}

fn default_task_time() -> CalendarTime {
    CalendarTime::MIDNIGHT
}

impl CalendarSettings {
    pub fn utc_offset(&self) -> Result<UtcOffset, ConfigError> {
        UtcOffset::from_hms(self.utc_offset_hours, 0, 0).map_err(|e| {
            ConfigError::Message(format!(
                "calendar.utc_offset_hours {} is invalid: {}",
                self.utc_offset_hours, e
            ))
        })
    }

    pub fn planner_options(&self) -> Result<PlannerOptions, ConfigError> {
        Ok(PlannerOptions {
            grid_layout: self.grid_layout,
            utc_offset: self.utc_offset()?,
        })
    }

    pub fn date_resolution(&self) -> Result<DateResolution, ConfigError> {
        Ok(DateResolution {
            default_time: self.default_task_time,
            utc_offset: self.utc_offset()?,
        })
    }
}

/// Reads settings from `./config`, selecting the environment file from
/// `APP_ENVIRONMENT` and applying `NEST_`-prefixed overrides.
pub fn read_config() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| ConfigError::Message(format!("failed to determine current directory: {e}")))?;

    let environment = Environment::from_str(
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .as_str(),
    )
    .map_err(|e| ConfigError::Message(format!("failed to parse APP_ENVIRONMENT: {e}")))?;

    load_settings(
        &base_path.join("config"),
        environment,
        config::Environment::with_prefix("NEST")
            .prefix_separator("_")
            .separator("__"),
    )
}

pub fn load_settings(
    config_directory: &Path,
    environment: Environment,
    overrides: config::Environment,
) -> Result<Settings, ConfigError> {
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")).required(false))
        .add_source(
            config::File::from(config_directory.join(environment_filename)).required(false),
        )
        .add_source(overrides)
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}
