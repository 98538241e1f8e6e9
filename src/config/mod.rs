#[cfg(feature = "cli")]
pub mod cli;
pub mod env_file;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, OutputFormat};
pub use toml_config::{
    HeadHunterConfig, SourceSelection, SuperJobConfig, SurveyConfig, SurveySettings,
};
