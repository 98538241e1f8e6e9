pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use adapters::{HeadHunterClient, SuperJobClient};
pub use config::{SourceSelection, SurveyConfig};
pub use crate::core::{aggregator::aggregate, estimator::predict_salary, survey::SalarySurvey};
pub use domain::model::{LanguageReport, LanguageStats, SurveyReport};
pub use utils::error::{Result, SurveyError};
