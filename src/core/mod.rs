pub mod aggregator;
pub mod estimator;
pub mod normalizer;
pub mod report;
pub mod survey;

pub use crate::domain::model::{FetchedVacancies, LanguageReport, LanguageStats, SurveyReport};
pub use crate::domain::ports::{SalaryNormalizer, VacancySource};
pub use crate::utils::error::Result;
