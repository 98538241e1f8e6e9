use crate::domain::model::FetchedVacancies;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Turns one source-specific vacancy record into a salary estimate.
///
/// Absent records, unusable salaries and filtered currencies all yield
/// `None`; normalization never fails.
pub trait SalaryNormalizer: Send + Sync {
    type Vacancy;

    fn predict_salary(&self, vacancy: Option<&Self::Vacancy>) -> Option<f64>;
}

/// A job board that can be paged through for one language at a time.
#[async_trait]
pub trait VacancySource: Send + Sync {
    type Vacancy: Send + Sync;
    type Normalizer: SalaryNormalizer<Vacancy = Self::Vacancy>;

    /// Table title for this source's report, e.g. `HH Moscow`.
    fn title(&self) -> &str;

    fn normalizer(&self) -> &Self::Normalizer;

    async fn fetch(&self, language: &str) -> Result<FetchedVacancies<Self::Vacancy>>;
}
