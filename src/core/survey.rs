use crate::core::aggregator::aggregate;
use crate::domain::model::{LanguageReport, SurveyReport};
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;

/// Walks the language list against one source: fetch, then aggregate.
pub struct SalarySurvey<S: VacancySource> {
    source: S,
}

impl<S: VacancySource> SalarySurvey<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn run(&self, languages: &[String]) -> Result<SurveyReport> {
        tracing::info!(
            "📡 {}: surveying {} languages",
            self.source.title(),
            languages.len()
        );

        let mut rows = Vec::with_capacity(languages.len());
        for language in languages {
            let fetched = self.source.fetch(language).await?;
            tracing::debug!(
                "{}: {} fetched {} records, {} reported",
                self.source.title(),
                language,
                fetched.records.len(),
                fetched.found
            );

            let stats = aggregate(
                language,
                self.source.normalizer(),
                &fetched.records,
                fetched.found,
            );
            tracing::info!(
                "{} / {}: found {}, processed {}, average {}",
                self.source.title(),
                language,
                stats.vacancies_found,
                stats.vacancies_processed,
                stats.average_salary
            );

            rows.push(LanguageReport {
                language: language.clone(),
                stats,
            });
        }

        Ok(SurveyReport {
            title: self.source.title().to_string(),
            rows,
        })
    }
}
