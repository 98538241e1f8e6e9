use crate::adapters::ensure_success;
use crate::config::HeadHunterConfig;
use crate::core::normalizer::HeadHunterNormalizer;
use crate::domain::model::{FetchedVacancies, HeadHunterPage, HeadHunterVacancy};
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;

/// hh.ru vacancy search.
///
/// Pages `0..=max_page` are requested one after another. A page that fails is
/// logged and skipped; the found count comes from the latest page that
/// succeeded, or is 0 when none did.
pub struct HeadHunterClient {
    client: Client,
    config: HeadHunterConfig,
    normalizer: HeadHunterNormalizer,
}

impl HeadHunterClient {
    pub fn new(client: Client, config: HeadHunterConfig) -> Self {
        let normalizer = HeadHunterNormalizer::new(config.accepted_currency.clone());
        Self {
            client,
            config,
            normalizer,
        }
    }

    fn search_text(&self, language: &str) -> String {
        format!("{} {}", self.config.search_prefix, language)
            .trim()
            .to_string()
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<HeadHunterPage> {
        let request = self
            .client
            .get(&self.config.endpoint)
            .header(USER_AGENT, &self.config.user_agent)
            .query(&[("text", self.search_text(language))])
            .query(&[
                ("area", self.config.area),
                ("period", self.config.period),
                ("per_page", self.config.per_page),
                ("page", page),
            ]);

        tracing::debug!("📡 {}: {} page {}", self.config.title, language, page);
        let response = ensure_success(&self.config.title, request.send().await?)?;
        Ok(response.json().await?)
    }

    /// Total matches for `language` without paging through them.
    pub async fn count_vacancies(&self, language: &str) -> Result<u64> {
        let request = self
            .client
            .get(&self.config.endpoint)
            .header(USER_AGENT, &self.config.user_agent)
            .query(&[("text", self.search_text(language))])
            .query(&[("area", self.config.area), ("period", self.config.period)]);

        let response = ensure_success(&self.config.title, request.send().await?)?;
        let page: HeadHunterPage = response.json().await?;
        tracing::debug!("{}: {} reports {} vacancies", self.config.title, language, page.found);
        Ok(page.found)
    }
}

#[async_trait]
impl VacancySource for HeadHunterClient {
    type Vacancy = HeadHunterVacancy;
    type Normalizer = HeadHunterNormalizer;

    fn title(&self) -> &str {
        &self.config.title
    }

    fn normalizer(&self) -> &HeadHunterNormalizer {
        &self.normalizer
    }

    async fn fetch(&self, language: &str) -> Result<FetchedVacancies<HeadHunterVacancy>> {
        let mut records = Vec::new();
        let mut found = None;

        for page in 0..=self.config.max_page {
            match self.fetch_page(language, page).await {
                Ok(body) => {
                    records.extend(body.items);
                    found = Some(body.found);
                    // hh.ru answers 400 past the last page.
                    if body.pages.is_some_and(|pages| page + 1 >= pages) {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        "⚠️ {}: skipping page {} for {}: {}",
                        self.config.title,
                        page,
                        language,
                        e
                    );
                }
            }
        }

        let found = found.unwrap_or_else(|| {
            tracing::warn!(
                "⚠️ {}: no page succeeded for {}, reporting 0 found",
                self.config.title,
                language
            );
            0
        });

        Ok(FetchedVacancies { records, found })
    }
}
