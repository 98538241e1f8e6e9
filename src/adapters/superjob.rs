use crate::adapters::ensure_success;
use crate::config::SuperJobConfig;
use crate::core::normalizer::SuperJobNormalizer;
use crate::domain::model::{FetchedVacancies, SuperJobPage, SuperJobVacancy};
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

const APP_ID_HEADER: &str = "X-Api-App-Id";

/// superjob.ru vacancy search. Pages until `more` is false; any failed page
/// aborts the fetch.
pub struct SuperJobClient {
    client: Client,
    config: SuperJobConfig,
    token: String,
    normalizer: SuperJobNormalizer,
}

impl SuperJobClient {
    pub fn new(client: Client, config: SuperJobConfig) -> Result<Self> {
        let token = config.require_token()?.to_string();
        Ok(Self {
            client,
            config,
            token,
            normalizer: SuperJobNormalizer,
        })
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<SuperJobPage> {
        let request = self
            .client
            .get(&self.config.endpoint)
            .header(APP_ID_HEADER, &self.token)
            .query(&[("keyword", language)])
            .query(&[("town", self.config.town), ("page", page)]);

        tracing::debug!("📡 {}: {} page {}", self.config.title, language, page);
        let response = ensure_success(&self.config.title, request.send().await?)?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl VacancySource for SuperJobClient {
    type Vacancy = SuperJobVacancy;
    type Normalizer = SuperJobNormalizer;

    fn title(&self) -> &str {
        &self.config.title
    }

    fn normalizer(&self) -> &SuperJobNormalizer {
        &self.normalizer
    }

    async fn fetch(&self, language: &str) -> Result<FetchedVacancies<SuperJobVacancy>> {
        let mut records = Vec::new();
        let mut found = 0;

        for page in 0..self.config.max_pages {
            let body = self.fetch_page(language, page).await?;
            records.extend(body.objects);
            found = body.total;
            if !body.more {
                return Ok(FetchedVacancies { records, found });
            }
        }

        tracing::warn!(
            "⚠️ {}: stopped {} after {} pages with more results pending",
            self.config.title,
            language,
            self.config.max_pages
        );
        Ok(FetchedVacancies { records, found })
    }
}
