use crate::utils::error::{Result, SurveyError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_LANGUAGES: [&str; 10] = [
    "Python",
    "Java",
    "JavaScript",
    "Ruby",
    "PHP",
    "Swift",
    "Go",
    "C#",
    "C++",
    "C",
];

/// Which job boards a run queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SourceSelection {
    Hh,
    Superjob,
    #[default]
    All,
}

impl SourceSelection {
    pub fn includes_headhunter(self) -> bool {
        matches!(self, SourceSelection::Hh | SourceSelection::All)
    }

    pub fn includes_superjob(self) -> bool {
        matches!(self, SourceSelection::Superjob | SourceSelection::All)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    pub survey: SurveySettings,
    pub headhunter: HeadHunterConfig,
    pub superjob: SuperJobConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveySettings {
    pub languages: Vec<String>,
    pub timeout_seconds: u64,
}

impl Default for SurveySettings {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadHunterConfig {
    pub endpoint: String,
    pub user_agent: String,
    /// Prepended to the language in the `text` query.
    pub search_prefix: String,
    /// hh.ru area id; 1 is Moscow.
    pub area: u32,
    /// Publication window in days.
    pub period: u32,
    pub per_page: u32,
    /// Last page index requested, inclusive.
    pub max_page: u32,
    pub accepted_currency: String,
    pub title: String,
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.hh.ru/vacancies".to_string(),
            user_agent: concat!("vacancy-stats/", env!("CARGO_PKG_VERSION")).to_string(),
            search_prefix: "программист".to_string(),
            area: 1,
            period: 30,
            per_page: 20,
            max_page: 10,
            accepted_currency: crate::core::normalizer::DEFAULT_ACCEPTED_CURRENCY.to_string(),
            title: "HH Moscow".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperJobConfig {
    pub endpoint: String,
    /// Sent as `X-Api-App-Id`.
    pub token: Option<String>,
    /// superjob.ru town id; 4 is Moscow.
    pub town: u32,
    /// Guard against a `more` flag that never clears.
    pub max_pages: u32,
    pub title: String,
}

impl Default for SuperJobConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.superjob.ru/2.0/vacancies/".to_string(),
            token: None,
            town: 4,
            max_pages: 50,
            title: "SJ Moscow".to_string(),
        }
    }
}

impl SuperJobConfig {
    /// The token, rejecting blanks and `${VAR}` placeholders left unresolved.
    pub fn require_token(&self) -> Result<&str> {
        let token = validation::require("superjob.token", &self.token)?;
        validation::validate_not_blank("superjob.token", token)?;
        validation::validate_resolved("superjob.token", token)?;
        Ok(token.as_str())
    }
}

impl SurveyConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SurveyError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SurveyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SurveyError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Full validation, including the SuperJob token when SuperJob is queried.
    pub fn validate_for(&self, sources: SourceSelection) -> Result<()> {
        self.validate()?;
        if sources.includes_superjob() {
            self.superjob.require_token()?;
        }
        Ok(())
    }
}

impl Validate for SurveyConfig {
    fn validate(&self) -> Result<()> {
        let hh = &self.headhunter;
        let sj = &self.superjob;

        validation::validate_languages("survey.languages", &self.survey.languages)?;
        validation::validate_at_least("survey.timeout_seconds", self.survey.timeout_seconds, 1)?;

        validation::validate_http_url("headhunter.endpoint", &hh.endpoint)?;
        validation::validate_not_blank("headhunter.user_agent", &hh.user_agent)?;
        validation::validate_not_blank("headhunter.accepted_currency", &hh.accepted_currency)?;
        validation::validate_range("headhunter.per_page", hh.per_page, 1, 100)?;
        // Keeps `page + 1` in range and the loop short.
        validation::validate_range("headhunter.max_page", hh.max_page, 0, 199)?;

        validation::validate_http_url("superjob.endpoint", &sj.endpoint)?;
        validation::validate_at_least("superjob.max_pages", u64::from(sj.max_pages), 1)?;

        Ok(())
    }
}
