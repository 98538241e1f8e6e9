use crate::config::toml_config::{SourceSelection, SurveyConfig};
use crate::utils::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "vacancy-stats")]
#[command(about = "Average programmer salaries per language from HeadHunter and SuperJob")]
pub struct CliConfig {
    /// Optional TOML file; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Comma-separated languages to survey
    #[arg(long, value_delimiter = ',')]
    pub languages: Vec<String>,

    #[arg(long, value_enum, default_value_t = SourceSelection::All)]
    pub source: SourceSelection,

    /// SuperJob application key (X-Api-App-Id)
    #[arg(long, env = "SUPER_JOB_TOKEN", hide_env_values = true)]
    pub superjob_token: Option<String>,

    #[arg(long)]
    pub hh_endpoint: Option<String>,

    #[arg(long)]
    pub superjob_endpoint: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Only print hh.ru found counts, without salaries
    #[arg(long)]
    pub count_only: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// File (or built-in defaults) with command-line overrides applied.
    pub fn resolve(&self) -> Result<SurveyConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                SurveyConfig::from_file(path)?
            }
            None => SurveyConfig::default(),
        };

        if !self.languages.is_empty() {
            config.survey.languages = self
                .languages
                .iter()
                .map(|l| l.trim().to_string())
                .collect();
        }
        if let Some(token) = &self.superjob_token {
            config.superjob.token = Some(token.clone());
        }
        if let Some(endpoint) = &self.hh_endpoint {
            config.headhunter.endpoint = endpoint.clone();
        }
        if let Some(endpoint) = &self.superjob_endpoint {
            config.superjob.endpoint = endpoint.clone();
        }

        Ok(config)
    }

    /// `--count-only` never touches SuperJob.
    pub fn effective_sources(&self) -> SourceSelection {
        if self.count_only {
            SourceSelection::Hh
        } else {
            self.source
        }
    }
}
