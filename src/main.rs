use clap::Parser;
use vacancy_stats::adapters::http_client;
use vacancy_stats::config::env_file;
use vacancy_stats::core::report;
use vacancy_stats::utils::error::ErrorSeverity;
use vacancy_stats::utils::logger;
use vacancy_stats::{
    CliConfig, HeadHunterClient, OutputFormat, SalarySurvey, SuperJobClient, SurveyConfig,
    SurveyError, SurveyReport,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Before parsing, so clap sees SUPER_JOB_TOKEN from `.env`.
    let env_file = env_file::load_dotenv();
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting vacancy-stats");
    if let Some(path) = env_file {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let sources = cli.effective_sources();
    let config = match cli
        .resolve()
        .and_then(|config| config.validate_for(sources).map(|_| config))
    {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };
    tracing::debug!("Resolved config: {:?}", config);

    let outcome = if cli.count_only {
        print_counts(&config).await
    } else {
        run_survey(&config, &cli).await
    };

    if let Err(e) = outcome {
        exit_with(e);
    }

    Ok(())
}

async fn run_survey(config: &SurveyConfig, cli: &CliConfig) -> vacancy_stats::Result<()> {
    let sources = cli.effective_sources();
    let client = http_client(config.survey.timeout_seconds)?;
    let languages = &config.survey.languages;
    let mut reports: Vec<SurveyReport> = Vec::new();

    if sources.includes_headhunter() {
        let survey = SalarySurvey::new(HeadHunterClient::new(
            client.clone(),
            config.headhunter.clone(),
        ));
        reports.push(survey.run(languages).await?);
    }

    if sources.includes_superjob() {
        let survey = SalarySurvey::new(SuperJobClient::new(client, config.superjob.clone())?);
        reports.push(survey.run(languages).await?);
    }

    match cli.format {
        OutputFormat::Table => {
            for report in &reports {
                println!("{}", report::render_table(report));
            }
        }
        OutputFormat::Json => println!("{}", report::render_json(&reports)?),
    }

    tracing::info!("✅ Survey finished");
    Ok(())
}

async fn print_counts(config: &SurveyConfig) -> vacancy_stats::Result<()> {
    let client = HeadHunterClient::new(
        http_client(config.survey.timeout_seconds)?,
        config.headhunter.clone(),
    );

    let mut counts = Vec::with_capacity(config.survey.languages.len());
    for language in &config.survey.languages {
        counts.push((language.clone(), client.count_vacancies(language).await?));
    }

    println!("{}", report::render_counts(&config.headhunter.title, &counts));
    Ok(())
}

fn exit_with(e: SurveyError) -> ! {
    tracing::error!(
        "❌ vacancy-stats failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
