use httpmock::prelude::*;
use vacancy_stats::adapters::http_client;
use vacancy_stats::core::report::{render_json, render_table};
use vacancy_stats::{HeadHunterClient, SalarySurvey, SourceSelection, SuperJobClient, SurveyConfig};

fn config_for(server: &MockServer, languages: &[&str]) -> SurveyConfig {
    let mut config = SurveyConfig::default();
    config.survey.languages = languages.iter().map(|l| l.to_string()).collect();
    config.survey.timeout_seconds = 5;
    config.headhunter.endpoint = server.url("/hh/vacancies");
    config.headhunter.max_page = 1;
    config.superjob.endpoint = server.url("/sj/2.0/vacancies/");
    config.superjob.token = Some("integration-token".to_string());
    config
}

#[tokio::test]
async fn test_end_to_end_survey_of_both_sources() {
    let server = MockServer::start();

    let hh_python = server.mock(|when, then| {
        when.method(GET)
            .path("/hh/vacancies")
            .query_param("text", "программист Python");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "items": [
                    {"name": "Python dev", "salary": {"from": 200000, "to": 300000, "currency": "RUR"}},
                    {"name": "Python lead", "salary": {"from": 4000, "to": null, "currency": "EUR"}}
                ],
                "found": 1500,
                "pages": 75
            }));
    });
    let hh_go = server.mock(|when, then| {
        when.method(GET).path("/hh/vacancies").query_param("text", "программист Go");
        then.status(200).json_body(serde_json::json!({
            "items": [{"name": "Go dev", "salary": null}],
            "found": 640,
            "pages": 1
        }));
    });
    let sj_python = server.mock(|when, then| {
        when.method(GET)
            .path("/sj/2.0/vacancies/")
            .header("x-api-app-id", "integration-token")
            .query_param("keyword", "Python");
        then.status(200).json_body(serde_json::json!({
            "objects": [{"profession": "Python", "payment_from": 150000, "payment_to": 0, "currency": "rub"}],
            "total": 80,
            "more": false
        }));
    });
    let sj_go = server.mock(|when, then| {
        when.method(GET).path("/sj/2.0/vacancies/").query_param("keyword", "Go");
        then.status(200).json_body(serde_json::json!({"objects": [], "total": 0, "more": false}));
    });

    let config = config_for(&server, &["Python", "Go"]);
    assert!(config.validate_for(SourceSelection::All).is_ok());
    let client = http_client(config.survey.timeout_seconds).unwrap();

    let hh = SalarySurvey::new(HeadHunterClient::new(client.clone(), config.headhunter.clone()));
    let hh_report = hh.run(&config.survey.languages).await.unwrap();

    let sj = SalarySurvey::new(SuperJobClient::new(client, config.superjob.clone()).unwrap());
    let sj_report = sj.run(&config.survey.languages).await.unwrap();

    // Python pages 0 and 1 (max_page = 1), Go stops after its only page.
    hh_python.assert_hits(2);
    hh_go.assert_hits(1);
    sj_python.assert();
    sj_go.assert();

    let python = &hh_report.rows[0].stats;
    assert_eq!(python.vacancies_found, 1500);
    assert_eq!(python.vacancies_processed, 2);
    assert_eq!(python.average_salary, 250_000);

    let go = &hh_report.rows[1].stats;
    assert_eq!(go.vacancies_found, 640);
    assert_eq!(go.vacancies_processed, 0);
    assert_eq!(go.average_salary, 0);

    assert_eq!(sj_report.rows[0].stats.average_salary, 180_000);
    assert_eq!(sj_report.rows[0].stats.vacancies_found, 80);

    let hh_table = render_table(&hh_report);
    assert!(hh_table.starts_with("HH Moscow"));
    assert!(hh_table.contains("Vacancies processed"));
    assert!(hh_table.contains("250000"));

    let sj_table = render_table(&sj_report);
    assert!(sj_table.starts_with("SJ Moscow"));
    assert!(sj_table.contains("180000"));

    let json = render_json(&[hh_report, sj_report]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[1]["rows"][0]["language"], "Python");
}

#[tokio::test]
async fn test_superjob_failure_surfaces_as_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/sj/2.0/vacancies/");
        then.status(500);
    });

    let config = config_for(&server, &["Ruby"]);
    let client = http_client(5).unwrap();
    let sj = SalarySurvey::new(SuperJobClient::new(client, config.superjob.clone()).unwrap());

    let err = sj.run(&config.survey.languages).await.unwrap_err();
    assert_eq!(err.severity(), vacancy_stats::utils::error::ErrorSeverity::Medium);
}
