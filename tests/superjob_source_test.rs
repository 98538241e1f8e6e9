use httpmock::prelude::*;
use serde_json::json;
use vacancy_stats::adapters::{http_client, SuperJobClient};
use vacancy_stats::config::SuperJobConfig;
use vacancy_stats::core::VacancySource;
use vacancy_stats::{LanguageStats, SalarySurvey, SurveyError};

const TOKEN: &str = "v3.r.test-token";

fn client_for(server: &MockServer, max_pages: u32) -> SuperJobClient {
    let config = SuperJobConfig {
        endpoint: server.url("/2.0/vacancies/"),
        token: Some(TOKEN.to_string()),
        max_pages,
        ..Default::default()
    };
    SuperJobClient::new(http_client(5).unwrap(), config).unwrap()
}

fn vacancy(from: u64, to: u64) -> serde_json::Value {
    json!({"profession": "Разработчик", "payment_from": from, "payment_to": to, "currency": "rub"})
}

#[tokio::test]
async fn test_fetch_pages_until_more_is_false() {
    let server = MockServer::start();
    let page0 = server.mock(|when, then| {
        when.method(GET)
            .path("/2.0/vacancies/")
            .header("x-api-app-id", TOKEN)
            .query_param("keyword", "Python")
            .query_param("town", "4")
            .query_param("page", "0");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"objects": [vacancy(100, 200), vacancy(0, 0)], "total": 3, "more": true}));
    });
    let page1 = server.mock(|when, then| {
        when.method(GET)
            .path("/2.0/vacancies/")
            .header("x-api-app-id", TOKEN)
            .query_param("page", "1");
        then.status(200)
            .json_body(json!({"objects": [vacancy(300, 0)], "total": 3, "more": false}));
    });
    let page2 = server.mock(|when, then| {
        when.method(GET).path("/2.0/vacancies/").query_param("page", "2");
        then.status(200).json_body(json!({"objects": [], "total": 3, "more": false}));
    });

    let client = client_for(&server, 50);
    let fetched = client.fetch("Python").await.unwrap();

    page0.assert();
    page1.assert();
    page2.assert_hits(0);
    assert_eq!(fetched.records.len(), 3);
    assert_eq!(fetched.found, 3);
}

#[tokio::test]
async fn test_http_error_aborts_fetch() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/2.0/vacancies/");
        then.status(403).json_body(json!({"error": {"code": 403, "message": "Invalid app_key"}}));
    });

    let client = client_for(&server, 50);
    let result = client.fetch("Go").await;

    api_mock.assert();
    match result {
        Err(SurveyError::HttpStatusError {
            source_name,
            status,
            ..
        }) => {
            assert_eq!(source_name, "SJ Moscow");
            assert_eq!(status, 403);
        }
        other => panic!("expected HTTP status error, got {:?}", other.map(|f| f.found)),
    }
}

#[tokio::test]
async fn test_max_pages_guard() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/2.0/vacancies/");
        then.status(200)
            .json_body(json!({"objects": [vacancy(1000, 2000)], "total": 9999, "more": true}));
    });

    let client = client_for(&server, 3);
    let fetched = client.fetch("JavaScript").await.unwrap();

    api_mock.assert_hits(3);
    assert_eq!(fetched.records.len(), 3);
    assert_eq!(fetched.found, 9999);
}

#[test]
fn test_missing_token_is_rejected() {
    let config = SuperJobConfig::default();
    let result = SuperJobClient::new(http_client(5).unwrap(), config);
    assert!(matches!(result, Err(SurveyError::MissingConfigError { .. })));
}

#[tokio::test]
async fn test_survey_ignores_currency_and_empty_salaries() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/2.0/vacancies/").query_param("keyword", "C#");
        then.status(200).json_body(json!({
            "objects": [
                vacancy(100, 200),
                vacancy(0, 0),
                {"profession": "Dev", "payment_from": 100, "payment_to": 101, "currency": "usd"},
                null
            ],
            "total": 12,
            "more": false
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/2.0/vacancies/").query_param("keyword", "C");
        then.status(200).json_body(json!({"objects": [], "total": 0, "more": false}));
    });

    let survey = SalarySurvey::new(client_for(&server, 50));
    let report = survey
        .run(&["C#".to_string(), "C".to_string()])
        .await
        .unwrap();

    assert_eq!(report.title, "SJ Moscow");
    // (150 + 100.5) / 2 = 125.25
    assert_eq!(
        report.rows[0].stats,
        LanguageStats {
            vacancies_found: 12,
            vacancies_processed: 2,
            average_salary: 125,
        }
    );
    assert_eq!(
        report.rows[1].stats,
        LanguageStats {
            vacancies_found: 0,
            vacancies_processed: 0,
            average_salary: 0,
        }
    );
}

#[tokio::test]
async fn test_malformed_vacancy_does_not_abort_survey() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/2.0/vacancies/");
        then.status(200).json_body(json!({
            "objects": [
                vacancy(100, 200),
                {"profession": "Dev", "payment_from": "negotiable"}
            ],
            "total": 2,
            "more": false
        }));
    });

    let survey = SalarySurvey::new(client_for(&server, 50));
    let report = survey.run(&["Scala".to_string()]).await.unwrap();

    api_mock.assert();
    assert_eq!(
        report.rows[0].stats,
        LanguageStats {
            vacancies_found: 2,
            vacancies_processed: 1,
            average_salary: 150,
        }
    );
}
