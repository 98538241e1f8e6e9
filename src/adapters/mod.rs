// Adapters layer: HTTP clients for the job boards.

pub mod headhunter;
pub mod superjob;

pub use headhunter::HeadHunterClient;
pub use superjob::SuperJobClient;

use crate::utils::error::{Result, SurveyError};
use reqwest::{Client, Response};
use std::time::Duration;

/// One client shared by both sources.
pub fn http_client(timeout_seconds: u64) -> Result<Client> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()?)
}

pub(crate) fn ensure_success(source_name: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(SurveyError::HttpStatusError {
        source_name: source_name.to_string(),
        status: status.as_u16(),
        url: response.url().to_string(),
    })
}
