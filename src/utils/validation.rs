use crate::utils::error::{Result, SurveyError};
use std::collections::HashSet;
use std::fmt::Display;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl Display, reason: impl Into<String>) -> SurveyError {
    SurveyError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Job-board endpoints must be absolute http(s) URLs.
pub fn validate_http_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).map_err(|e| invalid(field, value, format!("Invalid URL: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(field, value, format!("Expected http or https, got {}", other))),
    }
}

pub fn validate_at_least(field: &str, value: u64, min: u64) -> Result<()> {
    if value < min {
        return Err(invalid(field, value, format!("Must be at least {}", min)));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + Display + Copy>(field: &str, value: T, min: T, max: T) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(field, value, format!("Must be between {} and {}", min, max)));
    }
    Ok(())
}

pub fn require<'a, T>(field: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| SurveyError::MissingConfigError {
        field: field.to_string(),
    })
}

pub fn validate_not_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, value, "Cannot be blank"));
    }
    Ok(())
}

/// A `${VAR}` left in place by TOML substitution means the variable was unset.
pub fn validate_resolved(field: &str, value: &str) -> Result<()> {
    if value.starts_with("${") && value.ends_with('}') {
        return Err(invalid(field, value, "Environment variable is not set"));
    }
    Ok(())
}

/// Non-empty list of distinct, non-blank language names.
pub fn validate_languages(field: &str, languages: &[String]) -> Result<()> {
    if languages.is_empty() {
        return Err(SurveyError::ConfigValidationError {
            field: field.to_string(),
            message: "At least one language is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for language in languages {
        validate_not_blank(field, language)?;
        if !seen.insert(language.as_str()) {
            return Err(invalid(field, language, "Language listed more than once"));
        }
    }

    Ok(())
}
