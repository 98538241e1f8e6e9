use crate::utils::error::{Result, SurveyError};
use std::path::{Path, PathBuf};

/// Loads `.env` from the working directory or one of its parents.
/// Variables already set in the environment win. A missing file is not an error.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

pub fn load_dotenv_from(path: &Path) -> Result<()> {
    dotenvy::from_path(path).map_err(|e| SurveyError::ConfigError {
        message: format!("Cannot load {}: {}", path.display(), e),
    })
}
