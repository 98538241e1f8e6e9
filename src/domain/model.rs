use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Salary bounds of one vacancy. Zero or negative bounds mean "not specified".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SalaryRange {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl SalaryRange {
    pub fn new(lower: Option<f64>, upper: Option<f64>) -> Self {
        Self {
            lower: lower.filter(|v| *v > 0.0),
            upper: upper.filter(|v| *v > 0.0),
        }
    }

    pub fn estimate(&self) -> Option<f64> {
        crate::core::estimator::predict_salary(self.lower, self.upper)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadHunterSalary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
    pub gross: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadHunterVacancy {
    pub name: Option<String>,
    pub salary: Option<HeadHunterSalary>,
}

/// One page of `GET /vacancies` on hh.ru.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeadHunterPage {
    #[serde(default, deserialize_with = "lenient_records")]
    pub items: Vec<Option<HeadHunterVacancy>>,
    #[serde(default)]
    pub found: u64,
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperJobVacancy {
    pub profession: Option<String>,
    pub payment_from: Option<f64>,
    pub payment_to: Option<f64>,
    pub currency: Option<String>,
}

/// One page of `GET /2.0/vacancies/` on superjob.ru.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuperJobPage {
    #[serde(default, deserialize_with = "lenient_records")]
    pub objects: Vec<Option<SuperJobVacancy>>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub more: bool,
}

/// Decodes each record on its own; a null or malformed record becomes `None`
/// instead of failing the whole page.
fn lenient_records<'de, D, V>(deserializer: D) -> Result<Vec<Option<V>>, D::Error>
where
    D: Deserializer<'de>,
    V: DeserializeOwned,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|value| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!("Unreadable vacancy record dropped: {}", e);
                None
            }
        })
        .collect())
}

/// Everything a source returned for one language after paging through it.
#[derive(Debug, Clone)]
pub struct FetchedVacancies<V> {
    pub records: Vec<Option<V>>,
    /// Total reported by the source, not `records.len()`.
    pub found: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LanguageStats {
    pub vacancies_found: u64,
    pub vacancies_processed: usize,
    pub average_salary: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageReport {
    pub language: String,
    #[serde(flatten)]
    pub stats: LanguageStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveyReport {
    pub title: String,
    pub rows: Vec<LanguageReport>,
}
