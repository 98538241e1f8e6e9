use crate::domain::model::LanguageStats;
use crate::domain::ports::SalaryNormalizer;

/// Reduces one language's vacancies from one source into [`LanguageStats`].
///
/// `found` is the source's own total and is passed through untouched, so
/// `vacancies_processed` may exceed it. Records without a usable salary are
/// skipped; the average is truncated toward zero.
pub fn aggregate<N>(
    language: &str,
    normalizer: &N,
    records: &[Option<N::Vacancy>],
    found: u64,
) -> LanguageStats
where
    N: SalaryNormalizer + ?Sized,
{
    let salaries: Vec<f64> = records
        .iter()
        .filter_map(|record| normalizer.predict_salary(record.as_ref()))
        .collect();

    let average_salary = if salaries.is_empty() {
        0
    } else {
        (salaries.iter().sum::<f64>() / salaries.len() as f64).trunc() as u64
    };

    tracing::debug!(
        "{}: {} of {} fetched vacancies have a usable salary",
        language,
        salaries.len(),
        records.len()
    );

    LanguageStats {
        vacancies_found: found,
        vacancies_processed: salaries.len(),
        average_salary,
    }
}
