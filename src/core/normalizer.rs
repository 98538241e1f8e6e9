use crate::domain::model::{HeadHunterVacancy, SalaryRange, SuperJobVacancy};
use crate::domain::ports::SalaryNormalizer;

pub const DEFAULT_ACCEPTED_CURRENCY: &str = "RUR";

/// hh.ru salaries: only the accepted currency is estimated.
#[derive(Debug, Clone)]
pub struct HeadHunterNormalizer {
    accepted_currency: String,
}

impl HeadHunterNormalizer {
    pub fn new(accepted_currency: impl Into<String>) -> Self {
        Self {
            accepted_currency: accepted_currency.into(),
        }
    }

    pub fn accepted_currency(&self) -> &str {
        &self.accepted_currency
    }
}

impl Default for HeadHunterNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_ACCEPTED_CURRENCY)
    }
}

impl SalaryNormalizer for HeadHunterNormalizer {
    type Vacancy = HeadHunterVacancy;

    fn predict_salary(&self, vacancy: Option<&HeadHunterVacancy>) -> Option<f64> {
        let salary = vacancy?.salary.as_ref()?;
        if salary.currency.as_deref() != Some(self.accepted_currency.as_str()) {
            return None;
        }
        positive(SalaryRange::new(salary.from, salary.to).estimate())
    }
}

/// superjob.ru salaries: bounds live on the vacancy itself, any currency.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuperJobNormalizer;

impl SalaryNormalizer for SuperJobNormalizer {
    type Vacancy = SuperJobVacancy;

    fn predict_salary(&self, vacancy: Option<&SuperJobVacancy>) -> Option<f64> {
        let vacancy = vacancy?;
        positive(SalaryRange::new(vacancy.payment_from, vacancy.payment_to).estimate())
    }
}

fn positive(estimate: Option<f64>) -> Option<f64> {
    estimate.filter(|salary| *salary > 0.0)
}
