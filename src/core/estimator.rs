/// Point estimate from a possibly open-ended salary range.
///
/// A lone floor is bumped by 20%, a lone ceiling cut by 20%.
pub fn predict_salary(lower: Option<f64>, upper: Option<f64>) -> Option<f64> {
    match (lower, upper) {
        (None, None) => None,
        (Some(lower), Some(upper)) => Some((lower + upper) / 2.0),
        (Some(lower), None) => Some(lower * 1.2),
        (None, Some(upper)) => Some(upper * 0.8),
    }
}
