use crate::types::Section;

/// Number of exercises across all sections of a day.
pub fn get_total_exercises(sections: &[Section]) -> usize {
    sections.iter().map(|s| s.exercises.len()).sum()
}

/// Percentage of exercises done, rounded to the nearest integer.
///
/// A day with no exercises yields `NaN`; callers surface it as-is.
pub fn calculate_progress(completed: usize, total: usize) -> f64 {
    (completed as f64 / total as f64 * 100.0).round()
}
