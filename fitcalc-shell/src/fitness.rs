use fitcalc_model::metrics::{BodyMetrics, Gender};

/// Harris-Benedict estimate of resting energy expenditure, in kcal/day.
pub fn basal_metabolic_rate(metrics: &BodyMetrics) -> f64 {
    match metrics.gender() {
        Gender::Female => {
            447.593 + 9.247 * metrics.weight_kg() + 3.098 * metrics.height_cm()
                - 4.330 * metrics.age_years() as f64
        }
        Gender::Male => {
            88.362 + 13.397 * metrics.weight_kg() + 4.799 * metrics.height_cm()
                - 5.677 * metrics.age_years() as f64
        }
    }
}

pub fn estimate_calories(metrics: &BodyMetrics) -> i64 {
    (basal_metabolic_rate(metrics) * metrics.activity_level().multiplier()).round() as i64
}
