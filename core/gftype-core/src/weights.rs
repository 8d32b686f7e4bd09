//! The nine-step static weight table and semantic classification

use crate::metadata::FontRecord;

/// The nine conventional weight steps and their semantic names, in order.
pub const WEIGHT_STEPS: [(i32, &str); 9] = [
    (100, "thin"),
    (200, "extralight"),
    (300, "light"),
    (400, "regular"),
    (500, "medium"),
    (600, "semibold"),
    (700, "bold"),
    (800, "extrabold"),
    (900, "black"),
];

/// Semantic name for a numeric weight, if it sits exactly on a step.
pub fn weight_name(weight: i32) -> Option<&'static str> {
    WEIGHT_STEPS
        .iter()
        .find(|(step, _)| *step == weight)
        .map(|(_, name)| *name)
}

/// The ordered subset of the nine semantic names available for a family:
/// a step counts if it appears as an explicit static variant weight or is
/// covered by the family's declared weight-axis range.
pub fn semantic_weights(record: &FontRecord) -> Vec<&'static str> {
    let range = record.weight_axis();

    WEIGHT_STEPS
        .iter()
        .filter(|(step, _)| {
            let static_hit = record.variants.iter().any(|v| v.weight == *step);
            let axis_hit = range
                .map(|r| r.min <= f64::from(*step) && f64::from(*step) <= r.max)
                .unwrap_or(false);
            static_hit || axis_hit
        })
        .map(|(_, name)| *name)
        .collect()
}
