use crate::models::Summary;
use crate::tracker::Tracker;

/// Projects the tracker onto the display values: consumed/burned sums,
/// remaining calories, and the progress bar geometry. Pure derivation; the
/// over-limit state is recomputed here on every call, never stored.
pub fn build_summary(tracker: &Tracker) -> Summary {
    let remaining = tracker.remaining();
    let progress_pct = progress_percentage(tracker.total_calories(), tracker.calorie_limit);
    Summary {
        total_calories: tracker.total_calories(),
        calorie_limit: tracker.calorie_limit,
        consumed: tracker.consumed(),
        burned: tracker.burned(),
        remaining,
        progress_pct,
        bar_width_pct: bar_width(progress_pct),
        over_limit: remaining < 0,
    }
}

pub fn progress_percentage(total: i64, limit: i64) -> f64 {
    if limit <= 0 {
        return 0.0;
    }
    total as f64 / limit as f64 * 100.0
}

/// Clamped at the top only; the stylesheet floors negative widths at zero.
pub fn bar_width(percentage: f64) -> f64 {
    percentage.min(100.0)
}
