//! Time budget model - accumulates per-activity leisure hours into the
//! total that feeds the recommendation engine.
//!
//! Holds a fixed preset list of activities with mutable non-negative hour
//! values. The timeframe selector never changes the total; it only supplies
//! the denominator for the percent-of-period display metric.

use clap::ValueEnum;
use serde::Serialize;

use crate::error::{Result, S24Error};

/// Increment/decrement step for hour adjustments.
pub const HOUR_STEP: f64 = 0.5;

/// A tracked leisure activity with a session-scoped hour value.
#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub name: &'static str,
    pub hours: f64,
    pub icon: &'static str,
}

/// The preset activity list, in display order.
const PRESET_ACTIVITIES: [(&str, &str); 6] = [
    ("TikTok", "smartphone"),
    ("Instagram", "camera"),
    ("YouTube", "monitor"),
    ("Netflix", "film"),
    ("Gaming", "gamepad"),
    ("Other", "more-horizontal"),
];

/// Display-only period selector for the percent-of-period metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Timeframe {
    /// Hours in the period, the denominator for the percentage display.
    #[must_use]
    pub const fn hours(self) -> f64 {
        match self {
            Self::Daily => 24.0,
            Self::Weekly => 168.0,
            Self::Monthly => 720.0,
            Self::Yearly => 8760.0,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daily => "day",
            Self::Weekly => "week",
            Self::Monthly => "month",
            Self::Yearly => "year",
        }
    }
}

/// Per-activity hour tracking over the preset list.
#[derive(Debug, Clone)]
pub struct TimeBudget {
    activities: Vec<Activity>,
}

impl Default for TimeBudget {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeBudget {
    /// Fresh budget with all activities at zero hours.
    #[must_use]
    pub fn new() -> Self {
        Self {
            activities: PRESET_ACTIVITIES
                .iter()
                .map(|&(name, icon)| Activity {
                    name,
                    hours: 0.0,
                    icon,
                })
                .collect(),
        }
    }

    /// The activity list in display order.
    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Set an activity's hours from raw user input.
    ///
    /// Non-numeric or negative input is coerced to 0 rather than rejected.
    pub fn set_hours(&mut self, index: usize, raw: &str) {
        if let Some(activity) = self.activities.get_mut(index) {
            activity.hours = raw.trim().parse::<f64>().unwrap_or(0.0).max(0.0);
        }
    }

    /// Set an activity's hours by preset name, case-insensitively.
    ///
    /// Unknown names are an error; the hour value itself still follows the
    /// coerce-to-zero policy of [`TimeBudget::set_hours`].
    pub fn set_named(&mut self, name: &str, raw: &str) -> Result<()> {
        let index = self
            .activities
            .iter()
            .position(|a| a.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| S24Error::UnknownActivity(name.to_string()))?;
        self.set_hours(index, raw);
        Ok(())
    }

    /// Bump an activity up by the fixed step.
    pub fn increment(&mut self, index: usize) {
        if let Some(activity) = self.activities.get_mut(index) {
            activity.hours += HOUR_STEP;
        }
    }

    /// Bump an activity down by the fixed step, clamped at zero.
    pub fn decrement(&mut self, index: usize) {
        if let Some(activity) = self.activities.get_mut(index) {
            activity.hours = (activity.hours - HOUR_STEP).max(0.0);
        }
    }

    /// Total tracked hours across all activities.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.activities.iter().map(|a| a.hours).sum()
    }

    /// Share of the timeframe consumed by the total, capped at 100.
    #[must_use]
    pub fn percent_of(&self, timeframe: Timeframe) -> f64 {
        ((self.total() / timeframe.hours()) * 100.0).min(100.0)
    }
}

/// Motivational banner line for a total-hours value.
#[must_use]
pub fn motivational_message(total_hours: f64) -> &'static str {
    if total_hours == 0.0 {
        "Track your time to unlock learning opportunities"
    } else if total_hours < 4.0 {
        "Every minute counts! Small steps lead to big wins"
    } else if total_hours < 12.0 {
        "You're on your way to mastering something amazing"
    } else if total_hours < 24.0 {
        "Incredible potential! You could master a whole new skill"
    } else {
        "Outstanding! You have time to pick up several skills"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_budget_totals_zero() {
        let budget = TimeBudget::new();
        assert_eq!(budget.activities().len(), 6);
        assert!(budget.total().abs() < f64::EPSILON);
    }

    #[test]
    fn set_hours_coerces_bad_input_to_zero() {
        let mut budget = TimeBudget::new();

        budget.set_hours(0, "3.5");
        assert!((budget.activities()[0].hours - 3.5).abs() < f64::EPSILON);

        budget.set_hours(0, "-5");
        assert!(budget.activities()[0].hours.abs() < f64::EPSILON);

        budget.set_hours(0, "abc");
        assert!(budget.activities()[0].hours.abs() < f64::EPSILON);
    }

    #[test]
    fn set_hours_out_of_range_index_is_ignored() {
        let mut budget = TimeBudget::new();
        budget.set_hours(99, "5");
        assert!(budget.total().abs() < f64::EPSILON);
    }

    #[test]
    fn set_named_is_case_insensitive() {
        let mut budget = TimeBudget::new();
        budget.set_named("youtube", "2").unwrap();
        budget.set_named("NETFLIX", "1.5").unwrap();
        assert!((budget.total() - 3.5).abs() < 1e-9);

        let err = budget.set_named("doomscrolling", "4").unwrap_err();
        assert!(err.to_string().contains("doomscrolling"));
    }

    #[test]
    fn increment_then_decrement_round_trips() {
        let mut budget = TimeBudget::new();
        budget.set_hours(2, "4");
        budget.increment(2);
        budget.decrement(2);
        assert!((budget.activities()[2].hours - 4.0).abs() < 1e-9);
    }

    #[test]
    fn decrement_clamps_at_zero() {
        let mut budget = TimeBudget::new();
        budget.decrement(0);
        budget.decrement(0);
        assert!(budget.activities()[0].hours.abs() < f64::EPSILON);
    }

    #[test]
    fn no_upper_bound_on_increment() {
        let mut budget = TimeBudget::new();
        budget.set_hours(0, "8760");
        budget.increment(0);
        assert!((budget.activities()[0].hours - 8760.5).abs() < 1e-9);
    }

    #[test]
    fn timeframe_denominators() {
        assert!((Timeframe::Daily.hours() - 24.0).abs() < f64::EPSILON);
        assert!((Timeframe::Weekly.hours() - 168.0).abs() < f64::EPSILON);
        assert!((Timeframe::Monthly.hours() - 720.0).abs() < f64::EPSILON);
        assert!((Timeframe::Yearly.hours() - 8760.0).abs() < f64::EPSILON);
    }

    #[test]
    fn percent_is_capped_at_100() {
        let mut budget = TimeBudget::new();
        budget.set_hours(0, "48");
        assert!((budget.percent_of(Timeframe::Daily) - 100.0).abs() < f64::EPSILON);
        // Timeframe changes the denominator, never the total
        assert!((budget.total() - 48.0).abs() < f64::EPSILON);
        let weekly = budget.percent_of(Timeframe::Weekly);
        assert!((weekly - (48.0 / 168.0) * 100.0).abs() < 1e-9);
    }

    #[test]
    fn motivational_thresholds() {
        assert!(motivational_message(0.0).contains("Track"));
        assert!(motivational_message(3.9).contains("minute"));
        assert!(motivational_message(11.0).contains("way"));
        assert!(motivational_message(23.5).contains("potential"));
        assert!(motivational_message(24.0).contains("Outstanding"));
    }
}
