use crate::models::Entry;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CALORIE_LIMIT: i64 = 2000;

/// The tracker state: a user-settable calorie limit, the two entry lists, and
/// a running signed total. The total is adjusted incrementally on every
/// add/remove and always equals the sum of meal calories minus the sum of
/// workout calories. It is never trusted from persisted data; callers that
/// deserialize a tracker must call [`Tracker::recompute_total`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tracker {
    pub calorie_limit: i64,
    #[serde(skip)]
    total_calories: i64,
    pub meals: Vec<Entry>,
    pub workouts: Vec<Entry>,
}

impl Default for Tracker {
    fn default() -> Self {
        Self {
            calorie_limit: DEFAULT_CALORIE_LIMIT,
            total_calories: 0,
            meals: Vec::new(),
            workouts: Vec::new(),
        }
    }
}

impl Tracker {
    pub fn add_meal(&mut self, entry: Entry) {
        self.total_calories += i64::from(entry.calories);
        self.meals.push(entry);
    }

    pub fn add_workout(&mut self, entry: Entry) {
        self.total_calories -= i64::from(entry.calories);
        self.workouts.push(entry);
    }

    /// Removes the first meal with the given id. An unknown id is a no-op.
    pub fn remove_meal(&mut self, id: &str) -> bool {
        match self.meals.iter().position(|meal| meal.id == id) {
            Some(index) => {
                let meal = self.meals.remove(index);
                self.total_calories -= i64::from(meal.calories);
                true
            }
            None => false,
        }
    }

    /// Removes the first workout with the given id. An unknown id is a no-op.
    pub fn remove_workout(&mut self, id: &str) -> bool {
        match self.workouts.iter().position(|workout| workout.id == id) {
            Some(index) => {
                let workout = self.workouts.remove(index);
                self.total_calories += i64::from(workout.calories);
                true
            }
            None => false,
        }
    }

    pub fn set_limit(&mut self, limit: i64) {
        self.calorie_limit = limit;
    }

    /// Clears both lists and zeroes the total. The limit survives a reset.
    pub fn reset(&mut self) {
        self.meals.clear();
        self.workouts.clear();
        self.total_calories = 0;
    }

    pub fn total_calories(&self) -> i64 {
        self.total_calories
    }

    pub fn consumed(&self) -> i64 {
        self.meals.iter().map(|meal| i64::from(meal.calories)).sum()
    }

    pub fn burned(&self) -> i64 {
        self.workouts
            .iter()
            .map(|workout| i64::from(workout.calories))
            .sum()
    }

    pub fn remaining(&self) -> i64 {
        self.calorie_limit - self.total_calories
    }

    /// Rebuilds the running total from the lists. The total is skipped during
    /// (de)serialization, so this must run after loading persisted state.
    pub fn recompute_total(&mut self) {
        self.total_calories = self.consumed() - self.burned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_sum(tracker: &Tracker) -> i64 {
        tracker.consumed() - tracker.burned()
    }

    #[test]
    fn total_matches_signed_sum_across_mutations() {
        let mut tracker = Tracker::default();
        tracker.add_meal(Entry::new("Breakfast", 400));
        tracker.add_meal(Entry::new("Lunch", 650));
        tracker.add_workout(Entry::new("Run", 300));
        assert_eq!(tracker.total_calories(), signed_sum(&tracker));

        let lunch_id = tracker.meals[1].id.clone();
        assert!(tracker.remove_meal(&lunch_id));
        assert_eq!(tracker.total_calories(), signed_sum(&tracker));

        let run_id = tracker.workouts[0].id.clone();
        assert!(tracker.remove_workout(&run_id));
        assert_eq!(tracker.total_calories(), signed_sum(&tracker));
        assert_eq!(tracker.total_calories(), 400);
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let mut tracker = Tracker::default();
        tracker.add_meal(Entry::new("Dinner", 500));
        tracker.add_workout(Entry::new("Bike ride", 200));

        assert!(!tracker.remove_meal("no-such-id"));
        assert!(!tracker.remove_workout("no-such-id"));
        assert_eq!(tracker.meals.len(), 1);
        assert_eq!(tracker.workouts.len(), 1);
        assert_eq!(tracker.total_calories(), 300);
    }

    #[test]
    fn reset_clears_entries_but_keeps_the_limit() {
        let mut tracker = Tracker::default();
        tracker.set_limit(1800);
        tracker.add_meal(Entry::new("Pizza", 900));
        tracker.add_workout(Entry::new("Swim", 350));

        tracker.reset();
        assert!(tracker.meals.is_empty());
        assert!(tracker.workouts.is_empty());
        assert_eq!(tracker.total_calories(), 0);
        assert_eq!(tracker.calorie_limit, 1800);
    }

    #[test]
    fn meals_then_workout_scenario() {
        let mut tracker = Tracker::default();
        tracker.add_meal(Entry::new("Breakfast", 400));
        tracker.add_meal(Entry::new("Lunch", 350));
        assert_eq!(tracker.consumed(), 750);
        assert_eq!(tracker.remaining(), 1250);

        tracker.add_workout(Entry::new("Run", 300));
        assert_eq!(tracker.total_calories(), 450);
        assert_eq!(tracker.remaining(), 1550);

        tracker.set_limit(300);
        assert_eq!(tracker.remaining(), -150);
    }

    #[test]
    fn serde_round_trip_recomputes_the_total() {
        let mut tracker = Tracker::default();
        tracker.add_meal(Entry::new("Oatmeal", 320));
        tracker.add_workout(Entry::new("Walk", 120));

        let payload = serde_json::to_string(&tracker).unwrap();
        let mut restored: Tracker = serde_json::from_str(&payload).unwrap();
        assert_eq!(restored.total_calories(), 0);

        restored.recompute_total();
        assert_eq!(restored.total_calories(), 200);
        assert_eq!(restored.meals.len(), 1);
        assert_eq!(restored.workouts.len(), 1);
    }
}
