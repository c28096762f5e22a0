//! Logged meal record for the daily nutrition overview.

/// One meal eaten during the day, with its headline macros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    pub name: String,
    /// Display label for when the meal was eaten, e.g. `2:30 PM`.
    pub time: String,
    /// Symbol name shown next to the meal.
    pub icon: String,
    /// Energy in kcal.
    pub calories: u32,
    /// Grams.
    pub protein: u32,
    /// Grams.
    pub carbs: u32,
    /// Grams.
    pub fat: u32,
}

impl Meal {
    /// Creates a meal with zeroed macros.
    pub fn new(name: impl Into<String>, time: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            time: time.into(),
            icon: icon.into(),
            calories: 0,
            protein: 0,
            carbs: 0,
            fat: 0,
        }
    }
}
