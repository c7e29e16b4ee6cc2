use serde::Serialize;
use utoipa::ToSchema;

use crate::models::meal::Meal;

#[derive(Serialize, ToSchema, Debug, PartialEq)]
pub struct DietMetrics {
    pub total_meals_registered: usize,
    pub total_meals_on_diet: usize,
    pub total_meals_off_diet: usize,
    pub best_sequence_of_meals_on_diet: usize,
}

/// Aggregates a user's full meal history. The best sequence is the longest
/// contiguous run of on-diet meals anywhere in the (time-ordered) history,
/// not the currently active streak; a global maximum is insensitive to the
/// ordering direction.
pub fn compute(history: &[Meal]) -> DietMetrics {
    let total_meals_on_diet = history.iter().filter(|meal| meal.is_on_diet).count();

    DietMetrics {
        total_meals_registered: history.len(),
        total_meals_on_diet,
        total_meals_off_diet: history.len() - total_meals_on_diet,
        best_sequence_of_meals_on_diet: longest_on_diet_run(
            history.iter().map(|meal| meal.is_on_diet),
        ),
    }
}

/// Longest run of consecutive `true` values, as a single fold over
/// `(current, best)`.
pub fn longest_on_diet_run<I>(flags: I) -> usize
where
    I: IntoIterator<Item = bool>,
{
    let (_, best) = flags
        .into_iter()
        .fold((0usize, 0usize), |(current, best), on_diet| {
            let current = if on_diet { current + 1 } else { 0 };
            (current, best.max(current))
        });
    best
}
