//! Roulette-wheel selection over scored candidate windows.

use rand::Rng;

use crate::errors::SelectionError;

/// Select one index from `scores` with probability proportional to score.
///
/// Scores are converted to percent fractions of their sum, accumulated, and
/// matched against a single uniform integer draw in `[0, 99]`: the first
/// index whose cumulative fraction exceeds the draw wins. Weight differences
/// smaller than about 1% of the score sum can therefore be lost to
/// quantization; candidates with zero weight are never selected.
///
/// # Errors
/// Returns an error if `scores` is empty or its sum is not a positive
/// finite value. An all-zero candidate set is an internal-invariant
/// violation for the sampling engine and must fail loudly rather than
/// degrade to an arbitrary pick.
pub fn weighted_choice<R: Rng + ?Sized>(
    scores: &[f64],
    rng: &mut R,
) -> Result<usize, SelectionError> {
    if scores.is_empty() {
        return Err(SelectionError::Empty);
    }

    let total: f64 = scores.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(SelectionError::ZeroScoreSum);
    }

    let draw = rng.random_range(0..100u32) as f64;
    let mut cumulative = 0.0;
    for (index, &score) in scores.iter().enumerate() {
        cumulative += 100.0 * score / total;
        if draw < cumulative {
            return Ok(index);
        }
    }

    // Rounding can leave the final cumulative fraction a hair under 100.
    Ok(scores.len() - 1)
}
