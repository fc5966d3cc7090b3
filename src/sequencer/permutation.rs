//! Uniform permutation generation

use rand::Rng;
use rand::seq::SliceRandom;

/// Build a uniformly random permutation of `0..size`
///
/// Uses a Fisher–Yates shuffle over the identity sequence, so each of the
/// `size!` orderings is equally likely for a uniform `rng`.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use vocab_shuffle::sequencer::shuffled_indices;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut order = shuffled_indices(5, &mut rng);
/// order.sort_unstable();
/// assert_eq!(order, vec![0, 1, 2, 3, 4]);
/// ```
#[must_use]
pub fn shuffled_indices<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..size).collect();
    order.shuffle(rng);
    order
}
