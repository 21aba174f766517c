//! Fallback selection: quartile picks over one group's sorted voicings

use super::{PositionedVoicing, POSITIONS_PER_GROUP};
use crate::voicing::Voicing;

/// Sort voicings by average fret, low to high. Equal averages put the
/// narrower stretch first, then keep enumeration order.
pub fn sort_by_avg_fret(voicings: &[Voicing]) -> Vec<&Voicing> {
    let mut sorted: Vec<&Voicing> = voicings.iter().collect();
    sorted.sort_by(|a, b| {
        a.avg_fret
            .total_cmp(&b.avg_fret)
            .then_with(|| a.stretch().cmp(&b.stretch()))
    });
    sorted
}

/// Indices picked from `n` sorted voicings.
///
/// Four or fewer voicings are all used. Otherwise the picks are the lowest,
/// the first and second quartiles of `0..=n-1`, and the highest, so the last
/// position never skips past the top voicing. Quartiles that land on a half
/// round away from zero (`f64::round`), so n=11 picks index 3, not 2.
///
/// # Example
/// ```
/// use triads::selection::quartile_indices;
///
/// assert_eq!(quartile_indices(3), vec![0, 1, 2]);
/// assert_eq!(quartile_indices(5), vec![0, 1, 2, 4]);
/// assert_eq!(quartile_indices(9), vec![0, 2, 4, 8]);
/// ```
pub fn quartile_indices(n: usize) -> Vec<usize> {
    if n <= POSITIONS_PER_GROUP {
        return (0..n).collect();
    }
    let last = n - 1;
    let quartile = |k: usize| ((k * last) as f64 / 4.0).round() as usize;
    vec![0, quartile(1), quartile(2), last]
}

/// Pick up to four positions from one group's voicings on their own.
pub fn select_positions_independent(voicings: &[Voicing]) -> Vec<PositionedVoicing> {
    let sorted = sort_by_avg_fret(voicings);
    let mut picked: Vec<&Voicing> = quartile_indices(sorted.len())
        .into_iter()
        .map(|idx| sorted[idx])
        .collect();

    // Position 0 is always the lowest voicing in the group
    if let (Some(slot), Some(&lowest)) = (picked.first_mut(), sorted.first()) {
        *slot = lowest;
    }

    picked
        .into_iter()
        .enumerate()
        .map(|(position, voicing)| PositionedVoicing {
            position: position as u8,
            voicing: voicing.clone(),
        })
        .collect()
}
