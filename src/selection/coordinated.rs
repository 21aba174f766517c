//! Coordinated selection: bucket chains by inversion and assign one chain per position

use super::PositionedVoicing;
use crate::chain::{chain_avg_fret, Chain};
use crate::triad::{classify_inversion, Inversion, Triad};

/// A chain with its precomputed average fret
#[derive(Debug, Clone, Copy)]
pub(super) struct RankedChain<'a> {
    pub chain: Chain<'a>,
    pub avg_fret: f64,
}

/// Chains grouped by the inversion of their lowest-group voicing, indexed
/// like [`Inversion::ALL`] and sorted by average fret within each bucket
pub(super) type InversionBuckets<'a> = [Vec<RankedChain<'a>>; 3];

/// Chosen chains in position order
#[derive(Debug, Clone)]
pub(super) struct CoordinatedPlan<'a> {
    pub paired: Inversion,
    pub assignments: Vec<(u8, Chain<'a>)>,
}

impl CoordinatedPlan<'_> {
    /// Split each chosen chain into its four per-group voicings
    pub fn into_groups(self) -> [Vec<PositionedVoicing>; 4] {
        std::array::from_fn(|g| {
            self.assignments
                .iter()
                .map(|(position, chain)| PositionedVoicing {
                    position: *position,
                    voicing: chain[g].clone(),
                })
                .collect()
        })
    }
}

pub(super) fn bucket_by_inversion<'a>(
    chains: &[Chain<'a>],
    triad: &Triad,
) -> InversionBuckets<'a> {
    let mut buckets: InversionBuckets<'a> = Default::default();

    for chain in chains {
        let inversion = classify_inversion(&chain[0].notes, triad);
        // Unknown-inversion chains never reach a bucket
        if let Some(idx) = Inversion::ALL.iter().position(|&inv| inv == inversion) {
            buckets[idx].push(RankedChain {
                chain: *chain,
                avg_fret: chain_avg_fret(chain),
            });
        }
    }

    for bucket in &mut buckets {
        bucket.sort_by(|a, b| a.avg_fret.total_cmp(&b.avg_fret));
    }
    buckets
}

/// Bucket index of the inversion with 2+ chains and the widest average-fret
/// span. Ties go to the earlier of root, first, second.
pub(super) fn paired_inversion(buckets: &InversionBuckets<'_>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (idx, bucket) in buckets.iter().enumerate() {
        let (Some(lowest), Some(highest)) = (bucket.first(), bucket.last()) else {
            continue;
        };
        if bucket.len() < 2 {
            continue;
        }
        let span = highest.avg_fret - lowest.avg_fret;
        if best.map_or(true, |(_, best_span)| span > best_span) {
            best = Some((idx, span));
        }
    }

    best.map(|(idx, _)| idx)
}

/// Positions 0 and 3 bookend the paired bucket; 1 and 2 come from the other
/// two buckets at the one-third and two-thirds marks. Empty buckets leave
/// their position out.
pub(super) fn assign_positions<'a>(
    buckets: &InversionBuckets<'a>,
    paired: usize,
) -> CoordinatedPlan<'a> {
    let paired_bucket = &buckets[paired];
    let mut others = (0..buckets.len())
        .filter(|&idx| idx != paired)
        .map(|idx| &buckets[idx]);
    let first_other = others.next();
    let second_other = others.next();

    let mut assignments = Vec::with_capacity(4);

    if let Some(lowest) = paired_bucket.first() {
        assignments.push((0, lowest.chain));
    }
    if let Some(bucket) = first_other.filter(|b| !b.is_empty()) {
        let idx = (bucket.len() / 3).min(bucket.len() - 1);
        assignments.push((1, bucket[idx].chain));
    }
    if let Some(bucket) = second_other.filter(|b| !b.is_empty()) {
        let idx = (2 * bucket.len()) / 3;
        assignments.push((2, bucket[idx].chain));
    }
    if let Some(highest) = paired_bucket.last() {
        assignments.push((3, highest.chain));
    }

    CoordinatedPlan {
        paired: Inversion::ALL[paired],
        assignments,
    }
}
