//! # Position Selection
//!
//! Picks up to four representative voicings ("positions" 0-3) per string
//! group from the enumerated voicing lists.
//!
//! ## Modes
//!
//! Selection is a two-state decision made in one place, [`plan_selection`]:
//!
//! ### Coordinated
//! Used when the chain finder returns at least 4 chains AND one inversion
//! bucket holds 2+ chains. Each position is a whole chain, so the same
//! position shares notes across every pair of neighboring string groups.
//! Positions 0 and 3 are the lowest and highest chains of the "paired"
//! inversion (the bucket with the widest fret span), which bookends the
//! neck with the same inversion shape.
//!
//! ### Fallback
//! Otherwise each group is handled on its own: voicings are sorted by
//! average fret and four are picked at quartile indices. Position 0 is
//! always the group's lowest voicing, so open-string shapes show up even
//! when no neighbor can continue them.
//!
//! ## Sub-modules
//! - `coordinated` - Inversion bucketing and chain-to-position assignment
//! - `independent` - Quartile selection for a single group
//!
//! ## Example
//! ```rust
//! use triads::selection::{select_positions, SelectionMode};
//! use triads::{build_fretboard, build_major_triad, find_all_voicings};
//! use triads::{DEFAULT_MAX_STRETCH, STRING_GROUPS};
//!
//! let fretboard = build_fretboard();
//! let triad = build_major_triad("C").unwrap();
//! let groups =
//!     STRING_GROUPS.map(|g| find_all_voicings(&triad, g, &fretboard, DEFAULT_MAX_STRETCH));
//!
//! let selection = select_positions(&groups, &triad);
//! assert!(matches!(selection.mode, SelectionMode::Coordinated { .. }));
//! assert_eq!(selection.groups[3][0].voicing.frets, [0, 1, 0]);
//! ```

mod coordinated;
mod independent;


pub use independent::{quartile_indices, select_positions_independent, sort_by_avg_fret};

use crate::chain::{find_voicing_chains, Chain};
use crate::triad::{Inversion, Triad};
use crate::voicing::Voicing;
use coordinated::CoordinatedPlan;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Number of positions selected per string group
pub const POSITIONS_PER_GROUP: usize = 4;

/// Fewest chains that allow coordinated selection
pub const MIN_CHAINS_FOR_COORDINATION: usize = 4;

/// A selected voicing tagged with its position (0-3)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedVoicing {
    pub position: u8,
    #[serde(flatten)]
    pub voicing: Voicing,
}

/// How the positions of a result were chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Positions are whole chains; `paired` is the inversion at positions 0 and 3
    Coordinated { paired: Inversion },
    /// Positions were chosen per group by quartile
    Fallback(FallbackReason),
}

/// Why coordinated selection was not possible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    TooFewChains { found: usize },
    NoPairedInversion,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::TooFewChains { found } => write!(
                f,
                "only {} voicing chains found (need {})",
                found, MIN_CHAINS_FOR_COORDINATION
            ),
            FallbackReason::NoPairedInversion => {
                write!(f, "no inversion has two or more chains")
            }
        }
    }
}

/// Selected positions for all four string groups
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub mode: SelectionMode,
    pub groups: [Vec<PositionedVoicing>; 4],
}

/// Outcome of the coordinated/fallback decision
enum SelectionPlan<'a> {
    Coordinated(CoordinatedPlan<'a>),
    Fallback(FallbackReason),
}

/// The single branch point between coordinated and fallback selection
fn plan_selection<'a>(chains: &[Chain<'a>], triad: &Triad) -> SelectionPlan<'a> {
    if chains.len() < MIN_CHAINS_FOR_COORDINATION {
        return SelectionPlan::Fallback(FallbackReason::TooFewChains {
            found: chains.len(),
        });
    }

    let buckets = coordinated::bucket_by_inversion(chains, triad);
    match coordinated::paired_inversion(&buckets) {
        Some(paired) => {
            SelectionPlan::Coordinated(coordinated::assign_positions(&buckets, paired))
        }
        None => SelectionPlan::Fallback(FallbackReason::NoPairedInversion),
    }
}

/// Choose positions for all four groups, reporting which mode was used
pub fn select_positions(groups: &[Vec<Voicing>; 4], triad: &Triad) -> Selection {
    let chains = find_voicing_chains(groups);
    debug!(chains = chains.len(), "found voicing chains");

    match plan_selection(&chains, triad) {
        SelectionPlan::Coordinated(plan) => {
            debug!(paired = %plan.paired, "using coordinated selection");
            Selection {
                mode: SelectionMode::Coordinated { paired: plan.paired },
                groups: plan.into_groups(),
            }
        }
        SelectionPlan::Fallback(reason) => {
            debug!(%reason, "falling back to independent selection");
            Selection {
                mode: SelectionMode::Fallback(reason),
                groups: std::array::from_fn(|g| select_positions_independent(&groups[g])),
            }
        }
    }
}

/// Choose positions for all four groups, coordinating across groups when
/// chains allow it and falling back to per-group quartiles otherwise
pub fn select_positions_coordinated(
    groups: &[Vec<Voicing>; 4],
    triad: &Triad,
) -> [Vec<PositionedVoicing>; 4] {
    select_positions(groups, triad).groups
}
