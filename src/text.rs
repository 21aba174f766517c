//! Plain-text rendering of a [`TriadsResult`] for the console

use crate::fretboard::STRING_ORDINALS;
use crate::selection::{PositionedVoicing, SelectionMode};
use crate::types::{StringGroupResult, TriadsResult};

/// Render a result as a human-readable report
pub fn to_text(result: &TriadsResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} major triad: {}\n",
        result.key,
        result.triad_note_names.join(" ")
    ));
    out.push_str(&format!("Selection: {}\n", describe_mode(&result.mode)));

    for group in &result.string_groups {
        out.push('\n');
        out.push_str(&group_to_text(group));
    }

    out
}

fn describe_mode(mode: &SelectionMode) -> String {
    match mode {
        SelectionMode::Coordinated { paired } => {
            format!("coordinated ({} inversion at positions 0 and 3)", paired)
        }
        SelectionMode::Fallback(reason) => format!("per group ({})", reason),
    }
}

fn group_to_text(group: &StringGroupResult) -> String {
    let mut out = String::new();

    let ordinals: Vec<&str> = group
        .string_group
        .iter()
        .map(|&string| STRING_ORDINALS[string])
        .collect();
    out.push_str(&format!(
        "Strings {} ({})\n",
        ordinals.join("-"),
        group.string_names.join(" ")
    ));

    if group.voicings.is_empty() {
        out.push_str("  (no voicings)\n");
    }
    for voicing in &group.voicings {
        out.push_str(&voicing_to_text(voicing));
    }

    out
}

fn voicing_to_text(positioned: &PositionedVoicing) -> String {
    let v = &positioned.voicing;
    format!(
        "  Position {}: frets {:>2} {:>2} {:>2}  notes {:<2} {:<2} {:<2}  {:<6}  avg {:.2}\n",
        positioned.position,
        v.frets[0],
        v.frets[1],
        v.frets[2],
        v.note_names[0],
        v.note_names[1],
        v.note_names[2],
        v.inversion,
        v.avg_fret
    )
}
