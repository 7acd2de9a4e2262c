//! Terminal charts.
//!
//! The rendering boundary of the pipeline: counts histograms, basis-state
//! probability bars, and the Bloch-vector table, all formatted to `String`
//! for the demo binaries to print. Nothing is returned to the caller beyond
//! the text itself.

use crate::state::QubitReport;
use orchor_core::Counts;
use std::fmt::Write;

/// Bar width used by all charts, in character cells
const BAR_WIDTH: usize = 40;

/// Render a counts histogram, outcomes sorted by bitstring
pub fn histogram(counts: &Counts, shots: u64) -> String {
    let mut ordered: Vec<(&String, u64)> = counts.iter().map(|(bs, &c)| (bs, c)).collect();
    ordered.sort_by(|(bs_a, _), (bs_b, _)| bs_a.cmp(bs_b));
    render_count_bars(&ordered, shots)
}

/// Render the `limit` most frequent outcomes, descending
pub fn top_histogram(counts: &Counts, shots: u64, limit: usize) -> String {
    let mut ordered: Vec<(&String, u64)> = counts.iter().map(|(bs, &c)| (bs, c)).collect();
    ordered.sort_by(|(bs_a, count_a), (bs_b, count_b)| {
        count_b.cmp(count_a).then_with(|| bs_a.cmp(bs_b))
    });
    ordered.truncate(limit);
    render_count_bars(&ordered, shots)
}

fn render_count_bars(ordered: &[(&String, u64)], shots: u64) -> String {
    let max_count = ordered.iter().map(|(_, c)| *c).max().unwrap_or(0);
    let mut out = String::new();

    for (bitstring, count) in ordered {
        let percent = if shots > 0 {
            *count as f64 / shots as f64 * 100.0
        } else {
            0.0
        };
        writeln!(
            out,
            "  {} │{:<width$}│ {:>5} ({:>5.1}%)",
            bitstring,
            bar(*count as f64, max_count as f64),
            count,
            percent,
            width = BAR_WIDTH
        )
        .unwrap();
    }
    out
}

/// Render basis-state probability bars for the first `limit` states
pub fn probability_bars(probabilities: &[f64], limit: usize) -> String {
    let n_states = probabilities.len();
    let width = n_states.max(2).trailing_zeros() as usize;
    let max_prob = probabilities.iter().cloned().fold(0.0, f64::max);

    let mut out = String::new();
    for (index, &p) in probabilities.iter().take(limit).enumerate() {
        writeln!(
            out,
            "  |{:0ket_width$b}⟩ │{:<bar_width$}│ {:.3}",
            index,
            bar(p, max_prob),
            p,
            ket_width = width,
            bar_width = BAR_WIDTH
        )
        .unwrap();
    }
    out
}

/// Render the Bloch-vector table for a set of qubit reports
pub fn bloch_table(reports: &[QubitReport]) -> String {
    let mut out = String::new();

    writeln!(out, "  ┌───────┬────────┬────────┬────────┬────────┐").unwrap();
    writeln!(out, "  │ qubit │   x    │   y    │   z    │ purity │").unwrap();
    writeln!(out, "  ├───────┼────────┼────────┼────────┼────────┤").unwrap();
    for r in reports {
        writeln!(
            out,
            "  │ {:>5} │ {:>+.3} │ {:>+.3} │ {:>+.3} │ {:>6.3} │",
            r.qubit, r.bloch[0], r.bloch[1], r.bloch[2], r.purity
        )
        .unwrap();
    }
    writeln!(out, "  └───────┴────────┴────────┴────────┴────────┘").unwrap();
    out
}

/// Scale `value` against `max` into a block-character bar
fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(cells.min(BAR_WIDTH))
}

// ============================================================================
// Tests
// ============================================================================
