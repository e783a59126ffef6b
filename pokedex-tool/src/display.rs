//! Text helpers shared by the printed output and the terminal UI.

use pokedex_api::{stat_bar_percent, ItemSummary};

/// Uppercases the first letter of each whitespace-separated word.
pub fn capitalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}

/// Card label of a catalog entry. Entries without a numeric url use their
/// 1-based position.
pub fn summary_label(summary: &ItemSummary, index: usize) -> String {
    let id = summary.id().unwrap_or(index as u32 + 1);
    format!("#{:03} {}", id, capitalize(&summary.name))
}

pub fn padded_stat(base_stat: u32) -> String {
    format!("{:03}", base_stat)
}

/// Filled cells of a stat bar on a track of `track` cells. Can exceed `track`.
pub fn bar_cells(base_stat: u32, track: u16) -> u16 {
    let cells = stat_bar_percent(base_stat) / 100.0 * f64::from(track);
    cells.round() as u16
}
