use crate::error::ErrorKind;
use crate::palette::{self, ColorToken};
use crate::types::{ItemRecord, MoveSlot};

/// Denominator of the stat bar. Values above it overflow the track.
pub const STAT_BAR_SCALE: f64 = 150.0;

/// How many moves the detail view shows.
pub const KEY_MOVE_COUNT: usize = 2;

/// Render state of one screen activation.
#[derive(Debug, Clone)]
pub enum ViewState<T> {
    Loading,
    Loaded(T),
    Failed(ErrorKind),
}

impl<T> ViewState<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Render-ready combination of an item record and its description.
#[derive(Debug, Clone)]
pub struct DetailViewModel {
    pub record: ItemRecord,
    /// Never empty.
    pub description: String,
}

impl DetailViewModel {
    pub fn primary_color(&self) -> ColorToken {
        palette::primary_color(self.record.primary_type())
    }

    pub fn height_m(&self) -> f64 {
        height_in_metres(self.record.height)
    }

    pub fn key_moves(&self) -> &[MoveSlot] {
        key_moves(&self.record)
    }

    /// Record number as shown in the header, e.g. `#025`.
    pub fn display_number(&self) -> String {
        format!("#{:03}", self.record.id)
    }
}

pub fn height_in_metres(decimetres: u32) -> f64 {
    f64::from(decimetres) / 10.0
}

/// First moves of the record. Leaves the record untouched.
pub fn key_moves(record: &ItemRecord) -> &[MoveSlot] {
    &record.moves[..record.moves.len().min(KEY_MOVE_COUNT)]
}

/// Bar width in percent of the track. Not clamped.
pub fn stat_bar_percent(base_stat: u32) -> f64 {
    f64::from(base_stat) / STAT_BAR_SCALE * 100.0
}
