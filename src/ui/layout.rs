//! Grid arithmetic for the card view and the centered top bars.
//!
//! Everything here is pure: given the viewport width and the fixed sizes from
//! `LayoutSettings` it computes column counts and left offsets. Widths are in
//! terminal cells.

use crate::app::settings::LayoutSettings;

/// Result of fitting cards into the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Viewport width minus the window padding.
    pub available_width: u16,
    /// Always at least one.
    pub cards_per_row: usize,
}

/// How many cards fit per row at `viewport_width`.
pub fn calculate_layout(viewport_width: u16, metrics: &LayoutSettings) -> GridLayout {
    let available_width = viewport_width.saturating_sub(metrics.window_padding);
    let slot = (metrics.card_width as usize + metrics.card_spacing as usize).max(1);
    GridLayout {
        available_width,
        cards_per_row: (available_width as usize / slot).max(1),
    }
}

/// Split `items` into consecutive rows of `per_row`; the last row may be
/// shorter. A `per_row` of zero is treated as one.
pub fn group_into_rows<T: Clone>(items: &[T], per_row: usize) -> Vec<Vec<T>> {
    items.chunks(per_row.max(1)).map(<[T]>::to_vec).collect()
}

/// Total width of `count` items of `item_width` separated by `spacing`.
pub fn span_width(count: usize, item_width: u16, spacing: u16) -> u16 {
    if count == 0 {
        return 0;
    }
    let total = count * item_width as usize + (count - 1) * spacing as usize;
    total.min(u16::MAX as usize) as u16
}

/// Width of a row holding `count` cards.
pub fn row_width(count: usize, metrics: &LayoutSettings) -> u16 {
    span_width(count, metrics.card_width, metrics.card_spacing)
}

/// Leading blank space that centers `content_width` in `available_width`.
/// Zero when the content does not fit.
pub fn centered_offset(available_width: u16, content_width: u16) -> u16 {
    available_width.saturating_sub(content_width) / 2
}
