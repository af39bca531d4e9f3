//! TUI pane rendering modules
//!
//! - [`levels`]: the level list with the current selection
//! - [`output`]: transcript lines printed by the selected level
//! - [`heap`]: node heap of the linked list at one recorded step
//! - [`status`]: status bar with keybindings and position indicators

pub mod heap;
pub mod levels;
pub mod output;
pub mod status;

pub use heap::render_heap_pane;
pub use levels::render_levels_pane;
pub use output::render_output_pane;
pub use status::render_status_bar;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by every pane
fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp `scroll_offset` so the last page stays full; returns the visible height
fn clamp_scroll(total_items: usize, area_height: u16, scroll_offset: &mut usize) -> usize {
    let visible_height = area_height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }
    visible_height
}
