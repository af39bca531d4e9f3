//! Output pane rendering

use super::{border_style, clamp_scroll};
use crate::snapshot::Transcript;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render what one level printed
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    terminal: &Transcript,
    level: u32,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" Level {} Output ", level))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let lines = terminal.level_output(level);

    if lines.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = lines
        .iter()
        .map(|line| {
            let style = if line.starts_with("--- Level") {
                Style::default()
                    .fg(DEFAULT_THEME.heading)
                    .add_modifier(Modifier::BOLD)
            } else if line.starts_with("Error:") {
                Style::default().fg(DEFAULT_THEME.error)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(line.as_str()).style(style)
        })
        .collect();

    let visible_height = clamp_scroll(all_items.len(), area.height, scroll_offset);
    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
