//! Level list pane

use super::border_style;
use crate::levels::Level;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the registry, marking the selected level and any that failed
pub fn render_levels_pane(
    frame: &mut Frame,
    area: Rect,
    levels: &[Level],
    selected: usize,
    failed: &[u32],
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Levels ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let items: Vec<ListItem> = levels
        .iter()
        .enumerate()
        .map(|(i, level)| {
            let marker_style = if failed.contains(&level.number) {
                Style::default().fg(DEFAULT_THEME.error)
            } else {
                Style::default().fg(DEFAULT_THEME.success)
            };
            let marker = if failed.contains(&level.number) {
                "✗"
            } else {
                "✓"
            };
            let line = Line::from(vec![
                Span::styled(format!("{} ", marker), marker_style),
                Span::styled(
                    format!("{:>2}. ", level.number),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::raw(level.title),
            ]);

            let item = ListItem::new(line);
            if i == selected {
                item.style(
                    Style::default()
                        .bg(DEFAULT_THEME.current_line_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                item.style(Style::default().fg(DEFAULT_THEME.fg))
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
