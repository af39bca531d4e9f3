//! Heap pane rendering for the linked list
//!
//! Shows one recorded [`ListSnapshot`]: the head pointer, then every block in
//! address order with its payload, successor and state. Freed blocks stay in
//! the listing as tombstones so teardown is visible.

use super::{border_style, clamp_scroll};
use crate::memory::heap::BlockState;
use crate::memory::Address;
use crate::snapshot::ListSnapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

fn format_link(addr: Option<Address>) -> String {
    match addr {
        Some(addr) => format!("0x{:08x}", addr),
        None => String::from("NULL"),
    }
}

/// Render the heap pane
pub fn render_heap_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&ListSnapshot>,
    position: usize,
    total: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = match snapshot {
        Some(snap) => format!(" Heap [{}/{}]: {} ", position + 1, total, snap.label),
        None => String::from(" Heap "),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let Some(snap) = snapshot else {
        let items = vec![ListItem::new("(linked list level has not run)")
            .style(Style::default().fg(DEFAULT_THEME.comment))];
        frame.render_widget(List::new(items).block(block), area);
        return;
    };

    let mut all_items = vec![
        ListItem::new(Line::from(vec![
            Span::styled("head ─▶ ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                format_link(snap.head),
                Style::default()
                    .fg(DEFAULT_THEME.address)
                    .add_modifier(Modifier::BOLD),
            ),
        ])),
        ListItem::new(snap.rendering.as_str()).style(Style::default().fg(DEFAULT_THEME.fg)),
    ];

    let blocks = snap.heap.blocks();
    if blocks.is_empty() {
        all_items.push(
            ListItem::new("(no allocations)").style(Style::default().fg(DEFAULT_THEME.comment)),
        );
    }

    for (addr, block) in blocks {
        let (state_text, state_style) = match block.state {
            BlockState::Allocated => ("LIVE ", Style::default().fg(DEFAULT_THEME.success)),
            BlockState::Tombstone => ("FREED", Style::default().fg(DEFAULT_THEME.error)),
        };
        let value_style = if block.is_live() {
            Style::default().fg(DEFAULT_THEME.secondary)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };

        all_items.push(ListItem::new(Line::from(vec![
            Span::styled(
                format!("0x{:08x}", addr),
                Style::default().fg(DEFAULT_THEME.address),
            ),
            Span::raw(" | "),
            Span::styled(format!("{:>6}", block.value), value_style),
            Span::raw(" | next: "),
            Span::styled(
                format!("{:<10}", format_link(block.next)),
                Style::default().fg(DEFAULT_THEME.primary),
            ),
            Span::raw(" | "),
            Span::styled(state_text, state_style),
        ])));
    }

    all_items.push(
        ListItem::new(format!(
            "{} live / {} max nodes, {} bytes",
            snap.heap.live_count(),
            snap.heap.max_nodes(),
            snap.heap.total_allocated()
        ))
        .style(Style::default().fg(DEFAULT_THEME.comment)),
    );

    let visible_height = clamp_scroll(all_items.len(), area.height, scroll_offset);
    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
