//! Stack layout and rendering for a container of [`Panel`]s.
//!
//! Panels are stacked top to bottom in attachment order. A panel takes its
//! fixed height unless it is gone; invisible panels keep their rows blank.
//! A gone panel that is still fading out keeps its rows until the fade ends.

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::panel::Panel;
use super::theme::{state_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};
use crate::child::{ChildId, ChildView};
use crate::container::MultiStateView;

/// Compute the rows each laid-out panel occupies inside `area` at `now`.
///
/// Gone panels are omitted once any out fade is over; the remaining space goes
/// unused.
pub fn panel_areas(
    view: &MultiStateView<Panel>,
    area: Rect,
    now: Instant,
) -> Vec<(ChildId, Rect)> {
    let laid_out: Vec<(ChildId, u16)> = view
        .children()
        .filter(|(_, panel, _)| panel.takes_space(now))
        .map(|(id, panel, _)| (id, panel.height()))
        .collect();

    let constraints: Vec<Constraint> = laid_out
        .iter()
        .map(|(_, height)| Constraint::Length(*height))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    laid_out
        .iter()
        .zip(chunks.iter())
        .map(|((id, _), rect)| (*id, *rect))
        .collect()
}

/// Draw every panel that should be on screen at `now`.
pub fn render_multistate(frame: &mut Frame, area: Rect, view: &MultiStateView<Panel>, now: Instant) {
    for (id, rect) in panel_areas(view, area, now) {
        let Some(panel) = view.child(id) else {
            continue;
        };
        if !panel.is_drawn(now) || rect.height == 0 {
            continue;
        }

        let (text_style, border_style) = if panel.is_dimmed(now) {
            (Style::default().fg(COLOR_DIM), Style::default().fg(COLOR_DIM))
        } else {
            (
                Style::default().fg(panel.color()),
                Style::default().fg(COLOR_BORDER),
            )
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", panel.title()),
                text_style.add_modifier(Modifier::BOLD),
            ));

        let lines: Vec<Line> = panel
            .lines()
            .iter()
            .map(|l| Line::from(Span::styled(l.clone(), text_style)))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), rect);
    }
}

/// One-line status bar: current state, animation flag, and key hints.
pub fn render_status_line(frame: &mut Frame, area: Rect, view: &MultiStateView<Panel>) {
    let state = view.state();
    let line = Line::from(vec![
        Span::styled(" State: ", Style::default().fg(COLOR_DIM)),
        Span::styled(
            state.name(),
            Style::default()
                .fg(state_color(state))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  animations: ", Style::default().fg(COLOR_DIM)),
        Span::styled(
            if view.animations_enabled() { "on" } else { "off" },
            Style::default().fg(COLOR_ACCENT),
        ),
        Span::styled(
            "  [c]ontent [e]mpty e[r]ror [l]oading [u]ndefined [a]nimate [q]uit",
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
