//! The UI renders the picker state into something visible and keyboard-driven.
//!
//! The candidate list sits on top with the focused entry reversed. Below it a preview of the
//! source shows the range the editor would select, so moving focus is a live preview.

use crate::config::Config;
use crate::picker::Picker;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Renders the candidate list, the source preview and the help bar.
pub fn draw(f: &mut Frame, picker: &Picker, cfg: &Config) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Candidates
            Constraint::Min(0),         // Preview
            Constraint::Length(3),      // Help
        ])
        .split(f.area());

    draw_candidates(f, picker, chunks[0]);
    draw_preview(f, picker, cfg, chunks[1]);

    let help = "↑/↓ or k/j: Narrow/Widen | Enter: Select | Esc/q: Cancel";
    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, chunks[2]);
}

fn draw_candidates(f: &mut Frame, picker: &Picker, area: ratatui::layout::Rect) {
    let items: Vec<ListItem> = picker
        .labels()
        .iter()
        .zip(picker.candidates())
        .enumerate()
        .map(|(i, (label, candidate))| {
            let line = Line::from(vec![
                Span::styled(
                    format!("{:<24} ", candidate.kind()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(label.clone()),
            ]);
            let style = if picker.active() == Some(i) {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let title = format!("Expressions ({})", picker.candidates().len());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn draw_preview(f: &mut Frame, picker: &Picker, cfg: &Config, area: ratatui::layout::Rect) {
    let tree = picker.tree();
    let text = tree.text();
    let selection = picker.selection();
    let selected = tree.byte_range(selection);

    let first = (selection.start.line as usize).saturating_sub(cfg.context_lines);
    let last = (selection.end.line as usize)
        .saturating_add(cfg.context_lines)
        .min(tree.lines().line_count().saturating_sub(1));
    let highlight = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for number in first..=last {
        let Some(span) = tree.lines().line_span(number) else {
            break;
        };
        let mut spans = vec![Span::styled(
            format!("{:>5} ", number + 1),
            Style::default().fg(Color::DarkGray),
        )];

        let lo = selected.start.clamp(span.start, span.end);
        let hi = selected.end.clamp(span.start, span.end);
        spans.push(Span::raw(text[span.start..lo].to_string()));
        if lo < hi {
            spans.push(Span::styled(text[lo..hi].to_string(), highlight));
        }
        spans.push(Span::raw(text[hi..span.end].to_string()));
        lines.push(Line::from(spans));
    }

    let title = format!("{} {selection}", tree.document());
    let preview =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(preview, area);
}

#[cfg(test)]
#[path = "tests/ui.rs"]
mod tests;
