//! Input field rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One labelled text field
pub struct InputField<'a> {
    pub label: &'a str,
    pub text: &'a str,
    /// Shown after the field, e.g. the length limit
    pub hint: &'a str,
    pub is_active: bool,
}

/// Render the page's input fields, one per line
pub fn render_input_pane(frame: &mut Frame, area: Rect, fields: &[InputField], locked: bool) {
    let border_style = if locked {
        Style::default().fg(DEFAULT_THEME.border_normal)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    };

    let block = Block::default()
        .title(" Input ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines: Vec<Line> = fields
        .iter()
        .map(|field| {
            let text_style = if field.is_active && !locked {
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .bg(DEFAULT_THEME.current_line_bg)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            let cursor = if field.is_active && !locked { "▏" } else { " " };
            Line::from(vec![
                Span::styled(
                    format!("{:>7}: ", field.label),
                    Style::default().fg(DEFAULT_THEME.secondary),
                ),
                Span::styled(format!(" {}{} ", field.text, cursor), text_style),
                Span::styled(
                    format!("  {}", field.hint),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
