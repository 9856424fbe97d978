//! Bar chart rendering for the sorting page

use crate::frame::{Frame as Snapshot, HighlightState};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Render numeric elements as vertical bars coloured by highlight state
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    title: &str,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style);

    let elements = snapshot.elements().unwrap_or_default();
    if elements.is_empty() {
        let paragraph = Paragraph::new("(no array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let bars: Vec<Bar> = elements
        .iter()
        .map(|element| {
            let value = element.value.as_number().unwrap_or(0);
            let color = DEFAULT_THEME.state_color(element.state);
            let mut value_style = Style::default().fg(Color::Black).bg(color);
            if element.state != HighlightState::Default {
                value_style = value_style.add_modifier(Modifier::BOLD);
            }
            Bar::default()
                .value(value)
                .text_value(value.to_string())
                .label(Line::from(value.to_string()))
                .style(Style::default().fg(color))
                .value_style(value_style)
        })
        .collect();

    // Fit every bar: width per bar minus a one-column gap
    let content_width = area.width.saturating_sub(2) as usize;
    let bar_width = (content_width / elements.len()).saturating_sub(1).clamp(1, 6) as u16;
    let max = elements
        .iter()
        .filter_map(|e| e.value.as_number())
        .max()
        .unwrap_or(1)
        .max(1);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(max);
    frame.render_widget(chart, area);
}
