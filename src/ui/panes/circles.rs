//! Circle pane rendering for element rows and list nodes
//!
//! Every position is drawn as a fixed-width cell of four lines:
//!
//! ```text
//!  head        ← decoration above (caption or value in transit)
//! ( 0  ) →     ← the node itself, coloured by highlight state
//!  tail        ← decoration below
//!   0          ← index
//! ```
//!
//! Cells wrap onto further rows when the pane is narrower than the frame.

use crate::frame::{Decoration, Element, Frame as Snapshot, HighlightState, ListItem};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of one cell: `(` + 4 characters + `)`
const CELL_WIDTH: usize = 6;
const SEPARATOR_WIDTH: usize = 3;

/// Data needed to render the circle pane
pub struct CirclesRenderData<'a> {
    pub snapshot: &'a Snapshot,
    pub title: &'a str,
    /// Draw arrows between cells (linked list)
    pub arrows: bool,
}

struct Cell {
    top: Span<'static>,
    node: Span<'static>,
    bottom: Span<'static>,
    index: usize,
}

fn center(text: &str, width: usize) -> String {
    format!("{:^width$}", text, width = width)
}

fn node_span(letter: &str, state: HighlightState) -> Span<'static> {
    let mut style = Style::default().fg(DEFAULT_THEME.state_color(state));
    if state != HighlightState::Default {
        style = style.add_modifier(Modifier::BOLD);
    }
    Span::styled(format!("({})", center(letter, CELL_WIDTH - 2)), style)
}

fn decoration_span(decoration: &Decoration) -> Span<'static> {
    match decoration {
        Decoration::Absent => Span::raw(" ".repeat(CELL_WIDTH)),
        Decoration::Caption(caption) => Span::styled(
            center(caption, CELL_WIDTH),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Decoration::Preview(element) => Span::styled(
            center(&format!("({})", element.value), CELL_WIDTH),
            Style::default()
                .fg(DEFAULT_THEME.state_color(element.state))
                .add_modifier(Modifier::BOLD),
        ),
    }
}

fn element_cell(index: usize, element: &Element) -> Cell {
    Cell {
        top: Span::raw(" ".repeat(CELL_WIDTH)),
        node: node_span(&element.value.to_string(), element.state),
        bottom: Span::raw(" ".repeat(CELL_WIDTH)),
        index,
    }
}

fn list_cell(index: usize, item: &ListItem) -> Cell {
    Cell {
        top: decoration_span(&item.head),
        node: node_span(&item.letter, item.state),
        bottom: decoration_span(&item.tail),
        index,
    }
}

/// Render a frame as rows of circles
pub fn render_circles_pane(
    frame: &mut Frame,
    area: Rect,
    data: CirclesRenderData,
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
        .title(format!(" {} ", data.title))
        .borders(Borders::ALL)
        .border_style(border_style);

    let cells: Vec<Cell> = match data.snapshot {
        Snapshot::Elements(elements) => elements
            .iter()
            .enumerate()
            .map(|(idx, e)| element_cell(idx, e))
            .collect(),
        Snapshot::List(items) => items
            .iter()
            .enumerate()
            .map(|(idx, item)| list_cell(idx, item))
            .collect(),
    };

    if cells.is_empty() {
        let paragraph = Paragraph::new("(empty)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let content_width = area.width.saturating_sub(2) as usize; // borders
    let per_row = ((content_width + SEPARATOR_WIDTH) / (CELL_WIDTH + SEPARATOR_WIDTH)).max(1);
    let total = cells.len();
    let gap = " ".repeat(SEPARATOR_WIDTH);

    let mut lines = Vec::new();
    for (row, chunk) in cells.chunks(per_row).enumerate() {
        let mut top = Vec::new();
        let mut node = Vec::new();
        let mut bottom = Vec::new();
        let mut index = Vec::new();

        for (col, cell) in chunk.iter().enumerate() {
            if col > 0 {
                top.push(Span::raw(gap.clone()));
                bottom.push(Span::raw(gap.clone()));
                index.push(Span::raw(gap.clone()));
            }
            top.push(cell.top.clone());
            node.push(cell.node.clone());
            bottom.push(cell.bottom.clone());
            index.push(Span::styled(
                center(&cell.index.to_string(), CELL_WIDTH),
                Style::default().fg(DEFAULT_THEME.comment),
            ));

            let is_last = row * per_row + col + 1 == total;
            if !is_last && (col + 1 < chunk.len() || data.arrows) {
                let separator = if data.arrows { " → " } else { "   " };
                node.push(Span::styled(
                    separator,
                    Style::default().fg(DEFAULT_THEME.comment),
                ));
            }
        }

        lines.push(Line::from(top));
        lines.push(Line::from(node));
        lines.push(Line::from(bottom));
        lines.push(Line::from(index));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
