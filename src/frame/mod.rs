//! Frame model shared by every step generator
//!
//! A [`Frame`] is one owned snapshot of a data structure's visual state. Generators
//! clone their working state into a fresh frame on every step, so a frame handed to
//! the presentation layer is never touched again by the engine.
//!
//! # Frame Shapes
//!
//! - [`Frame::Elements`]: a row of [`Element`]s (sorting, string, Fibonacci, stack, queue)
//! - [`Frame::List`]: a row of [`ListItem`] node records with [`Decoration`]s above
//!   and below each node (linked list, and the captioned stack/queue views)
//!
//! # Text Form
//!
//! `Display` renders a frame on one line for the headless `--print` mode:
//! `Changing` elements are wrapped in `<..>`, `Modified` ones in `[..]`.

use crate::engine::constants::{HEAD_CAPTION, TAIL_CAPTION, TOP_CAPTION};
use crate::structures::{list::LinkedList, queue::BoundedQueue, stack::Stack};
use std::fmt;

/// Visual emphasis of a single element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HighlightState {
    #[default]
    Default,
    Changing,
    Modified,
}

/// Displayed value of an element
///
/// Ordering compares numbers numerically and text lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    Number(u64),
    Text(String),
}

impl Value {
    /// Get the numeric value, returns None for text
    pub fn as_number(&self) -> Option<u64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A value together with its highlight state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub value: Value,
    pub state: HighlightState,
}

impl Element {
    pub fn new(value: Value, state: HighlightState) -> Self {
        Element { value, state }
    }

    pub fn number(n: u64) -> Self {
        Element::new(Value::Number(n), HighlightState::Default)
    }

    pub fn text(s: impl Into<String>) -> Self {
        Element::new(Value::Text(s.into()), HighlightState::Default)
    }

    pub fn with_state(mut self, state: HighlightState) -> Self {
        self.state = state;
        self
    }
}

/// Transient annotation drawn above (`head`) or below (`tail`) a list node
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Decoration {
    #[default]
    Absent,
    /// Short label such as "head" or "tail"
    Caption(String),
    /// A value in transit, drawn as a small circle
    Preview(Element),
}

impl Decoration {
    pub fn is_absent(&self) -> bool {
        matches!(self, Decoration::Absent)
    }

    /// Preview circle for a value sliding into or out of the list
    pub fn preview(letter: impl Into<String>) -> Self {
        Decoration::Preview(Element::text(letter).with_state(HighlightState::Changing))
    }
}

/// Node record of a list frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListItem {
    pub letter: String,
    pub state: HighlightState,
    pub head: Decoration,
    pub tail: Decoration,
}

impl ListItem {
    pub fn new(letter: impl Into<String>) -> Self {
        ListItem {
            letter: letter.into(),
            ..ListItem::default()
        }
    }

    pub fn with_state(mut self, state: HighlightState) -> Self {
        self.state = state;
        self
    }
}

/// One immutable snapshot of a structure's visual state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Elements(Vec<Element>),
    List(Vec<ListItem>),
}

impl Frame {
    pub fn elements(&self) -> Option<&[Element]> {
        match self {
            Frame::Elements(elements) => Some(elements),
            Frame::List(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Frame::Elements(elements) => elements.len(),
            Frame::List(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Displayed text of every position, in order
    pub fn labels(&self) -> Vec<String> {
        match self {
            Frame::Elements(elements) => elements.iter().map(|e| e.value.to_string()).collect(),
            Frame::List(items) => items.iter().map(|item| item.letter.clone()).collect(),
        }
    }

    /// Highlight state of every position, in order
    pub fn states(&self) -> Vec<HighlightState> {
        match self {
            Frame::Elements(elements) => elements.iter().map(|e| e.state).collect(),
            Frame::List(items) => items.iter().map(|item| item.state).collect(),
        }
    }
}

fn write_marked(f: &mut fmt::Formatter<'_>, text: &str, state: HighlightState) -> fmt::Result {
    match state {
        HighlightState::Default => write!(f, "{}", text),
        HighlightState::Changing => write!(f, "<{}>", text),
        HighlightState::Modified => write!(f, "[{}]", text),
    }
}

fn write_decoration(
    f: &mut fmt::Formatter<'_>,
    sigil: char,
    decoration: &Decoration,
) -> fmt::Result {
    match decoration {
        Decoration::Absent => Ok(()),
        Decoration::Caption(caption) => write!(f, "{}{}", sigil, caption),
        Decoration::Preview(element) => {
            write!(f, "{}", sigil)?;
            write_marked(f, &element.value.to_string(), element.state)
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::Elements(elements) => {
                for (idx, element) in elements.iter().enumerate() {
                    if idx > 0 {
                        write!(f, " ")?;
                    }
                    write_marked(f, &element.value.to_string(), element.state)?;
                }
            }
            Frame::List(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, " -> ")?;
                    }
                    write!(f, "(")?;
                    write_marked(f, &item.letter, item.state)?;
                    write!(f, ")")?;
                    write_decoration(f, '^', &item.head)?;
                    write_decoration(f, '_', &item.tail)?;
                }
            }
        }
        Ok(())
    }
}

/// Traversal copy of a linked list with head/tail captions filled in
///
/// A caption only lands in a slot no transient preview is occupying.
pub fn list_snapshot(list: &LinkedList<ListItem>) -> Vec<ListItem> {
    let mut items = list.traverse();
    let last = items.len().saturating_sub(1);
    for (idx, item) in items.iter_mut().enumerate() {
        if idx == 0 && item.head.is_absent() {
            item.head = Decoration::Caption(HEAD_CAPTION.to_string());
        }
        if idx == last && item.tail.is_absent() {
            item.tail = Decoration::Caption(TAIL_CAPTION.to_string());
        }
    }
    items
}

/// Slot-by-slot view of a bounded queue
///
/// Empty slots show an empty letter; `highlight` marks one physical slot `Changing`.
pub fn queue_snapshot(queue: &BoundedQueue<String>, highlight: Option<usize>) -> Vec<ListItem> {
    let head = queue.head_slot();
    let tail = queue.tail_slot();
    queue
        .slots()
        .iter()
        .enumerate()
        .map(|(slot, value)| {
            let mut item = ListItem::new(value.clone().unwrap_or_default());
            if highlight == Some(slot) {
                item.state = HighlightState::Changing;
            }
            if !queue.is_empty() && slot == head {
                item.head = Decoration::Caption(HEAD_CAPTION.to_string());
            }
            if tail == Some(slot) {
                item.tail = Decoration::Caption(TAIL_CAPTION.to_string());
            }
            item
        })
        .collect()
}

/// Bottom-to-top view of a stack with the top item captioned
pub fn stack_snapshot(stack: &Stack<String>, highlight: Option<usize>) -> Vec<ListItem> {
    let top = stack.len().checked_sub(1);
    stack
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            let mut item = ListItem::new(value.clone());
            if highlight == Some(idx) {
                item.state = HighlightState::Changing;
            }
            if top == Some(idx) {
                item.head = Decoration::Caption(TOP_CAPTION.to_string());
            }
            item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_marks_states() {
        let frame = Frame::Elements(vec![
            Element::number(3),
            Element::number(5).with_state(HighlightState::Changing),
            Element::number(7).with_state(HighlightState::Modified),
        ]);
        assert_eq!(frame.to_string(), "3 <5> [7]");
    }

    #[test]
    fn test_display_list_decorations() {
        let mut first = ListItem::new("a");
        first.head = Decoration::Caption("head".to_string());
        let mut second = ListItem::new("").with_state(HighlightState::Changing);
        second.tail = Decoration::preview("b");
        let frame = Frame::List(vec![first, second]);
        assert_eq!(frame.to_string(), "(a)^head -> (<>)_<b>");
    }

    #[test]
    fn test_list_snapshot_captions() {
        let list: LinkedList<ListItem> = ["0", "1", "2"].into_iter().map(ListItem::new).collect();
        let items = list_snapshot(&list);
        assert_eq!(items[0].head, Decoration::Caption("head".to_string()));
        assert!(items[1].head.is_absent() && items[1].tail.is_absent());
        assert_eq!(items[2].tail, Decoration::Caption("tail".to_string()));
    }

    #[test]
    fn test_list_snapshot_single_node_gets_both_captions() {
        let list: LinkedList<ListItem> = std::iter::once(ListItem::new("z")).collect();
        let items = list_snapshot(&list);
        assert_eq!(items[0].head, Decoration::Caption("head".to_string()));
        assert_eq!(items[0].tail, Decoration::Caption("tail".to_string()));
    }

    #[test]
    fn test_preview_keeps_caption_slot() {
        let mut list: LinkedList<ListItem> = ["0", "1"].into_iter().map(ListItem::new).collect();
        if let Some(head) = list.front_mut() {
            head.head = Decoration::preview("x");
        }
        let items = list_snapshot(&list);
        assert_eq!(items[0].head, Decoration::preview("x"));
    }

    #[test]
    fn test_queue_snapshot_captions() {
        let mut queue = BoundedQueue::new(4);
        queue.enqueue("a".to_string()).unwrap();
        queue.enqueue("b".to_string()).unwrap();
        let items = queue_snapshot(&queue, Some(1));
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].head, Decoration::Caption("head".to_string()));
        assert_eq!(items[1].tail, Decoration::Caption("tail".to_string()));
        assert_eq!(items[1].state, HighlightState::Changing);
        assert_eq!(items[2].letter, "");
    }

    #[test]
    fn test_stack_snapshot_top_caption() {
        let mut stack = Stack::new();
        stack.push("a".to_string());
        stack.push("b".to_string());
        let items = stack_snapshot(&stack, None);
        assert_eq!(items[1].head, Decoration::Caption("top".to_string()));
        assert!(items[0].head.is_absent());
    }
}
