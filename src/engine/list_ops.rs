//! Linked-list insert/remove animations
//!
//! One generator covers every (action, anchor) pair. It borrows nothing: on
//! construction it takes the list out of the caller's slot, animates on its own
//! copy, and gives it back through [`ListOperation::into_list`] or
//! [`ListOperation::finish`].
//!
//! # Step Plans
//!
//! | operation          | frames                                              |
//! |--------------------|-----------------------------------------------------|
//! | insert head/tail   | preview (non-empty list only), commit, settle       |
//! | remove head/tail   | detach, commit                                      |
//! | insert at `i`      | walk `0..=min(i, len-1)`, commit, settle            |
//! | remove at `i`      | walk `0..=i`, detach, commit                        |
//!
//! The last frame of each plan is the terminal frame.

use super::errors::EngineError;
use super::{Generator, Step};
use crate::frame::{list_snapshot, Decoration, Frame, HighlightState, ListItem};
use crate::structures::list::LinkedList;
use tracing::{debug, trace, warn};

/// Structural change requested on the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Insert,
    Remove,
}

/// Where the change happens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Head,
    Tail,
    Index,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Plan {
    InsertHead { value: String },
    InsertTail { value: String },
    InsertAt { value: String, index: usize },
    RemoveHead,
    RemoveTail,
    RemoveAt { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Incoming value shown on the current head/tail node
    Preview,
    /// Visiting the node at this position
    Walk(usize),
    /// Target letter lifted out of its node
    Detach,
    /// Structural mutation
    Commit,
    /// Highlights cleared
    Settle,
}

/// Clear highlights and decorations left behind by an earlier operation
fn reset_nodes(list: &mut LinkedList<ListItem>) {
    for item in list.values_mut() {
        item.state = HighlightState::Default;
        item.head = Decoration::Absent;
        item.tail = Decoration::Absent;
    }
}

/// Animated insert/remove on a linked list of node records
pub struct ListOperation {
    list: LinkedList<ListItem>,
    plan: Plan,
    phase: Phase,
    finished: bool,
}

impl ListOperation {
    /// Validate the request and take the list out of `list`.
    ///
    /// On error `list` is left untouched and no frame is produced.
    pub fn new(
        list: &mut LinkedList<ListItem>,
        action: Action,
        anchor: Anchor,
        value: Option<&str>,
        index: Option<usize>,
    ) -> Result<Self, EngineError> {
        let len = list.len();
        let plan = match action {
            Action::Insert => {
                let value = value
                    .ok_or(EngineError::MissingValue {
                        operation: "insert",
                    })?
                    .to_string();
                match anchor {
                    Anchor::Head => Plan::InsertHead { value },
                    Anchor::Tail => Plan::InsertTail { value },
                    Anchor::Index => {
                        let index = index.ok_or(EngineError::MissingIndex {
                            operation: "insert",
                        })?;
                        if index > len {
                            return Err(EngineError::IndexOutOfRange { index, len });
                        }
                        Plan::InsertAt { value, index }
                    }
                }
            }
            Action::Remove => match anchor {
                Anchor::Head | Anchor::Tail if len == 0 => return Err(EngineError::EmptyList),
                Anchor::Head => Plan::RemoveHead,
                Anchor::Tail => Plan::RemoveTail,
                Anchor::Index => {
                    let index = index.ok_or(EngineError::MissingIndex {
                        operation: "remove",
                    })?;
                    if index >= len {
                        return Err(EngineError::IndexOutOfRange { index, len });
                    }
                    Plan::RemoveAt { index }
                }
            },
        };

        let phase = match &plan {
            Plan::InsertHead { .. } | Plan::InsertTail { .. } if len > 0 => Phase::Preview,
            Plan::InsertAt { .. } if len > 0 => Phase::Walk(0),
            Plan::InsertHead { .. } | Plan::InsertTail { .. } | Plan::InsertAt { .. } => {
                Phase::Commit
            }
            Plan::RemoveHead | Plan::RemoveTail => Phase::Detach,
            Plan::RemoveAt { .. } => Phase::Walk(0),
        };
        debug!(?action, ?anchor, ?index, len, "list operation started");
        reset_nodes(list);

        Ok(ListOperation {
            list: std::mem::take(list),
            plan,
            phase,
            finished: false,
        })
    }

    /// Give the list back in whatever state the animation has reached
    pub fn into_list(self) -> LinkedList<ListItem> {
        self.list
    }

    /// Run the remaining steps without displaying them and give the list back
    pub fn finish(mut self) -> LinkedList<ListItem> {
        while self.advance().is_some() {}
        self.list
    }

    fn snapshot(&self) -> Frame {
        Frame::List(list_snapshot(&self.list))
    }

    fn end_node(&mut self, at_head: bool) -> Option<&mut ListItem> {
        if at_head {
            self.list.front_mut()
        } else {
            self.list.back_mut()
        }
    }

    fn clear_highlights(&mut self) {
        for item in self.list.values_mut() {
            if item.state == HighlightState::Changing {
                item.state = HighlightState::Default;
            }
        }
    }

    fn terminal(&mut self) -> Step {
        self.finished = true;
        debug!(len = self.list.len(), "list operation finished");
        Step::last(self.snapshot())
    }

    fn abort(&mut self, err: EngineError) -> Step {
        warn!(%err, "list operation aborted");
        self.terminal()
    }

    fn advance_end_insert(&mut self, value: String, at_head: bool) -> Step {
        match self.phase {
            Phase::Preview => {
                if let Some(node) = self.end_node(at_head) {
                    node.head = Decoration::preview(value.as_str());
                }
                let frame = self.snapshot();
                if let Some(node) = self.end_node(at_head) {
                    node.head = Decoration::Absent;
                }
                self.phase = Phase::Commit;
                Step::next(frame)
            }
            Phase::Commit => {
                let item = ListItem::new(value).with_state(HighlightState::Modified);
                if at_head {
                    self.list.unshift(item);
                } else {
                    self.list.push(item);
                }
                self.phase = Phase::Settle;
                Step::next(self.snapshot())
            }
            _ => {
                if let Some(node) = self.end_node(at_head) {
                    node.state = HighlightState::Default;
                }
                self.terminal()
            }
        }
    }

    fn advance_end_remove(&mut self, at_head: bool) -> Step {
        match self.phase {
            Phase::Detach => {
                if let Some(node) = self.end_node(at_head) {
                    let letter = std::mem::take(&mut node.letter);
                    node.tail = Decoration::preview(letter);
                }
                self.phase = Phase::Commit;
                Step::next(self.snapshot())
            }
            _ => {
                if at_head {
                    self.list.shift();
                } else {
                    self.list.pop();
                }
                self.terminal()
            }
        }
    }

    fn advance_insert_at(&mut self, value: String, index: usize) -> Step {
        match self.phase {
            Phase::Walk(position) => {
                // Inserting at `len` ends the walk on the tail
                let last = index.min(self.list.len().saturating_sub(1));
                if let Some(node) = self.list.get_mut(position) {
                    node.state = HighlightState::Changing;
                    node.head = Decoration::preview(value.as_str());
                }
                let frame = self.snapshot();
                if let Some(node) = self.list.get_mut(position) {
                    node.head = Decoration::Absent;
                }
                trace!(position, "walk");
                self.phase = if position < last {
                    Phase::Walk(position + 1)
                } else {
                    Phase::Commit
                };
                Step::next(frame)
            }
            Phase::Commit => {
                let item = ListItem::new(value).with_state(HighlightState::Modified);
                if let Err(err) = self.list.insert_at(index, item) {
                    return self.abort(err);
                }
                self.phase = Phase::Settle;
                Step::next(self.snapshot())
            }
            _ => {
                self.clear_highlights();
                self.terminal()
            }
        }
    }

    fn advance_remove_at(&mut self, index: usize) -> Step {
        match self.phase {
            Phase::Walk(position) => {
                if let Some(node) = self.list.get_mut(position) {
                    node.state = HighlightState::Changing;
                }
                trace!(position, "walk");
                self.phase = if position < index {
                    Phase::Walk(position + 1)
                } else {
                    Phase::Detach
                };
                Step::next(self.snapshot())
            }
            Phase::Detach => {
                if let Some(node) = self.list.get_mut(index) {
                    let letter = std::mem::take(&mut node.letter);
                    node.tail = Decoration::preview(letter);
                }
                self.phase = Phase::Commit;
                Step::next(self.snapshot())
            }
            _ => {
                if let Err(err) = self.list.remove_at(index) {
                    return self.abort(err);
                }
                self.clear_highlights();
                self.terminal()
            }
        }
    }
}

impl Generator for ListOperation {
    fn name(&self) -> &'static str {
        match self.plan {
            Plan::InsertHead { .. } => "insert at head",
            Plan::InsertTail { .. } => "insert at tail",
            Plan::InsertAt { .. } => "insert at index",
            Plan::RemoveHead => "remove from head",
            Plan::RemoveTail => "remove from tail",
            Plan::RemoveAt { .. } => "remove at index",
        }
    }

    fn initial_frame(&self) -> Frame {
        self.snapshot()
    }

    fn advance(&mut self) -> Option<Step> {
        if self.finished {
            return None;
        }
        let step = match self.plan.clone() {
            Plan::InsertHead { value } => self.advance_end_insert(value, true),
            Plan::InsertTail { value } => self.advance_end_insert(value, false),
            Plan::InsertAt { value, index } => self.advance_insert_at(value, index),
            Plan::RemoveHead => self.advance_end_remove(true),
            Plan::RemoveTail => self.advance_end_remove(false),
            Plan::RemoveAt { index } => self.advance_remove_at(index),
        };
        Some(step)
    }

    fn is_done(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(letters: &[&str]) -> LinkedList<ListItem> {
        letters.iter().map(|l| ListItem::new(*l)).collect()
    }

    fn start(
        list: &mut LinkedList<ListItem>,
        action: Action,
        anchor: Anchor,
        value: Option<&str>,
        index: Option<usize>,
    ) -> ListOperation {
        ListOperation::new(list, action, anchor, value, index).unwrap()
    }

    #[test]
    fn test_insert_tail_frames() {
        let mut list = list_of(&["0", "1"]);
        let mut op = start(&mut list, Action::Insert, Anchor::Tail, Some("x"), None);
        assert!(list.is_empty());
        let frames = op.collect_frames();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].to_string(), "(0)^head -> (1)^<x>_tail");
        assert_eq!(frames[1].to_string(), "(0)^head -> (1) -> ([x])_tail");
        assert_eq!(frames[2].to_string(), "(0)^head -> (1) -> (x)_tail");
        assert_eq!(op.into_list().traverse().len(), 3);
    }

    #[test]
    fn test_insert_head_on_empty_list_skips_preview() {
        let mut list = LinkedList::new();
        let mut op = start(&mut list, Action::Insert, Anchor::Head, Some("a"), None);
        let frames = op.collect_frames();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].to_string(), "([a])^head_tail");
        assert_eq!(frames[1].to_string(), "(a)^head_tail");
    }

    #[test]
    fn test_remove_head_frames() {
        let mut list = list_of(&["0", "1", "2"]);
        let mut op = start(&mut list, Action::Remove, Anchor::Head, None, None);
        let frames = op.collect_frames();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].to_string(), "()^head_<0> -> (1) -> (2)_tail");
        assert_eq!(frames[1].to_string(), "(1)^head -> (2)_tail");
    }

    #[test]
    fn test_insert_at_walks_to_index() {
        let mut list = list_of(&["0", "1", "2"]);
        let mut op = start(&mut list, Action::Insert, Anchor::Index, Some("x"), Some(1));
        let frames = op.collect_frames();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].to_string(), "(<0>)^<x> -> (1) -> (2)_tail");
        assert_eq!(frames[1].to_string(), "(<0>)^head -> (<1>)^<x> -> (2)_tail");
        assert_eq!(frames[2].to_string(), "(<0>)^head -> ([x]) -> (<1>) -> (2)_tail");
        assert_eq!(frames[3].to_string(), "(0)^head -> ([x]) -> (1) -> (2)_tail");
    }

    #[test]
    fn test_insert_at_length_ends_walk_on_tail() {
        let mut list = list_of(&["0", "1"]);
        let mut op = start(&mut list, Action::Insert, Anchor::Index, Some("x"), Some(2));
        let frames = op.collect_frames();
        // two walk frames, commit, settle
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[3].labels(), vec!["0", "1", "x"]);
    }

    #[test]
    fn test_remove_at_frames() {
        let mut list = list_of(&["0", "1", "2"]);
        let mut op = start(&mut list, Action::Remove, Anchor::Index, None, Some(1));
        let frames = op.collect_frames();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].to_string(), "(<0>)^head -> (1) -> (2)_tail");
        assert_eq!(frames[1].to_string(), "(<0>)^head -> (<1>) -> (2)_tail");
        assert_eq!(frames[2].to_string(), "(<0>)^head -> (<>)_<1> -> (2)_tail");
        assert_eq!(frames[3].to_string(), "(0)^head -> (2)_tail");
    }

    #[test]
    fn test_remove_only_node_by_index() {
        let mut list = list_of(&["q"]);
        let mut op = start(&mut list, Action::Remove, Anchor::Index, None, Some(0));
        let frames = op.collect_frames();
        assert_eq!(frames.len(), 3);
        assert!(frames[2].is_empty());
        assert!(op.into_list().is_empty());
    }

    #[test]
    fn test_invalid_requests_leave_list_untouched() {
        let mut list = list_of(&["0", "1"]);
        let err = ListOperation::new(&mut list, Action::Remove, Anchor::Index, None, Some(2))
            .err()
            .unwrap();
        assert_eq!(err, EngineError::IndexOutOfRange { index: 2, len: 2 });
        assert!(ListOperation::new(&mut list, Action::Insert, Anchor::Index, Some("x"), Some(3))
            .is_err());
        assert_eq!(
            ListOperation::new(&mut list, Action::Insert, Anchor::Head, None, None).err(),
            Some(EngineError::MissingValue { operation: "insert" })
        );
        assert_eq!(
            ListOperation::new(&mut list, Action::Remove, Anchor::Index, None, None).err(),
            Some(EngineError::MissingIndex { operation: "remove" })
        );
        assert_eq!(list.len(), 2);

        let mut empty = LinkedList::new();
        assert_eq!(
            ListOperation::new(&mut empty, Action::Remove, Anchor::Tail, None, None).err(),
            Some(EngineError::EmptyList)
        );
    }

    #[test]
    fn test_finish_completes_mutation() {
        let mut list = list_of(&["0", "1", "2"]);
        let mut op = start(&mut list, Action::Remove, Anchor::Tail, None, None);
        op.advance();
        let list = op.finish();
        let letters: Vec<_> = list.iter().map(|i| i.letter.clone()).collect();
        assert_eq!(letters, vec!["0", "1"]);
    }

    #[test]
    fn test_new_operation_clears_leftover_highlights() {
        let mut list = list_of(&["0", "1", "2"]);
        list = start(&mut list, Action::Insert, Anchor::Index, Some("x"), Some(3)).finish();
        assert_eq!(list.back().map(|item| item.state), Some(HighlightState::Modified));

        let mut op = start(&mut list, Action::Insert, Anchor::Index, Some("y"), Some(0));
        assert_eq!(op.initial_frame().to_string(), "(0)^head -> (1) -> (2) -> (x)_tail");
        let frames = op.collect_frames();
        assert_eq!(
            frames.last().unwrap().to_string(),
            "([y])^head -> (0) -> (1) -> (2) -> (x)_tail"
        );

        let mut op = start(&mut op.into_list(), Action::Remove, Anchor::Head, None, None);
        let frames = op.collect_frames();
        assert_eq!(
            frames.last().unwrap().to_string(),
            "(0)^head -> (1) -> (2) -> (x)_tail"
        );
    }
}
