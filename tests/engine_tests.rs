// Integration tests for the step generators and data structures

use stepviz::engine::errors::EngineError;
use stepviz::engine::fibonacci::FibonacciSequence;
use stepviz::engine::list_ops::{Action, Anchor, ListOperation};
use stepviz::engine::registry::Animations;
use stepviz::engine::sorting::{elements_from_values, Direction, SortAlgorithm};
use stepviz::engine::string::StringReversal;
use stepviz::engine::Generator;
use stepviz::frame::{list_snapshot, queue_snapshot, Decoration, HighlightState, ListItem};
use stepviz::structures::list::LinkedList;
use stepviz::structures::queue::BoundedQueue;
use stepviz::structures::stack::Stack;

fn initial_list() -> LinkedList<ListItem> {
    ["0", "1", "2"].into_iter().map(ListItem::new).collect()
}

fn letters(list: &LinkedList<ListItem>) -> Vec<String> {
    list.iter().map(|item| item.letter.clone()).collect()
}

#[test]
fn test_frontend_reversal() {
    let mut reversal = StringReversal::new("frontend");
    let frames = reversal.collect_frames();
    assert_eq!(frames.len(), 4);
    let last = frames.last().unwrap();
    assert_eq!(last.labels().concat(), "dnetnorf");
    assert!(last.states().iter().all(|&s| s == HighlightState::Modified));
}

#[test]
fn test_fibonacci_five() {
    let mut fib = FibonacciSequence::new(5);
    let frames = fib.collect_frames();
    assert_eq!(frames.len(), 6);
    assert_eq!(frames[5].labels(), vec!["1", "1", "2", "3", "5", "8"]);
    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(frame.len(), i + 1);
    }
}

#[test]
fn test_fibonacci_cache_carries_over() {
    let mut first = FibonacciSequence::new(19);
    let frames = first.collect_frames();
    assert_eq!(frames[19].labels().last().map(String::as_str), Some("6765"));

    let cache = first.into_cache();
    let mut second = FibonacciSequence::with_cache(3, cache);
    assert_eq!(second.cached(), 20);
    let frames = second.collect_frames();
    assert_eq!(frames[3].labels(), vec!["1", "1", "2", "3"]);
}

#[test]
fn test_sorting_descending_selection() {
    let elements = elements_from_values(&[4, 9, 1, 9]);
    let mut sort = SortAlgorithm::Selection.build(elements, Direction::Descending);
    let frames = sort.collect_frames();
    // 4 + 3 + 2 + 1 scan frames, one terminal
    assert_eq!(frames.len(), 11);
    assert_eq!(frames.last().unwrap().to_string(), "[9] [9] [4] [1]");
}

#[test]
fn test_queue_capacity_law() {
    let mut queue = BoundedQueue::new(6);
    for n in 0..6 {
        queue.enqueue(n).unwrap();
    }
    assert_eq!(
        queue.enqueue(6),
        Err(EngineError::CapacityExceeded { capacity: 6 })
    );
    queue.clear();
    assert_eq!(queue.capacity(), 6);
    for n in 0..6 {
        assert!(queue.enqueue(n).is_ok());
    }
    assert!(queue.enqueue(6).is_err());
}

#[test]
fn test_queue_wraps_and_captions_follow() {
    let mut queue = BoundedQueue::new(3);
    for value in ["a", "b", "c"] {
        queue.enqueue(value.to_string()).unwrap();
    }
    assert_eq!(queue.dequeue().unwrap(), "a");
    queue.enqueue("d".to_string()).unwrap();

    let items = queue_snapshot(&queue, None);
    let labels: Vec<&str> = items.iter().map(|item| item.letter.as_str()).collect();
    assert_eq!(labels, vec!["d", "b", "c"]);
    assert_eq!(items[1].head, Decoration::Caption("head".into()));
    assert_eq!(items[0].tail, Decoration::Caption("tail".into()));
}

#[test]
fn test_stack_pop_is_lenient() {
    let mut stack: Stack<String> = Stack::new();
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.peek(), None);
    stack.push("a".to_string());
    assert_eq!(stack.pop().as_deref(), Some("a"));
    assert!(stack.is_empty());
}

#[test]
fn test_insert_at_index_end_to_end() {
    let mut list = initial_list();
    let mut op =
        ListOperation::new(&mut list, Action::Insert, Anchor::Index, Some("x"), Some(1)).unwrap();
    let frames = op.collect_frames();
    let last = frames.last().unwrap();
    assert_eq!(last.labels(), vec!["0", "x", "1", "2"]);
    let modified = last
        .states()
        .into_iter()
        .filter(|&s| s == HighlightState::Modified)
        .count();
    assert_eq!(modified, 1);

    let list = op.into_list();
    assert_eq!(letters(&list), vec!["0", "x", "1", "2"]);
}

#[test]
fn test_back_to_back_inserts_mark_only_the_latest() {
    let mut list = initial_list();
    for (value, index) in [("x", 3), ("y", 0)] {
        let mut op =
            ListOperation::new(&mut list, Action::Insert, Anchor::Index, Some(value), Some(index))
                .unwrap();
        let frames = op.collect_frames();
        let last = frames.last().unwrap();
        let modified: Vec<String> = last
            .labels()
            .into_iter()
            .zip(last.states())
            .filter(|(_, state)| *state == HighlightState::Modified)
            .map(|(label, _)| label)
            .collect();
        assert_eq!(modified, vec![value]);
        list = op.into_list();
    }
    assert_eq!(letters(&list), vec!["y", "0", "1", "2", "x"]);

    let mut op = ListOperation::new(&mut list, Action::Remove, Anchor::Head, None, None).unwrap();
    let frames = op.collect_frames();
    assert_eq!(
        frames.last().unwrap().to_string(),
        "(0)^head -> (1) -> (2) -> (x)_tail"
    );
}

#[test]
fn test_remove_everything_then_fail() {
    let mut list = initial_list();
    for expected in [vec!["1", "2"], vec!["1"], vec![]] {
        let op = ListOperation::new(
            &mut list,
            Action::Remove,
            if expected.len() == 1 { Anchor::Tail } else { Anchor::Head },
            None,
            None,
        )
        .unwrap();
        list = op.finish();
        assert_eq!(letters(&list), expected);
    }
    assert!(list_snapshot(&list).is_empty());

    let err = ListOperation::new(&mut list, Action::Remove, Anchor::Head, None, None);
    assert!(matches!(err, Err(EngineError::EmptyList)));
}

#[test]
fn test_construction_errors_leave_list_alone() {
    let mut list = initial_list();
    let missing = ListOperation::new(&mut list, Action::Insert, Anchor::Tail, None, None);
    assert!(matches!(missing, Err(EngineError::MissingValue { .. })));
    let out_of_range =
        ListOperation::new(&mut list, Action::Insert, Anchor::Index, Some("x"), Some(4));
    assert!(matches!(
        out_of_range,
        Err(EngineError::IndexOutOfRange { index: 4, len: 3 })
    ));
    assert_eq!(letters(&list), vec!["0", "1", "2"]);
}

#[test]
fn test_registry_runs_generators_side_by_side() {
    let mut animations = Animations::new();
    let fib = animations.start(Box::new(FibonacciSequence::new(1)));
    let rev = animations.start(Box::new(StringReversal::new("ab")));
    assert_eq!(animations.len(), 2);

    let step = animations.advance(rev).unwrap();
    assert!(step.done);
    assert!(!animations.is_running(rev));
    assert!(matches!(
        animations.advance(rev),
        Err(EngineError::UnknownAnimation { .. })
    ));

    assert!(!animations.advance(fib).unwrap().done);
    assert!(animations.advance(fib).unwrap().done);
    assert!(animations.is_empty());
}
