// Constants for the step engine and its collaborators

use std::ops::{Range, RangeInclusive};
use std::time::Duration;

/// Cadence at which the driver requests the next frame of an animation
pub const DELAY: Duration = Duration::from_millis(500);

/// How long a stack/queue slot stays highlighted after an operation
pub const SHORT_DELAY: Duration = Duration::from_millis(1000);

/// Largest Fibonacci index accepted from input
pub const MAX_FIBONACCI_INDEX: usize = 19;

/// Longest string accepted for reversal
pub const MAX_STRING_LEN: usize = 11;

/// Longest value accepted for stack, queue and list nodes
pub const MAX_VALUE_LEN: usize = 4;

/// Queue capacity used by the queue page
pub const QUEUE_CAPACITY: usize = 6;

/// Length range of randomly generated sorting arrays
pub const RANDOM_ARRAY_LEN: RangeInclusive<usize> = 3..=17;

/// Value range of randomly generated sorting arrays
pub const RANDOM_ARRAY_VALUES: Range<u64> = 0..100;

/// Starting contents of the linked list page
pub const INITIAL_LIST: [&str; 3] = ["0", "1", "2"];

pub const HEAD_CAPTION: &str = "head";
pub const TAIL_CAPTION: &str = "tail";
pub const TOP_CAPTION: &str = "top";
