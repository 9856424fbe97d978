//! Main TUI application state and logic

use crate::engine::constants::{INITIAL_LIST, QUEUE_CAPACITY, SHORT_DELAY};
use crate::engine::driver::{Flash, Player, Tick};
use crate::engine::errors::EngineError;
use crate::engine::fibonacci::FibonacciSequence;
use crate::engine::input;
use crate::engine::list_ops::{Action, Anchor, ListOperation};
use crate::engine::sorting::{elements_from_values, Direction as SortDirection, SortAlgorithm};
use crate::engine::string::StringReversal;
use crate::engine::Generator;
use crate::frame::{list_snapshot, queue_snapshot, stack_snapshot, Frame as Snapshot, ListItem};
use crate::structures::list::LinkedList;
use crate::structures::queue::BoundedQueue;
use crate::structures::stack::Stack;
use crate::ui::panes::{
    render_bars_pane, render_circles_pane, render_input_pane, render_status_bar,
    CirclesRenderData, InputField, PlayState, StatusRenderData,
};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::Tabs,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Characters a field accepts; validation happens on submit
const FIELD_LIMIT: usize = 48;

/// Which demo page is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    String,
    Fibonacci,
    Sorting,
    Stack,
    Queue,
    List,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::String,
        Page::Fibonacci,
        Page::Sorting,
        Page::Stack,
        Page::Queue,
        Page::List,
    ];

    /// Move to the next page, wrapping around
    pub fn next(self) -> Self {
        match self {
            Page::String => Page::Fibonacci,
            Page::Fibonacci => Page::Sorting,
            Page::Sorting => Page::Stack,
            Page::Stack => Page::Queue,
            Page::Queue => Page::List,
            Page::List => Page::String,
        }
    }

    /// Move to the previous page, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Page::String => Page::List,
            Page::Fibonacci => Page::String,
            Page::Sorting => Page::Fibonacci,
            Page::Stack => Page::Sorting,
            Page::Queue => Page::Stack,
            Page::List => Page::Queue,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::String => "String",
            Page::Fibonacci => "Fibonacci",
            Page::Sorting => "Sorting",
            Page::Stack => "Stack",
            Page::Queue => "Queue",
            Page::List => "Linked List",
        }
    }

    fn position(self) -> usize {
        Page::ALL.iter().position(|&p| p == self).unwrap_or(0)
    }

    fn keys(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Page::String | Page::Fibonacci => {
                &[("Enter", "Run"), ("Space", "Pause"), ("→", "Step")]
            }
            Page::Sorting => &[
                ("Enter", "Set"),
                ("F1", "Asc"),
                ("F2", "Desc"),
                ("F3", "Random"),
                ("F4", "Algo"),
            ],
            Page::Stack => &[("Enter", "Push"), ("F3", "Pop"), ("F4", "Clear")],
            Page::Queue => &[("Enter", "Enqueue"), ("F3", "Dequeue"), ("F4", "Clear")],
            Page::List => &[
                ("F1/F2", "Ins H/T"),
                ("F3/F4", "Rem H/T"),
                ("F5/F6", "Ins/Rem @i"),
                ("↑↓", "Field"),
            ],
        }
    }
}

/// Which text field receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFocus {
    Value,
    Index,
}

/// The animation currently on screen
///
/// Fibonacci and list operations keep their concrete type so their state can be
/// recovered once they finish.
enum Animation {
    Boxed(Player<Box<dyn Generator>>),
    Fibonacci(Player<FibonacciSequence>),
    List(Player<ListOperation>),
}

impl Animation {
    fn frame(&self) -> &Snapshot {
        match self {
            Animation::Boxed(p) => p.frame(),
            Animation::Fibonacci(p) => p.frame(),
            Animation::List(p) => p.frame(),
        }
    }

    fn steps(&self) -> usize {
        match self {
            Animation::Boxed(p) => p.steps(),
            Animation::Fibonacci(p) => p.steps(),
            Animation::List(p) => p.steps(),
        }
    }

    fn tick(&mut self, now: Instant) -> Tick {
        match self {
            Animation::Boxed(p) => p.tick(now),
            Animation::Fibonacci(p) => p.tick(now),
            Animation::List(p) => p.tick(now),
        }
    }

    fn step(&mut self) -> Tick {
        match self {
            Animation::Boxed(p) => p.step(),
            Animation::Fibonacci(p) => p.step(),
            Animation::List(p) => p.step(),
        }
    }
}

/// The main application state
pub struct App {
    /// Currently shown page
    pub page: Page,

    /// Text typed into the value field
    pub value_input: String,

    /// Text typed into the index field (list page only)
    pub index_input: String,

    pub input_focus: InputFocus,

    /// Frame cadence
    pub delay: Duration,

    animation: Option<Animation>,

    /// Frame left on screen by the last finished animation
    last_frame: Option<Snapshot>,

    /// Steps taken by the last finished animation
    last_steps: Option<usize>,

    /// Fibonacci memo reused across runs
    fib_cache: Vec<u64>,

    pub sort_values: Vec<u64>,
    pub sort_algorithm: SortAlgorithm,

    pub stack: Stack<String>,
    pub queue: BoundedQueue<String>,
    pub list: LinkedList<ListItem>,

    /// Slot highlighted after a stack or queue operation
    flash: Option<Flash>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
    pub status_is_error: bool,

    /// Whether the current animation advances on its own
    pub is_playing: bool,
}

impl App {
    /// Create a new app advancing animations every `delay`
    pub fn new(delay: Duration) -> Self {
        App {
            page: Page::String,
            value_input: String::new(),
            index_input: String::new(),
            input_focus: InputFocus::Value,
            delay,
            animation: None,
            last_frame: None,
            last_steps: None,
            fib_cache: Vec::new(),
            sort_values: input::random_array(&mut rand::thread_rng()),
            sort_algorithm: SortAlgorithm::Bubble,
            stack: Stack::new(),
            queue: BoundedQueue::new(QUEUE_CAPACITY),
            list: INITIAL_LIST.iter().map(|&letter| ListItem::new(letter)).collect(),
            flash: None,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            is_playing: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing {
                let tick = match self.animation.as_mut() {
                    Some(animation) => animation.tick(Instant::now()),
                    None => Tick::Idle,
                };
                if tick == Tick::Finished {
                    self.complete_animation();
                }
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Whether an animation is on screen and not yet finished
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Frame to draw for the current page
    pub fn current_frame(&self, now: Instant) -> Snapshot {
        if let Some(animation) = &self.animation {
            return animation.frame().clone();
        }
        let highlight = self.flash.and_then(|flash| flash.active(now));
        match self.page {
            Page::Stack => Snapshot::List(stack_snapshot(&self.stack, highlight)),
            Page::Queue => Snapshot::List(queue_snapshot(&self.queue, highlight)),
            Page::List => Snapshot::List(list_snapshot(&self.list)),
            Page::Sorting => self
                .last_frame
                .clone()
                .unwrap_or_else(|| Snapshot::Elements(elements_from_values(&self.sort_values))),
            Page::String | Page::Fibonacci => self
                .last_frame
                .clone()
                .unwrap_or(Snapshot::Elements(Vec::new())),
        }
    }

    fn play_state(&self) -> PlayState {
        match (&self.animation, self.last_steps) {
            (Some(_), _) if self.is_playing => PlayState::Playing,
            (Some(_), _) => PlayState::Paused,
            (None, Some(_)) => PlayState::Done,
            (None, None) => PlayState::Idle,
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let field_count = if self.page == Page::List { 2 } else { 1 };

        // Tabs, input, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(field_count + 2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let tabs = Tabs::new(Page::ALL.iter().map(|p| p.title()))
            .select(self.page.position())
            .style(Style::default().fg(DEFAULT_THEME.comment))
            .highlight_style(
                Style::default()
                    .fg(DEFAULT_THEME.border_focused)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, chunks[0]);

        let locked = self.is_animating();
        let mut fields = vec![InputField {
            label: self.value_label(),
            text: &self.value_input,
            hint: self.value_hint(),
            is_active: self.input_focus == InputFocus::Value,
        }];
        if self.page == Page::List {
            fields.push(InputField {
                label: "index",
                text: &self.index_input,
                hint: "0..=len",
                is_active: self.input_focus == InputFocus::Index,
            });
        }
        render_input_pane(frame, chunks[1], &fields, locked);

        let snapshot = self.current_frame(Instant::now());
        match self.page {
            Page::Sorting => {
                let title = match self.sort_algorithm {
                    SortAlgorithm::Bubble => "Bubble sort",
                    SortAlgorithm::Selection => "Selection sort",
                };
                render_bars_pane(frame, chunks[2], &snapshot, title, true);
            }
            page => render_circles_pane(
                frame,
                chunks[2],
                CirclesRenderData {
                    snapshot: &snapshot,
                    title: page.title(),
                    arrows: page == Page::List,
                },
                true,
            ),
        }

        let steps = self
            .animation
            .as_ref()
            .map(Animation::steps)
            .or(self.last_steps)
            .unwrap_or(0);
        render_status_bar(
            frame,
            chunks[3],
            StatusRenderData {
                message: &self.status_message,
                steps,
                is_error: self.status_is_error,
                play_state: self.play_state(),
                keys: self.page.keys(),
            },
        );
    }

    fn value_label(&self) -> &'static str {
        match self.page {
            Page::String => "string",
            Page::Fibonacci => "index",
            Page::Sorting => "array",
            Page::Stack | Page::Queue | Page::List => "value",
        }
    }

    fn value_hint(&self) -> &'static str {
        match self.page {
            Page::String => "up to 11 characters",
            Page::Fibonacci => "0..=19",
            Page::Sorting => "numbers, comma separated",
            Page::Stack | Page::Queue | Page::List => "1 to 4 characters",
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => self.switch_page(self.page.next()),
            KeyCode::BackTab => self.switch_page(self.page.prev()),
            KeyCode::Char(' ') if self.is_animating() => {
                self.is_playing = !self.is_playing;
                self.set_status(if self.is_playing { "Playing..." } else { "Paused" });
            }
            KeyCode::Right if self.is_animating() => {
                self.is_playing = false;
                let tick = match self.animation.as_mut() {
                    Some(animation) => animation.step(),
                    None => Tick::Idle,
                };
                if tick == Tick::Finished {
                    self.complete_animation();
                } else {
                    self.set_status("Stepped forward");
                }
            }
            KeyCode::Up | KeyCode::Down if self.page == Page::List => {
                self.input_focus = match self.input_focus {
                    InputFocus::Value => InputFocus::Index,
                    InputFocus::Index => InputFocus::Value,
                };
            }
            KeyCode::Char(c) if !self.is_animating() => {
                let field = self.active_field();
                if field.chars().count() < FIELD_LIMIT {
                    field.push(c);
                }
            }
            KeyCode::Backspace if !self.is_animating() => {
                self.active_field().pop();
            }
            KeyCode::Enter | KeyCode::F(_) if self.is_animating() => {
                self.set_error("Animation in progress");
            }
            _ => self.handle_page_key(key.code),
        }
    }

    fn active_field(&mut self) -> &mut String {
        match (self.page, self.input_focus) {
            (Page::List, InputFocus::Index) => &mut self.index_input,
            _ => &mut self.value_input,
        }
    }

    fn handle_page_key(&mut self, code: KeyCode) {
        let result = match (self.page, code) {
            (Page::String, KeyCode::Enter) => self.start_string(),
            (Page::Fibonacci, KeyCode::Enter) => self.start_fibonacci(),
            (Page::Sorting, KeyCode::Enter) => self.set_sort_values(),
            (Page::Sorting, KeyCode::F(1)) => {
                self.start_sort(SortDirection::Ascending);
                Ok(())
            }
            (Page::Sorting, KeyCode::F(2)) => {
                self.start_sort(SortDirection::Descending);
                Ok(())
            }
            (Page::Sorting, KeyCode::F(3)) => {
                self.sort_values = input::random_array(&mut rand::thread_rng());
                self.last_frame = None;
                self.last_steps = None;
                self.set_status("New random array");
                Ok(())
            }
            (Page::Sorting, KeyCode::F(4)) => {
                self.sort_algorithm = match self.sort_algorithm {
                    SortAlgorithm::Bubble => SortAlgorithm::Selection,
                    SortAlgorithm::Selection => SortAlgorithm::Bubble,
                };
                self.set_status("Algorithm switched");
                Ok(())
            }
            (Page::Stack, KeyCode::Enter) => self.push_stack(),
            (Page::Stack, KeyCode::F(3)) => {
                self.pop_stack();
                Ok(())
            }
            (Page::Stack, KeyCode::F(4)) => {
                self.stack.clear();
                self.flash = None;
                self.set_status("Stack cleared");
                Ok(())
            }
            (Page::Queue, KeyCode::Enter) => self.enqueue(),
            (Page::Queue, KeyCode::F(3)) => self.dequeue(),
            (Page::Queue, KeyCode::F(4)) => {
                self.queue.clear();
                self.flash = None;
                self.set_status("Queue cleared");
                Ok(())
            }
            (Page::List, KeyCode::F(n @ 1..=6)) => self.start_list_operation(n),
            _ => Ok(()),
        };

        if let Err(err) = result {
            self.set_error(err.to_string());
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }

    /// Leave the current page, abandoning any animation
    fn switch_page(&mut self, page: Page) {
        match self.animation.take() {
            // A half-done list mutation is completed so the list stays consistent
            Some(Animation::List(player)) => {
                self.list = player.into_generator().finish();
            }
            Some(Animation::Fibonacci(player)) => {
                self.fib_cache = player.into_generator().into_cache();
            }
            Some(Animation::Boxed(_)) | None => {}
        }
        debug!(from = ?self.page, to = ?page, "page switched");
        self.page = page;
        self.input_focus = InputFocus::Value;
        self.value_input.clear();
        self.index_input.clear();
        self.last_frame = None;
        self.last_steps = None;
        self.flash = None;
        self.is_playing = false;
        self.set_status(page.title());
    }

    fn begin(&mut self, animation: Animation) {
        self.last_frame = None;
        self.last_steps = None;
        self.animation = Some(animation);
        self.is_playing = true;
        self.set_status("Playing...");
    }

    /// Collect the state left behind by the finished animation
    fn complete_animation(&mut self) {
        let Some(animation) = self.animation.take() else {
            return;
        };
        let steps = animation.steps();
        let frame = animation.frame().clone();
        match animation {
            Animation::List(player) => {
                self.list = player.into_generator().into_list();
            }
            Animation::Fibonacci(player) => {
                self.fib_cache = player.into_generator().into_cache();
                self.last_frame = Some(frame);
            }
            Animation::Boxed(_) => {
                if self.page == Page::Sorting {
                    if let Some(elements) = frame.elements() {
                        self.sort_values =
                            elements.iter().filter_map(|e| e.value.as_number()).collect();
                    }
                }
                self.last_frame = Some(frame);
            }
        }
        info!(page = ?self.page, steps, "animation finished");
        self.last_steps = Some(steps);
        self.is_playing = false;
        self.set_status(format!("Done in {} step(s)", steps));
    }

    fn start_string(&mut self) -> Result<(), EngineError> {
        let text = input::parse_string(&self.value_input)?;
        let generator: Box<dyn Generator> = Box::new(StringReversal::new(&text));
        let player = Player::start(generator, self.delay, Instant::now());
        self.begin(Animation::Boxed(player));
        Ok(())
    }

    fn start_fibonacci(&mut self) -> Result<(), EngineError> {
        let target = input::parse_fibonacci_index(&self.value_input)?;
        let cache = std::mem::take(&mut self.fib_cache);
        let generator = FibonacciSequence::with_cache(target, cache);
        let player = Player::start(generator, self.delay, Instant::now());
        self.begin(Animation::Fibonacci(player));
        Ok(())
    }

    fn set_sort_values(&mut self) -> Result<(), EngineError> {
        self.sort_values = input::parse_numbers(&self.value_input)?;
        self.value_input.clear();
        self.last_frame = None;
        self.last_steps = None;
        self.set_status(format!("Array set ({} values)", self.sort_values.len()));
        Ok(())
    }

    fn start_sort(&mut self, direction: SortDirection) {
        let elements = elements_from_values(&self.sort_values);
        let generator = self.sort_algorithm.build(elements, direction);
        let player = Player::start(generator, self.delay, Instant::now());
        self.begin(Animation::Boxed(player));
    }

    fn push_stack(&mut self) -> Result<(), EngineError> {
        let value = input::parse_value(&self.value_input)?;
        self.set_status(format!("Pushed {}", value));
        self.stack.push(value);
        self.value_input.clear();
        self.flash = Some(Flash::new(self.stack.len() - 1, SHORT_DELAY, Instant::now()));
        Ok(())
    }

    fn pop_stack(&mut self) {
        self.flash = None;
        match self.stack.pop() {
            Some(value) => self.set_status(format!("Popped {}", value)),
            None => self.set_status("Stack is empty"),
        }
    }

    fn enqueue(&mut self) -> Result<(), EngineError> {
        let value = input::parse_value(&self.value_input)?;
        let slot = self.queue.next_slot();
        self.queue.enqueue(value.clone())?;
        self.value_input.clear();
        self.flash = slot.map(|slot| Flash::new(slot, SHORT_DELAY, Instant::now()));
        self.set_status(format!("Enqueued {}", value));
        Ok(())
    }

    fn dequeue(&mut self) -> Result<(), EngineError> {
        let value = self.queue.dequeue()?;
        self.flash = (!self.queue.is_empty())
            .then(|| Flash::new(self.queue.head_slot(), SHORT_DELAY, Instant::now()));
        self.set_status(format!("Dequeued {}", value));
        Ok(())
    }

    fn start_list_operation(&mut self, key: u8) -> Result<(), EngineError> {
        let (action, anchor) = match key {
            1 => (Action::Insert, Anchor::Head),
            2 => (Action::Insert, Anchor::Tail),
            3 => (Action::Remove, Anchor::Head),
            4 => (Action::Remove, Anchor::Tail),
            5 => (Action::Insert, Anchor::Index),
            _ => (Action::Remove, Anchor::Index),
        };
        let value = match action {
            Action::Insert => Some(input::parse_value(&self.value_input)?),
            Action::Remove => None,
        };
        let index = match anchor {
            Anchor::Index => Some(input::parse_index(&self.index_input)?),
            Anchor::Head | Anchor::Tail => None,
        };
        let operation =
            ListOperation::new(&mut self.list, action, anchor, value.as_deref(), index)?;
        let player = Player::start(operation, self.delay, Instant::now());
        self.begin(Animation::List(player));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::HighlightState;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn run_to_end(app: &mut App) {
        while app.is_animating() {
            press(app, KeyCode::Right);
        }
    }

    #[test]
    fn test_page_cycle_wraps() {
        let mut page = Page::String;
        for _ in 0..Page::ALL.len() {
            page = page.next();
        }
        assert_eq!(page, Page::String);
        assert_eq!(Page::String.prev(), Page::List);
        assert_eq!(Page::List.prev().next(), Page::List);
    }

    #[test]
    fn test_string_page_reverses() {
        let mut app = App::new(Duration::from_millis(10));
        type_text(&mut app, "frontend");
        press(&mut app, KeyCode::Enter);
        assert!(app.is_animating());
        run_to_end(&mut app);
        let frame = app.current_frame(Instant::now());
        assert_eq!(frame.labels().concat(), "dnetnorf");
        assert_eq!(app.play_state(), PlayState::Done);
    }

    #[test]
    fn test_invalid_input_sets_error() {
        let mut app = App::new(Duration::from_millis(10));
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "42");
        press(&mut app, KeyCode::Enter);
        assert!(!app.is_animating());
        assert!(app.status_is_error);
    }

    #[test]
    fn test_fibonacci_reuses_cache() {
        let mut app = App::new(Duration::from_millis(10));
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "10");
        press(&mut app, KeyCode::Enter);
        run_to_end(&mut app);
        assert_eq!(app.fib_cache.len(), 11);
        assert_eq!(app.current_frame(Instant::now()).len(), 11);
    }

    #[test]
    fn test_sorting_keeps_sorted_values() {
        let mut app = App::new(Duration::from_millis(10));
        app.switch_page(Page::Sorting);
        type_text(&mut app, "5, 3, 9, 1");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.sort_values, vec![5, 3, 9, 1]);
        press(&mut app, KeyCode::F(2));
        run_to_end(&mut app);
        assert_eq!(app.sort_values, vec![9, 5, 3, 1]);
    }

    #[test]
    fn test_queue_capacity_reported() {
        let mut app = App::new(Duration::from_millis(10));
        app.switch_page(Page::Queue);
        for n in 0..QUEUE_CAPACITY {
            type_text(&mut app, &n.to_string());
            press(&mut app, KeyCode::Enter);
        }
        assert!(!app.status_is_error);
        type_text(&mut app, "x");
        press(&mut app, KeyCode::Enter);
        assert!(app.status_is_error);
        assert_eq!(app.queue.len(), QUEUE_CAPACITY);
    }

    #[test]
    fn test_enqueue_flashes_written_slot() {
        let mut app = App::new(Duration::from_millis(10));
        app.switch_page(Page::Queue);
        type_text(&mut app, "a");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::F(3));
        type_text(&mut app, "b");
        press(&mut app, KeyCode::Enter);
        let states = app.current_frame(Instant::now()).states();
        assert_eq!(states[1], HighlightState::Changing);
        assert_eq!(
            states.iter().filter(|&&s| s == HighlightState::Changing).count(),
            1
        );
    }

    #[test]
    fn test_list_highlights_do_not_accumulate() {
        let mut app = App::new(Duration::from_millis(10));
        app.switch_page(Page::List);
        for (value, index) in [("x", "3"), ("y", "0")] {
            app.value_input = value.to_string();
            app.index_input = index.to_string();
            press(&mut app, KeyCode::F(5));
            run_to_end(&mut app);
        }
        let modified = app
            .current_frame(Instant::now())
            .states()
            .into_iter()
            .filter(|&s| s == HighlightState::Modified)
            .count();
        assert_eq!(modified, 1);
    }

    #[test]
    fn test_stack_pop_on_empty_is_not_an_error() {
        let mut app = App::new(Duration::from_millis(10));
        app.switch_page(Page::Stack);
        press(&mut app, KeyCode::F(3));
        assert!(!app.status_is_error);
        type_text(&mut app, "ab");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.stack.peek().map(String::as_str), Some("ab"));
        let frame = app.current_frame(Instant::now());
        assert_eq!(frame.to_string(), "(<ab>)^top");
    }

    #[test]
    fn test_list_switch_mid_animation_completes_mutation() {
        let mut app = App::new(Duration::from_millis(10));
        app.switch_page(Page::List);
        type_text(&mut app, "x");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "1");
        press(&mut app, KeyCode::F(5));
        assert!(app.is_animating());
        assert!(app.list.is_empty());
        press(&mut app, KeyCode::Tab);
        let letters: Vec<String> = app.list.iter().map(|item| item.letter.clone()).collect();
        assert_eq!(letters, vec!["0", "x", "1", "2"]);
    }

    #[test]
    fn test_list_remove_on_empty_reports_error() {
        let mut app = App::new(Duration::from_millis(10));
        app.switch_page(Page::List);
        for _ in 0..INITIAL_LIST.len() {
            press(&mut app, KeyCode::F(3));
            run_to_end(&mut app);
        }
        assert!(app.list.is_empty());
        press(&mut app, KeyCode::F(4));
        assert!(app.status_is_error);
        assert!(!app.is_animating());
    }
}
