//! Command-line arguments and the headless print mode
//!
//! ```text
//! stepviz [--delay <ms>] [-v | -q]
//! stepviz --print <demo> [input...]
//! ```
//!
//! Print mode runs one generator to completion through
//! [`Animations`](crate::engine::registry::Animations) and writes every frame to
//! stdout, one line per step, using the frame's text notation.

use crate::engine::constants::{DELAY, INITIAL_LIST};
use crate::engine::errors::EngineError;
use crate::engine::fibonacci::FibonacciSequence;
use crate::engine::input;
use crate::engine::list_ops::{Action, Anchor, ListOperation};
use crate::engine::registry::Animations;
use crate::engine::sorting::{elements_from_values, Direction, SortAlgorithm};
use crate::engine::string::StringReversal;
use crate::engine::Generator;
use crate::frame::ListItem;
use crate::logging::Verbosity;
use crate::structures::list::LinkedList;
use std::io::Write;
use std::time::Duration;
use thiserror::Error;

pub const USAGE: &str = "\
Usage: stepviz [--delay <ms>] [-v | -q]
       stepviz --print <demo> [input...]

Demos:
  string <text>                         reverse a string
  fibonacci <n>                         F(0)..=F(n), n in 0..=19
  bubble|selection [asc|desc] [n...]    sort numbers (random if none given)
  list <insert|remove> <head|tail|index> [value] [index]
                                        mutate the list (0) -> (1) -> (2)";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CliError {
    #[error("unknown argument '{0}'")]
    UnknownArgument(String),

    #[error("{flag} expects a value")]
    MissingValue { flag: &'static str },

    #[error("invalid delay '{0}', expected milliseconds")]
    InvalidDelay(String),

    #[error("unknown demo '{0}'")]
    UnknownDemo(String),

    #[error("{0}")]
    Engine(#[from] EngineError),
}

/// Demo selected for print mode, with its raw inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintRequest {
    pub demo: String,
    pub inputs: Vec<String>,
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub delay: Duration,
    pub verbosity: Verbosity,
    pub print: Option<PrintRequest>,
    pub help: bool,
}

/// Parse arguments, excluding the program name
pub fn parse_args<I>(args: I) -> Result<Options, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut delay = DELAY;
    let mut verbose = false;
    let mut quiet = false;
    let mut print = None;
    let mut help = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--delay" => {
                let raw = args.next().ok_or(CliError::MissingValue { flag: "--delay" })?;
                let ms = raw
                    .parse::<u64>()
                    .map_err(|_| CliError::InvalidDelay(raw.clone()))?;
                delay = Duration::from_millis(ms);
            }
            "-v" | "--verbose" => verbose = true,
            "-q" | "--quiet" => quiet = true,
            "-h" | "--help" => help = true,
            "--print" => {
                let demo = args.next().ok_or(CliError::MissingValue { flag: "--print" })?;
                // Everything after the demo name is its input
                print = Some(PrintRequest {
                    demo,
                    inputs: args.by_ref().collect(),
                });
            }
            _ => return Err(CliError::UnknownArgument(arg)),
        }
    }

    Ok(Options {
        delay,
        verbosity: Verbosity::from_flags(verbose, quiet),
        print,
        help,
    })
}

fn parse_anchor(raw: Option<&String>) -> Result<Anchor, EngineError> {
    match raw.map(String::as_str) {
        Some("head") => Ok(Anchor::Head),
        Some("tail") => Ok(Anchor::Tail),
        Some("index") => Ok(Anchor::Index),
        other => Err(EngineError::invalid_input(format!(
            "expected head, tail or index, got {:?}",
            other.unwrap_or("")
        ))),
    }
}

fn build_list_operation(inputs: &[String]) -> Result<ListOperation, EngineError> {
    let action = match inputs.first().map(String::as_str) {
        Some("insert") => Action::Insert,
        Some("remove") => Action::Remove,
        other => {
            return Err(EngineError::invalid_input(format!(
                "expected insert or remove, got {:?}",
                other.unwrap_or("")
            )))
        }
    };
    let anchor = parse_anchor(inputs.get(1))?;
    let mut rest = inputs[2.min(inputs.len())..].iter();

    let value = match action {
        Action::Insert => rest.next().map(|raw| input::parse_value(raw)).transpose()?,
        Action::Remove => None,
    };
    let index = match anchor {
        Anchor::Index => rest.next().map(|raw| input::parse_index(raw)).transpose()?,
        Anchor::Head | Anchor::Tail => None,
    };

    let mut list: LinkedList<ListItem> = INITIAL_LIST.iter().map(|&l| ListItem::new(l)).collect();
    ListOperation::new(&mut list, action, anchor, value.as_deref(), index)
}

/// Construct the generator for a print request
pub fn build_generator(request: &PrintRequest) -> Result<Box<dyn Generator>, CliError> {
    let inputs = &request.inputs;
    let generator: Box<dyn Generator> = match request.demo.as_str() {
        "string" => {
            let text = input::parse_string(&inputs.join(" "))?;
            Box::new(StringReversal::new(&text))
        }
        "fibonacci" => {
            let raw = inputs.first().map(String::as_str).unwrap_or("");
            Box::new(FibonacciSequence::new(input::parse_fibonacci_index(raw)?))
        }
        "bubble" | "selection" => {
            let algorithm = if request.demo == "bubble" {
                SortAlgorithm::Bubble
            } else {
                SortAlgorithm::Selection
            };
            let mut direction = Direction::Ascending;
            let mut numbers = Vec::new();
            for raw in inputs {
                match raw.as_str() {
                    "asc" => direction = Direction::Ascending,
                    "desc" => direction = Direction::Descending,
                    _ => numbers.extend(input::parse_numbers(raw)?),
                }
            }
            if numbers.is_empty() {
                numbers = input::random_array(&mut rand::thread_rng());
            }
            algorithm.build(elements_from_values(&numbers), direction)
        }
        "list" => Box::new(build_list_operation(inputs)?),
        other => return Err(CliError::UnknownDemo(other.to_string())),
    };
    Ok(generator)
}

/// Run a print request to completion, writing one frame per line
pub fn run_print<W: Write>(
    request: &PrintRequest,
    out: &mut W,
) -> Result<usize, Box<dyn std::error::Error>> {
    let generator = build_generator(request)?;
    writeln!(out, "{:>3}: {}", 0, generator.initial_frame())?;

    let mut animations = Animations::new();
    let id = animations.start(generator);
    let mut steps = 0;
    loop {
        let step = animations.advance(id)?;
        steps += 1;
        writeln!(out, "{:>3}: {}", steps, step.frame)?;
        if step.done {
            break;
        }
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn print(demo: &str, inputs: &[&str]) -> (usize, Vec<String>) {
        let request = PrintRequest {
            demo: demo.to_string(),
            inputs: args(inputs),
        };
        let mut out = Vec::new();
        let steps = run_print(&request, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        (steps, text.lines().map(str::to_string).collect())
    }

    #[test]
    fn test_defaults() {
        let options = parse_args(Vec::new()).unwrap();
        assert_eq!(options.delay, DELAY);
        assert_eq!(options.verbosity, Verbosity::Normal);
        assert!(options.print.is_none());
        assert!(!options.help);
    }

    #[test]
    fn test_flags() {
        let options = parse_args(args(&["--delay", "120", "-q"])).unwrap();
        assert_eq!(options.delay, Duration::from_millis(120));
        assert_eq!(options.verbosity, Verbosity::Quiet);
    }

    #[test]
    fn test_print_takes_remaining_args() {
        let options = parse_args(args(&["-v", "--print", "bubble", "desc", "3", "-q"])).unwrap();
        let request = options.print.unwrap();
        assert_eq!(request.demo, "bubble");
        assert_eq!(request.inputs, args(&["desc", "3", "-q"]));
        assert_eq!(options.verbosity, Verbosity::Verbose);
    }

    #[test]
    fn test_bad_arguments() {
        assert_eq!(
            parse_args(args(&["--delay"])),
            Err(CliError::MissingValue { flag: "--delay" })
        );
        assert_eq!(
            parse_args(args(&["--delay", "soon"])),
            Err(CliError::InvalidDelay("soon".to_string()))
        );
        assert_eq!(
            parse_args(args(&["--fast"])),
            Err(CliError::UnknownArgument("--fast".to_string()))
        );
    }

    #[test]
    fn test_print_string() {
        let (steps, lines) = print("string", &["frontend"]);
        assert_eq!(steps, 4);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "  0: <f> r o n t e n <d>");
        assert_eq!(lines[4], "  4: [d] [n] [e] [t] [n] [o] [r] [f]");
    }

    #[test]
    fn test_print_bubble() {
        let (steps, lines) = print("bubble", &["3,1,2"]);
        assert_eq!(steps, 4);
        assert_eq!(lines[1], "  1: <1> <3> 2");
        assert_eq!(lines[4], "  4: [1] [2] [3]");
    }

    #[test]
    fn test_print_list_insert_at() {
        let (_, lines) = print("list", &["insert", "index", "x", "1"]);
        let last = lines.last().unwrap();
        assert!(last.ends_with("(0)^head -> ([x]) -> (1) -> (2)_tail"), "{}", last);
    }

    #[test]
    fn test_build_generator_errors() {
        let request = PrintRequest {
            demo: "heap".to_string(),
            inputs: Vec::new(),
        };
        assert!(matches!(build_generator(&request), Err(CliError::UnknownDemo(_))));

        let request = PrintRequest {
            demo: "fibonacci".to_string(),
            inputs: args(&["20"]),
        };
        assert!(matches!(build_generator(&request), Err(CliError::Engine(_))));

        let request = PrintRequest {
            demo: "list".to_string(),
            inputs: args(&["remove", "index", "7"]),
        };
        assert!(matches!(
            build_generator(&request),
            Err(CliError::Engine(EngineError::IndexOutOfRange { index: 7, len: 3 }))
        ));
    }
}
