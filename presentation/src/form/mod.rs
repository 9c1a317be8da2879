//! Form input: command-line answers and the interactive form

mod answers;
mod repl;

pub use answers::{AnswerError, collect_answers, parse_answer, split_assignment};
pub use repl::{FormAction, FormRepl};
