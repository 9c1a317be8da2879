//! Interactive form
//!
//! A line-based stand-in for the web form: answers are edited one field
//! at a time and scored on demand.

use crate::form::answers::{parse_answer, split_assignment};
use crate::output::console::ConsoleFormatter;
use crate::output::report::RiskReport;
use colored::Colorize;
use risk_application::AssessRiskUseCase;
use risk_domain::{FeatureSchema, RawInput};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use tracing::{debug, warn};

/// What the loop should do after a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Print the text and keep reading
    Continue(String),
    Quit,
}

/// Interactive form REPL
pub struct FormRepl {
    use_case: AssessRiskUseCase,
    input: RawInput,
    history_path: Option<PathBuf>,
    show_banner: bool,
}

impl FormRepl {
    /// Create a new FormRepl with every field at its default
    pub fn new(use_case: AssessRiskUseCase) -> Self {
        let input = use_case.context().schema().default_input();
        Self {
            use_case,
            input,
            history_path: dirs::data_dir().map(|p| p.join("diabetes-risk").join("history.txt")),
            show_banner: true,
        }
    }

    /// Override where line history is kept
    pub fn with_history_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.history_path = path;
        }
        self
    }

    /// Set whether to print the welcome banner
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    pub fn input(&self) -> &RawInput {
        &self.input
    }

    fn schema(&self) -> &FeatureSchema {
        self.use_case.context().schema()
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(path) = &self.history_path
            && let Some(parent) = path.parent()
        {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Some(path) = &self.history_path {
            let _ = rl.load_history(path);
        }

        if self.show_banner {
            print!("{}", self.welcome());
        }

        loop {
            match rl.readline("form> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    match self.handle_line(line) {
                        FormAction::Continue(text) => print!("{}", text),
                        FormAction::Quit => {
                            println!("Bye!");
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(path) = &self.history_path
            && let Err(e) = rl.save_history(path)
        {
            debug!("Could not save history to {}: {}", path.display(), e);
        }

        Ok(())
    }

    /// Apply one line of input
    pub fn handle_line(&mut self, line: &str) -> FormAction {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_ascii_lowercase().as_str() {
            "quit" | "exit" | "q" => FormAction::Quit,
            "help" | "h" | "?" => FormAction::Continue(Self::help()),
            "fields" => FormAction::Continue(ConsoleFormatter::format_fields(self.schema())),
            "show" => FormAction::Continue(ConsoleFormatter::format_answers(
                self.schema(),
                &self.input,
            )),
            "reset" => {
                self.input = self.schema().default_input();
                FormAction::Continue("All answers reset to their defaults.\n".to_string())
            }
            "predict" => FormAction::Continue(self.predict()),
            "set" => FormAction::Continue(self.set(rest)),
            _ if line.contains('=') => FormAction::Continue(self.set(line)),
            _ => FormAction::Continue(format!(
                "Unknown command: {}\nType help for available commands\n",
                command
            )),
        }
    }

    fn set(&mut self, args: &str) -> String {
        let parsed = if args.contains('=') {
            split_assignment(args)
        } else {
            args.split_once(char::is_whitespace)
                .map(|(field, value)| (field, value.trim()))
                .ok_or_else(|| crate::form::AnswerError::MissingEquals(args.to_string()))
        };

        match parsed.and_then(|(field, value)| parse_answer(self.schema(), field, value)) {
            Ok((name, value)) => {
                let text = format!("{} = {}\n", name, value);
                self.input.set(name, value);
                text
            }
            Err(e) => format!("{} {}\n", "Rejected:".red(), e),
        }
    }

    fn predict(&self) -> String {
        match self.use_case.execute(&self.input) {
            Ok(result) => {
                format!(
                    "\n{}\n",
                    ConsoleFormatter::format_full(&RiskReport::from_result(&result))
                )
            }
            Err(e) => {
                warn!("Prediction failed: {}", e);
                format!("{} {}\n", "Error:".red(), e)
            }
        }
    }

    fn welcome(&self) -> String {
        let mut text = String::new();
        text.push('\n');
        text.push_str("╭─────────────────────────────────────────────╮\n");
        text.push_str("│        Diabetes Medication Risk Form        │\n");
        text.push_str("╰─────────────────────────────────────────────╯\n");
        text.push('\n');
        text.push_str(
            "Answer the questions below to check your risk of needing diabetes medication.\n",
        );
        text.push_str(&format!("Form: {}\n", self.schema().name));
        text.push_str(&Self::help());
        text
    }

    fn help() -> String {
        [
            "",
            "Commands:",
            "  set <field> <value>  - Answer a question (or <field>=<value>)",
            "  show                 - Show current answers",
            "  predict              - Check your risk",
            "  reset                - Restore default answers",
            "  fields               - List questions and allowed values",
            "  help, h, ?           - Show this help",
            "  quit, exit, q        - Exit the form",
            "",
        ]
        .join("\n")
            + "\n"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_application::InferenceContext;
    use risk_domain::{
        ClassifierArtifact, DriftPolicy, FieldValue, ScalerArtifact, SchemaVariant,
    };
    use std::sync::Arc;

    fn repl() -> FormRepl {
        // Only the A1C code carries weight.
        let mut coef = vec![0.0; 8];
        coef[6] = 2.0;
        let ctx = InferenceContext::from_parts(
            SchemaVariant::Medication.schema(),
            ClassifierArtifact::logistic(coef, -1.0),
            ScalerArtifact::standard(vec![0.0; 8], vec![1.0; 8]),
            DriftPolicy::Drop,
        )
        .unwrap();
        FormRepl::new(AssessRiskUseCase::new(Arc::new(ctx))).with_history_path(None)
    }

    fn text(action: FormAction) -> String {
        match action {
            FormAction::Continue(text) => text,
            FormAction::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn test_set_both_syntaxes() {
        let mut repl = repl();
        text(repl.handle_line("set A1Cresult >8"));
        text(repl.handle_line("num_medications=30"));

        assert_eq!(repl.input().get("A1Cresult"), Some(&FieldValue::choice(">8")));
        assert_eq!(repl.input().get("num_medications"), Some(&FieldValue::Count(30)));
    }

    #[test]
    fn test_rejected_value_keeps_previous_answer() {
        let mut repl = repl();
        let out = text(repl.handle_line("set age [100-110)"));

        assert!(out.contains("Rejected:"));
        assert_eq!(repl.input().get("age"), Some(&FieldValue::choice("[0-10)")));
    }

    #[test]
    fn test_predict_uses_current_answers() {
        let mut repl = repl();
        let low = text(repl.handle_line("predict"));
        assert!(low.contains("low risk"));

        text(repl.handle_line("set A1Cresult >8"));
        let high = text(repl.handle_line("predict"));
        assert!(high.contains("High risk of requiring diabetes medication"));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut repl = repl();
        text(repl.handle_line("set gender Female"));
        text(repl.handle_line("reset"));
        assert_eq!(repl.input(), &SchemaVariant::Medication.schema().default_input());
    }

    #[test]
    fn test_quit_and_unknown() {
        let mut repl = repl();
        assert_eq!(repl.handle_line("exit"), FormAction::Quit);
        assert!(text(repl.handle_line("submit")).starts_with("Unknown command: submit"));
    }
}
