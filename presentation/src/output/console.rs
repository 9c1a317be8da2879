//! Console output formatter for risk reports

use crate::output::report::RiskReport;
use colored::Colorize;
use risk_domain::{FeatureSchema, FieldKind, RawInput};

/// Formats risk reports and form listings for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Headline plus the advice list
    pub fn format_full(report: &RiskReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::headline(report));
        output.push_str("\n\n");

        let title = if report.is_high() {
            "Advice:"
        } else {
            "Keep it up:"
        };
        output.push_str(&format!("{}\n", title.cyan().bold()));
        for point in &report.advice {
            output.push_str(&format!("  * {}\n", point));
        }

        output
    }

    /// Headline only
    pub fn format_brief(report: &RiskReport) -> String {
        format!("{}\n", Self::headline(report))
    }

    /// Format as JSON
    pub fn format_json(report: &RiskReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Every field of the form with its choices or range and default
    pub fn format_fields(schema: &FeatureSchema) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Form: {}", schema.name)));
        output.push('\n');

        for field in &schema.fields {
            output.push_str(&format!("\n{}", field.name.yellow().bold()));
            if !field.prompt.is_empty() {
                output.push_str(&format!("  {}", field.prompt.dimmed()));
            }
            output.push('\n');

            let values = match &field.kind {
                FieldKind::Ordinal { .. } | FieldKind::OneHot { .. } => {
                    field.choice_labels().join(" | ")
                }
                FieldKind::Flag => "yes | no".to_string(),
                FieldKind::Count { min, max, .. } => format!("{}..={}", min, max),
            };
            output.push_str(&format!("  {} {}\n", "values: ".cyan(), values));
            output.push_str(&format!(
                "  {} {}\n",
                "default:".cyan(),
                field.default_value()
            ));
        }

        output
    }

    /// Current answers, in form order
    pub fn format_answers(schema: &FeatureSchema, input: &RawInput) -> String {
        let width = schema
            .fields
            .iter()
            .map(|f| f.name.len())
            .max()
            .unwrap_or(0);

        schema
            .fields
            .iter()
            .map(|field| {
                let value = input
                    .get(&field.name)
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "-".to_string());
                format!("  {:width$}  {}\n", field.name, value, width = width)
            })
            .collect()
    }

    fn headline(report: &RiskReport) -> String {
        if report.is_high() {
            report.headline.red().bold().to_string()
        } else {
            report.headline.green().bold().to_string()
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}
