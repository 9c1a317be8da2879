//! Output format value object

use serde::{Deserialize, Serialize};

/// How a risk report is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Headline plus advice bullets (default)
    #[default]
    Full,
    /// Headline only
    Brief,
    /// JSON report
    Json,
}
