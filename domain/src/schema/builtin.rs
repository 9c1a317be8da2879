//! Built-in schemas for the two form variants

use super::{FeatureSchema, FieldSpec};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const AGE_BRACKETS: [&str; 10] = [
    "[0-10)", "[10-20)", "[20-30)", "[30-40)", "[40-50)", "[50-60)", "[60-70)", "[70-80)",
    "[80-90)", "[90-100)",
];

const A1C_RESULTS: [&str; 4] = ["None", "Norm", ">7", ">8"];

const GLUCOSE_SERUM: [&str; 4] = ["None", "Norm", ">200", ">300"];

const RACES: [&str; 5] = ["Caucasian", "AfricanAmerican", "Hispanic", "Asian", "Other"];

const AGE_PROMPT: &str = "What is your age range?";
const GENDER_PROMPT: &str = "What is your gender?";
const A1C_PROMPT: &str = "A1C test result?";
const GLUCOSE_PROMPT: &str = "Max Glucose Serum level?";
const MEDICATIONS_PROMPT: &str = "How many medications are you currently on?";

/// Which built-in form variant to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVariant {
    /// Ordinal codes, eight columns, classifier trained without column names
    #[default]
    Medication,
    /// One-hot indicators aligned to the classifier's recorded column names
    Extended,
}

impl SchemaVariant {
    pub fn all() -> [SchemaVariant; 2] {
        [SchemaVariant::Medication, SchemaVariant::Extended]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaVariant::Medication => "medication",
            SchemaVariant::Extended => "extended",
        }
    }

    pub fn schema(&self) -> FeatureSchema {
        match self {
            SchemaVariant::Medication => medication(),
            SchemaVariant::Extended => extended(),
        }
    }
}

impl std::fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SchemaVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "medication" => Ok(SchemaVariant::Medication),
            "extended" => Ok(SchemaVariant::Extended),
            other => Err(format!(
                "unknown schema '{}' (expected medication or extended)",
                other
            )),
        }
    }
}

fn coded(labels: &[&'static str]) -> Vec<(&'static str, f64)> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| (*label, i as f64))
        .collect()
}

/// Eight positional columns: age code, male flag, four counts, A1C and glucose codes
fn medication() -> FeatureSchema {
    FeatureSchema::new(
        SchemaVariant::Medication.as_str(),
        vec![
            FieldSpec::ordinal("age", AGE_PROMPT, &coded(&AGE_BRACKETS)),
            FieldSpec::ordinal("gender", GENDER_PROMPT, &[("Male", 1.0), ("Female", 0.0)]),
            FieldSpec::count(
                "time_in_hospital",
                "Days spent in hospital (last visit)",
                1,
                20,
                5,
            ),
            FieldSpec::count("num_medications", MEDICATIONS_PROMPT, 0, 50, 10),
            FieldSpec::count(
                "number_inpatient",
                "Number of inpatient visits in past year",
                0,
                10,
                0,
            ),
            FieldSpec::count("number_outpatient", "Number of outpatient visits", 0, 10, 0),
            FieldSpec::ordinal("A1Cresult", A1C_PROMPT, &coded(&A1C_RESULTS)),
            FieldSpec::ordinal("max_glu_serum", GLUCOSE_PROMPT, &coded(&GLUCOSE_SERUM)),
        ],
    )
}

/// One-hot demographics and lab results plus two counts
fn extended() -> FeatureSchema {
    FeatureSchema::new(
        SchemaVariant::Extended.as_str(),
        vec![
            FieldSpec::one_hot("age", AGE_PROMPT, &AGE_BRACKETS, None),
            FieldSpec::one_hot("gender", GENDER_PROMPT, &["Male", "Female"], None),
            FieldSpec::one_hot(
                "race",
                "Which background best describes you?",
                &RACES,
                None,
            ),
            FieldSpec::flag("pregnant", "Are you currently pregnant?"),
            FieldSpec::one_hot("A1Cresult", A1C_PROMPT, &A1C_RESULTS, Some("None")),
            FieldSpec::one_hot("max_glu_serum", GLUCOSE_PROMPT, &GLUCOSE_SERUM, Some("None")),
            FieldSpec::count("num_medications", MEDICATIONS_PROMPT, 0, 50, 10),
            FieldSpec::count(
                "time_in_hospital",
                "Days spent in hospital (last visit)",
                0,
                20,
                3,
            ),
        ],
    )
}
