use std::fmt;

use serde::{Deserialize, Serialize};

/// A customer as stored by the backend.
///
/// The customer form on the Customer Manager page is a `Customer` value as
/// well, so copying a row into the form (`fill`) is a plain clone and the form
/// can be sent as-is for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Customer {
    /// Primary key. Never changes after creation and addresses update/delete.
    pub customer_id: String,
    pub customer_name: String,
    pub age: u32,
    pub gender: Gender,
}

impl Customer {
    /// One-line rendering used by the customer list: `C1 — Ann / 30 / female`.
    pub fn row_label(&self) -> String {
        format!(
            "{} — {} / {} / {}",
            self.customer_id, self.customer_name, self.age, self.gender
        )
    }
}

/// Gender as offered by the form. The backend stores a free string, so any
/// other value it returns is carried through verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    #[serde(untagged)]
    Other(String),
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other(value) => value,
        }
    }

    /// Maps a `<select>` value back to a gender.
    pub fn from_select(value: &str) -> Gender {
        match value {
            "male" => Gender::Male,
            "female" => Gender::Female,
            other => Gender::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coerces the text of the age input into a number.
///
/// Empty or unparsable input becomes 0, negative numbers clamp to 0 and
/// fractional values are truncated.
pub fn coerce_age(input: &str) -> u32 {
    let trimmed = input.trim();
    if let Ok(age) = trimmed.parse::<u32>() {
        return age;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value.min(u32::MAX as f64) as u32,
        _ => 0,
    }
}
