use serde::Serialize;

use crate::models::{Draft, NewListing};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormState {
    #[default]
    Closed,
    Open,
}

impl FormState {
    pub fn toggled(self) -> Self {
        match self {
            FormState::Closed => FormState::Open,
            FormState::Open => FormState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == FormState::Open
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid draft: {}", describe(.fields))]
pub struct DraftError {
    pub fields: Vec<FieldError>,
}

fn describe(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{} {}", f.field, f.message))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("the listing form is not open")]
    Closed,
    #[error(transparent)]
    Invalid(#[from] DraftError),
}

const REQUIRED: &str = "is required";
const NOT_A_COUNT: &str = "must be a non-negative whole number";

impl Draft {
    /// Checks required fields and parses the numeric ones. Every failing
    /// field is reported, not just the first.
    pub fn validate(&self) -> Result<NewListing, DraftError> {
        let mut fields = Vec::new();

        let mut required = |field: &'static str, value: &str| {
            let value = value.trim();
            if value.is_empty() {
                fields.push(FieldError { field, message: REQUIRED });
            }
            value.to_string()
        };
        let name = required("name", &self.name);
        let category = required("category", &self.category);
        let description = required("description", &self.description);
        let contact = required("contact", &self.contact);

        let price = match self.price.trim() {
            "" => {
                fields.push(FieldError { field: "price", message: REQUIRED });
                None
            }
            raw => parse_count("price", raw, &mut fields),
        };
        let members = match self.members.trim() {
            "" => Some(0),
            raw => parse_count("members", raw, &mut fields),
        };

        match (price, members) {
            (Some(price), Some(members)) if fields.is_empty() => Ok(NewListing {
                name,
                description,
                members,
                category,
                price,
                kind: self.kind,
                contact,
            }),
            _ => Err(DraftError { fields }),
        }
    }
}

fn parse_count(field: &'static str, raw: &str, fields: &mut Vec<FieldError>) -> Option<u64> {
    match raw.parse::<u64>() {
        Ok(value) => Some(value),
        Err(_) => {
            fields.push(FieldError { field, message: NOT_A_COUNT });
            None
        }
    }
}
