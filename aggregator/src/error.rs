use std::fmt;

/// Represents errors that can occur while aggregating route records.
///
/// Both variants name the zero-based record index and the offending column,
/// so a bad row in a big routes file can actually be found.
#[derive(Clone, Debug, PartialEq)]
pub enum AggregateError {
    MissingField {
        record: usize,
        field: &'static str,
    },
    InvalidCoordinate {
        record: usize,
        field: &'static str,
        value: String,
    },
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateError::MissingField { record, field } => {
                write!(f, "record {} is missing the required field {}", record, field)
            }
            AggregateError::InvalidCoordinate {
                record,
                field,
                value,
            } => {
                write!(
                    f,
                    "record {} has a non-numeric value '{}' in field {}",
                    record, value, field
                )
            }
        }
    }
}

impl std::error::Error for AggregateError {}

/// Extracts a required column from a record, by value reference.
pub(crate) fn required<'a>(
    value: &'a Option<String>,
    record: usize,
    field: &'static str,
) -> Result<&'a str, AggregateError> {
    value
        .as_deref()
        .ok_or(AggregateError::MissingField { record, field })
}
