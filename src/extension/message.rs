//! User-facing messages: an i18n id with its arguments and the default English text.

use crate::database::range::RangeError;
use crate::error::RowsToHeaderError;
use crate::extension::ParameterError;
use crate::header::UniquifyWarning;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// A localizable message for the host to render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// i18n message id
    pub id: String,
    /// Named arguments of the message template
    pub arguments: BTreeMap<String, String>,
    /// Default English rendering
    pub text: String,
}

impl Message {
    pub fn new(id: &str, arguments: &[(&str, String)], text: String) -> Self {
        Message {
            id: id.to_owned(),
            arguments: arguments
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_owned()))
                .collect(),
            text,
        }
    }
}

impl From<&RowsToHeaderError> for Message {
    fn from(error: &RowsToHeaderError) -> Self {
        match error {
            RowsToHeaderError::RangeError(RangeError::FormatError(value)) => Message::new(
                "badParam.rows.invalidRange",
                &[("value", value.to_owned())],
                error.to_string(),
            ),
            RowsToHeaderError::ParameterError(ParameterError::InvalidParameter { name, expected }) => {
                Message::new(
                    "badParam.invalidType",
                    &[("name", name.to_owned()), ("expected", expected.to_string())],
                    error.to_string(),
                )
            }
        }
    }
}

impl From<&UniquifyWarning> for Message {
    fn from(warning: &UniquifyWarning) -> Self {
        match warning {
            UniquifyWarning::PlaceholderNames { count, first_renamed } => {
                let text = if *count == 1 {
                    format!("Renamed 1 column with an empty header to \"{first_renamed}\"")
                } else {
                    format!("Renamed {count} columns with empty headers (for example, \"{first_renamed}\")")
                };
                Message::new(
                    "util.colnames.warnings.default",
                    &[("n_columns", count.to_string()), ("column_name", first_renamed.to_owned())],
                    text,
                )
            }
            UniquifyWarning::NumberedNames {
                count,
                first_original,
                first_renamed,
            } => {
                let text = if *count == 1 {
                    format!("Renamed 1 duplicate column \"{first_original}\" to \"{first_renamed}\"")
                } else {
                    format!(
                        "Renamed {count} duplicate columns (for example, \"{first_original}\" to \"{first_renamed}\")"
                    )
                };
                Message::new(
                    "util.colnames.warnings.numbered",
                    &[
                        ("n_columns", count.to_string()),
                        ("original_name", first_original.to_owned()),
                        ("column_name", first_renamed.to_owned()),
                    ],
                    text,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_from_range_error() {
        let error = RowsToHeaderError::from(RangeError::FormatError("0-1".to_owned()));
        let message = Message::from(&error);
        assert_eq!(message.id, "badParam.rows.invalidRange");
        assert_eq!(message.arguments.get("value").map(String::as_str), Some("0-1"));
        assert_eq!(message.text, r#"Rows must look like "1-2", "5" or "1-2, 5"; got "0-1""#);
    }

    #[test]
    fn message_from_parameter_error() {
        let error = RowsToHeaderError::from(ParameterError::InvalidParameter {
            name: "deleteabove".to_owned(),
            expected: "boolean",
        });
        let message = Message::from(&error);
        assert_eq!(message.id, "badParam.invalidType");
        assert_eq!(message.text, "Parameter 'deleteabove' must be a boolean");
    }

    #[test]
    fn message_from_warnings() {
        let message = Message::from(&UniquifyWarning::PlaceholderNames {
            count: 2,
            first_renamed: "Column 3".to_owned(),
        });
        assert_eq!(message.id, "util.colnames.warnings.default");
        assert_eq!(message.arguments.get("n_columns").map(String::as_str), Some("2"));
        assert_eq!(
            message.text,
            r#"Renamed 2 columns with empty headers (for example, "Column 3")"#
        );

        let message = Message::from(&UniquifyWarning::NumberedNames {
            count: 1,
            first_original: "A".to_owned(),
            first_renamed: "A_1".to_owned(),
        });
        assert_eq!(message.id, "util.colnames.warnings.numbered");
        assert_eq!(message.text, r#"Renamed 1 duplicate column "A" to "A_1""#);
        assert_eq!(message.arguments.get("original_name").map(String::as_str), Some("A"));
        assert_eq!(message.arguments.get("column_name").map(String::as_str), Some("A_1"));

        let message = Message::from(&UniquifyWarning::PlaceholderNames {
            count: 1,
            first_renamed: "Column 2".to_owned(),
        });
        assert_eq!(message.text, r#"Renamed 1 column with an empty header to "Column 2""#);
    }
}
