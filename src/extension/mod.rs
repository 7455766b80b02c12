//! # Host Boundary
//!
//! Reads the host's parameter object, runs the header promotion and converts
//! the outcome into a table, a table with warnings, or an error message.
use crate::database::range::parse_ranges;
use crate::database::range::RowSelector;
use crate::database::table::Table;
use crate::error::RowsToHeaderError;
use crate::header::promote;
use crate::header::Promoted;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod message;

pub use message::Message;

/// The parameter object supplied by the host.
pub type Parameters = serde_json::Map<String, Value>;

/// Errors raised while reading named parameters.
#[derive(Error, Debug, PartialEq)]
pub enum ParameterError {
    /// A parameter is present with the wrong JSON type
    #[error("Parameter '{name}' must be a {expected}")]
    InvalidParameter { name: String, expected: &'static str },
}

/// Trait for reading one named parameter out of the host's parameter object.
///
/// # Type Parameters
///
/// * `T` - The type of the parameter value
pub trait NamedParam<T> {
    /// Returns the parameter name as used by the host
    fn name() -> &'static str;

    /// Returns the expected JSON type, for error messages
    fn kind() -> &'static str;

    /// Returns the value used when the parameter is absent
    fn default() -> T;

    /// Converts a JSON value, `None` if it has the wrong type
    fn convert(value: &Value) -> Option<T>;

    /// Extracts the parameter value. Absent and `null` both read as `None`.
    fn read(parameters: &Parameters) -> Result<Option<T>, ParameterError> {
        match parameters.get(Self::name()) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Self::convert(value)
                .map(Some)
                .ok_or_else(|| ParameterError::InvalidParameter {
                    name: Self::name().to_owned(),
                    expected: Self::kind(),
                }),
        }
    }

    /// Extracts the parameter value, falling back to the default.
    fn read_or_default(parameters: &Parameters) -> Result<T, ParameterError> {
        Ok(Self::read(parameters)?.unwrap_or_else(Self::default))
    }
}

/// Header rows parameter handler
struct RowsParam;

/// Delete-above parameter handler
struct DeleteAboveParam;

impl NamedParam<String> for RowsParam {
    fn name() -> &'static str {
        "rows"
    }

    fn kind() -> &'static str {
        "string"
    }

    fn default() -> String {
        String::new()
    }

    fn convert(value: &Value) -> Option<String> {
        value.as_str().map(str::to_owned)
    }
}

impl NamedParam<bool> for DeleteAboveParam {
    fn name() -> &'static str {
        "deleteabove"
    }

    fn kind() -> &'static str {
        "boolean"
    }

    fn default() -> bool {
        false
    }

    fn convert(value: &Value) -> Option<bool> {
        value.as_bool()
    }
}

/// Parsed parameters of a rows-to-header step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowsToHeaderParameters {
    /// Rows to promote
    pub rows: RowSelector,
    /// Also remove every row above the last header row
    pub delete_above: bool,
}

impl TryFrom<&Parameters> for RowsToHeaderParameters {
    type Error = RowsToHeaderError;

    fn try_from(parameters: &Parameters) -> Result<Self, Self::Error> {
        Ok(RowsToHeaderParameters {
            rows: parse_ranges(&RowsParam::read_or_default(parameters)?)?,
            delete_above: DeleteAboveParam::read_or_default(parameters)?,
        })
    }
}

/// What the host receives back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RenderResult {
    Table(Table),
    TableWithWarnings(Table, Vec<Message>),
    Error(Message),
}

/// Runs one rows-to-header step for the host.
pub fn render(table: Table, parameters: &Parameters) -> RenderResult {
    let parameters = match RowsToHeaderParameters::try_from(parameters) {
        Ok(parameters) => parameters,
        Err(error) => {
            debug!(%error, "rejected rows-to-header parameters");
            return RenderResult::Error(Message::from(&error));
        }
    };
    let Promoted { table, warnings } = promote(table, &parameters.rows, parameters.delete_above);
    if warnings.is_empty() {
        RenderResult::Table(table)
    } else {
        RenderResult::TableWithWarnings(table, warnings.iter().map(Message::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::range::RowRange;
    use serde_json::json;

    fn parameters(value: Value) -> Parameters {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn parameters_default() {
        let parsed = RowsToHeaderParameters::try_from(&Parameters::new()).unwrap();
        assert_eq!(parsed, RowsToHeaderParameters::default());
    }

    #[test]
    fn parameters_null_reads_as_absent() {
        let parsed =
            RowsToHeaderParameters::try_from(&parameters(json!({"rows": null, "deleteabove": null})))
                .unwrap();
        assert_eq!(parsed, RowsToHeaderParameters::default());
    }

    #[test]
    fn parameters_parsed() {
        let parsed =
            RowsToHeaderParameters::try_from(&parameters(json!({"rows": "1-2, 5", "deleteabove": true})))
                .unwrap();
        assert_eq!(
            parsed.rows,
            RowSelector::new(vec![RowRange::new(0, 1), RowRange::new(4, 4)])
        );
        assert!(parsed.delete_above);
    }

    #[test]
    fn parameters_wrong_type() {
        let error = RowsToHeaderParameters::try_from(&parameters(json!({"deleteabove": "yes"})))
            .unwrap_err();
        assert_eq!(
            error,
            RowsToHeaderError::ParameterError(ParameterError::InvalidParameter {
                name: "deleteabove".to_owned(),
                expected: "boolean",
            })
        );

        let error = RowsToHeaderParameters::try_from(&parameters(json!({"rows": 1}))).unwrap_err();
        assert_eq!(error.to_string(), "Parameter 'rows' must be a string");
    }

    #[test]
    fn render_invalid_rows() {
        let result = render(Table::default(), &parameters(json!({"rows": "hi"})));
        match result {
            RenderResult::Error(message) => {
                assert_eq!(message.id, "badParam.rows.invalidRange");
                assert_eq!(message.arguments.get("value").map(String::as_str), Some("hi"));
            }
            other => panic!("expected an error, got {:?}", other),
        }
    }
}
