use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;

/// A single typed value of a table column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// Missing value
    #[default]
    Null,
    /// Boolean values (true/false)
    Boolean(bool),
    /// 64-bit signed integers
    BigInt(i64),
    /// Double-precision floating point numbers, NaN counts as missing
    Double(f64),
    /// Variable-length strings, also used for categorical values
    Varchar(String),
    /// Date and time
    Timestamp(NaiveDateTime),
    /// Date without time component
    Date(NaiveDate),
    /// Time without date component
    Time(NaiveTime),
}

impl Cell {
    /// Returns true for `Null` and for a NaN double.
    pub fn is_missing(&self) -> bool {
        match self {
            Cell::Null => true,
            Cell::Double(value) => value.is_nan(),
            _ => false,
        }
    }

    /// Returns the short type name used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Cell::Null => "null",
            Cell::Boolean(_) => "boolean",
            Cell::BigInt(_) => "bigint",
            Cell::Double(_) => "double",
            Cell::Varchar(_) => "varchar",
            Cell::Timestamp(_) => "timestamp",
            Cell::Date(_) => "date",
            Cell::Time(_) => "time",
        }
    }

    /// Returns the text of the cell, `None` when it is missing.
    pub fn text(&self) -> Option<String> {
        if self.is_missing() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Boolean(true) => f.write_str("True"),
            Cell::Boolean(false) => f.write_str("False"),
            Cell::BigInt(value) => write!(f, "{}", value),
            Cell::Double(value) if value.is_nan() => Ok(()),
            Cell::Double(value) if value.is_finite() && value.fract() == 0.0 => write!(f, "{:.1}", value),
            Cell::Double(value) => write!(f, "{}", value),
            Cell::Varchar(value) => f.write_str(value),
            Cell::Timestamp(value) => write!(f, "{}", value.format("%Y-%m-%d %H:%M:%S%.f")),
            Cell::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
            Cell::Time(value) => write!(f, "{}", value.format("%H:%M:%S%.f")),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Varchar(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Varchar(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::BigInt(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Double(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Boolean(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Cell::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_missing() {
        assert!(Cell::Null.is_missing());
        assert!(Cell::Double(f64::NAN).is_missing());
        assert!(!Cell::Double(0.0).is_missing());
        assert!(!Cell::Varchar(String::new()).is_missing());
    }

    #[test]
    fn cell_text() {
        assert_eq!(Cell::Null.text(), None);
        assert_eq!(Cell::Double(f64::NAN).text(), None);
        assert_eq!(Cell::Boolean(true).text().as_deref(), Some("True"));
        assert_eq!(Cell::Boolean(false).text().as_deref(), Some("False"));
        assert_eq!(Cell::BigInt(-42).text().as_deref(), Some("-42"));
        assert_eq!(Cell::Double(1.5).text().as_deref(), Some("1.5"));
        assert_eq!(Cell::Double(2.0).text().as_deref(), Some("2.0"));
        assert_eq!(Cell::Double(-3.0).text().as_deref(), Some("-3.0"));
        assert_eq!(Cell::Double(f64::INFINITY).text().as_deref(), Some("inf"));
        assert_eq!(Cell::from("foo").text().as_deref(), Some("foo"));
    }

    #[test]
    fn cell_text_datetime() {
        let date = NaiveDate::from_ymd_opt(2019, 1, 2).unwrap();
        let time = NaiveTime::from_hms_opt(3, 4, 5).unwrap();
        assert_eq!(Cell::Date(date).to_string(), "2019-01-02");
        assert_eq!(Cell::Time(time).to_string(), "03:04:05");
        assert_eq!(
            Cell::Timestamp(date.and_time(time)).to_string(),
            "2019-01-02 03:04:05"
        );
    }

    #[test]
    fn cell_from_option() {
        assert_eq!(Cell::from(None::<&str>), Cell::Null);
        assert_eq!(Cell::from(Some(3i64)), Cell::BigInt(3));
    }
}
