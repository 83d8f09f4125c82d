use once_cell::sync::Lazy;
use regex::Regex;

use crate::Error;

static ENUM_TYPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:enum|set)\((.*)\)$").expect("enum type regex is valid")
});

/// The literal values of one `enum` or `set` column, in declaration order.
///
/// This is a list, not a set: duplicates are kept and order is preserved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumSet {
    pub(crate) column_name: String,
    pub(crate) values: Vec<String>,
}

impl EnumSet {
    /// Parses the raw `COLUMN_TYPE` string of an `enum`/`set` column, e.g.
    /// `enum('a','b','c')`, into its literal values.
    ///
    /// Values are split on the exact `','` delimiter sequence, then trimmed
    /// of spaces and single quotes; empty values are dropped. A literal value
    /// containing `','` verbatim is split incorrectly. This limitation is
    /// inherited and kept so regenerated classes stay stable.
    pub fn parse(column_name: &str, col_type: &str) -> Result<Self, Error> {
        let captures = ENUM_TYPE_REGEX.captures(col_type).ok_or_else(|| {
            Error::ParseError(format!("Unable to parse column type '{}'", col_type))
        })?;

        let values = captures[1]
            .split("','")
            .map(|value| value.trim_matches(|c| c == ' ' || c == '\'').to_owned())
            .filter(|value| !value.is_empty())
            .collect();

        Ok(Self {
            column_name: column_name.to_owned(),
            values,
        })
    }

    pub fn get_column_name(&self) -> &str {
        &self.column_name
    }

    pub fn get_values(&self) -> &[String] {
        &self.values
    }
}
