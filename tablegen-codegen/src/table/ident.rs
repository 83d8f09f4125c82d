//! Formatting rules turning raw table metadata into generated-source
//! identifiers. These mirror the behaviour of the legacy generator exactly,
//! byte for byte, so regenerated classes stay diffable against old output.

/// Formats a table name into a class name: `_`-separated segments are lower
/// cased, first-letter capitalized and concatenated. Empty segments collapse.
///
/// `user_account_status` becomes `UserAccountStatus`.
pub fn class_name_from_table(table_name: &str) -> String {
    table_name
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(ucfirst_lower)
        .collect()
}

/// Formats a column name into a field constant name: `id` becomes `FIELD_ID`.
pub fn field_constant(field_name: &str) -> String {
    format!("FIELD_{}", field_name.to_ascii_uppercase())
}

/// Formats an enum value into a constant name for the given field. Every byte
/// outside `[0-9A-Za-z_]` is replaced with `_`: field `status` with value
/// `in-progress` becomes `STATUS_IN_PROGRESS`.
pub fn enum_constant(field_name: &str, enum_value: &str) -> String {
    let value: String = enum_value
        .bytes()
        .map(|b| {
            if b.is_ascii_alphanumeric() || b == b'_' {
                b.to_ascii_uppercase() as char
            } else {
                '_'
            }
        })
        .collect();
    format!("{}_{}", field_name.to_ascii_uppercase(), value)
}

fn ucfirst_lower(segment: &str) -> String {
    let lower = segment.to_ascii_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
