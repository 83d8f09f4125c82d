use super::ident;

/// One column of the inspected table, in the order reported by
/// `information_schema.COLUMNS.ORDINAL_POSITION`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub(crate) name: String,
    pub(crate) data_type: String,
    pub(crate) col_type: String,
    pub(crate) comment: String,
}

impl Column {
    pub fn new(name: &str, data_type: &str, col_type: &str, comment: &str) -> Self {
        Self {
            name: name.to_owned(),
            data_type: data_type.to_owned(),
            col_type: col_type.to_owned(),
            comment: comment.to_owned(),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_field_constant(&self) -> String {
        ident::field_constant(&self.name)
    }

    /// Columns without a comment are documented as "<name> field".
    pub fn get_comment_or_default(&self) -> String {
        if self.comment.is_empty() {
            format!("{} field", self.name)
        } else {
            self.comment.clone()
        }
    }

    pub fn is_enum_or_set(&self) -> bool {
        self.data_type == "enum" || self.data_type == "set"
    }
}
