use crate::{Column, EnumSet, Error, Table, TableWriter};

/// Holds the raw structure read from `information_schema` and turns it into
/// a renderable [`Table`]. Enum extraction happens here: any `enum`/`set`
/// column whose type string cannot be parsed aborts the transform.
#[derive(Clone, Debug)]
pub struct TableTransformer {
    pub(crate) table_name: String,
    pub(crate) table_comment: String,
    pub(crate) columns: Vec<Column>,
}

impl TableTransformer {
    pub fn new(table_name: &str, table_comment: &str, columns: Vec<Column>) -> Self {
        Self {
            table_name: table_name.to_owned(),
            table_comment: table_comment.to_owned(),
            columns,
        }
    }

    pub fn transform(self) -> Result<TableWriter, Error> {
        let mut enums = Vec::new();
        for column in self.columns.iter() {
            if column.is_enum_or_set() {
                enums.push(EnumSet::parse(&column.name, &column.col_type)?);
            }
        }
        Ok(TableWriter {
            table: Table {
                table_name: self.table_name,
                table_comment: self.table_comment,
                columns: self.columns,
                enums,
            },
        })
    }
}
