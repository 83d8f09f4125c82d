use tracing::info;

use super::ident;
use crate::{util::escape_single_quotes, Table};

/// Renders a [`Table`] into the table descriptor class source. Pure string
/// assembly: the same table and context always produce byte-identical output.
#[derive(Clone, Debug)]
pub struct TableWriter {
    pub(crate) table: Table,
}

pub struct OutputFile {
    pub name: String,
    pub content: String,
}

/// Render-time settings that are not part of the table itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriterContext {
    pub(crate) root_namespace: String,
    pub(crate) db_namespace: String,
    pub(crate) default_connection: String,
}

impl WriterContext {
    pub fn new(root_namespace: &str, db_namespace: &str, default_connection: &str) -> Self {
        Self {
            root_namespace: root_namespace.to_owned(),
            db_namespace: db_namespace.to_owned(),
            default_connection: default_connection.to_owned(),
        }
    }
}

impl TableWriter {
    pub fn into_table(self) -> Table {
        self.table
    }

    pub fn generate(&self, context: &WriterContext) -> OutputFile {
        let file_name = format!("{}Table.php", self.table.get_class_name());
        info!("Generating {}", file_name);

        let mut content = String::new();
        self.write_header(&mut content, context);
        self.write_class_doc(&mut content, context);
        self.write_class_open(&mut content);
        self.write_field_constants(&mut content);
        self.write_enum_constants(&mut content);
        self.write_table_name(&mut content);
        self.write_default_connection(&mut content, context);
        self.write_get_fields(&mut content);
        content.push_str("}\n");

        OutputFile {
            name: file_name,
            content,
        }
    }

    fn write_header(&self, out: &mut String, context: &WriterContext) {
        out.push_str("<?php\n");
        out.push_str("/**\n");
        out.push_str(&format!(" * @package      {}\n", context.root_namespace));
        out.push_str(&format!(
            " * @subpackage   Dao\\Table\\{}\n",
            context.db_namespace
        ));
        out.push_str(" */\n");
        out.push('\n');
        out.push_str(&format!(
            "namespace {}\\Dao\\Table\\{};\n",
            context.root_namespace, context.db_namespace
        ));
        out.push('\n');
    }

    fn write_class_doc(&self, out: &mut String, context: &WriterContext) {
        out.push_str("/**\n");
        out.push_str(&format!(
            " * Table class for the {} table.\n",
            self.table.get_table_name()
        ));
        if !self.table.get_table_comment().is_empty() {
            out.push_str(" *\n");
            out.push_str(&format!(" * {}\n", self.table.get_table_comment()));
        }
        out.push_str(" *\n");
        out.push_str(&format!(" * @package      {}\n", context.root_namespace));
        out.push_str(&format!(
            " * @subpackage   Dao\\Table\\{}\n",
            context.db_namespace
        ));
        out.push_str(
            " * @todo         Auto-generated table class, review field and enum definition comments.\n",
        );
        out.push_str(" */\n");
    }

    fn write_class_open(&self, out: &mut String) {
        out.push_str(&format!(
            "class {}Table extends \\YapepBase\\Database\\MysqlTable {{\n",
            self.table.get_class_name()
        ));
        out.push('\n');
    }

    fn write_field_constants(&self, out: &mut String) {
        for column in self.table.get_columns() {
            out.push_str(&format!("\t/** {} */\n", column.get_comment_or_default()));
            out.push_str(&format!(
                "\tconst {} = '{}';\n",
                column.get_field_constant(),
                escape_single_quotes(column.get_name())
            ));
            out.push('\n');
        }
    }

    fn write_enum_constants(&self, out: &mut String) {
        for enum_set in self.table.get_enums() {
            out.push_str(&format!(
                "\t// {} enum constants\n",
                enum_set.get_column_name()
            ));
            for value in enum_set.get_values() {
                out.push_str(&format!(
                    "\t/** {} enum: {} */\n",
                    enum_set.get_column_name(),
                    value
                ));
                out.push_str(&format!(
                    "\tconst {} = '{}';\n",
                    ident::enum_constant(enum_set.get_column_name(), value),
                    escape_single_quotes(value)
                ));
            }
            out.push('\n');
        }
    }

    fn write_table_name(&self, out: &mut String) {
        out.push_str("\t/**\n");
        out.push_str("\t * The name of the table.\n");
        out.push_str("\t *\n");
        out.push_str("\t * @var string\n");
        out.push_str("\t */\n");
        out.push_str(&format!(
            "\tprotected $tableName = '{}';\n",
            escape_single_quotes(self.table.get_table_name())
        ));
        out.push('\n');
    }

    fn write_default_connection(&self, out: &mut String, context: &WriterContext) {
        if context.default_connection.is_empty() {
            out.push_str("\t// WARNING: No default connection name set, update before use!\n");
        }
        out.push_str("\t/**\n");
        out.push_str("\t * The name of the default connection.\n");
        out.push_str("\t *\n");
        out.push_str("\t * @var string\n");
        out.push_str("\t */\n");
        out.push_str(&format!(
            "\tprotected $defaultConnectionName = '{}';\n",
            escape_single_quotes(&context.default_connection)
        ));
        out.push('\n');
    }

    fn write_get_fields(&self, out: &mut String) {
        out.push_str("\t/**\n");
        out.push_str("\t * Returns the fields of the described table.\n");
        out.push_str("\t *\n");
        out.push_str("\t * @return array   The fields of the table.\n");
        out.push_str("\t */\n");
        out.push_str("\tpublic function getFields() {\n");
        out.push_str("\t\treturn array(\n");
        for column in self.table.get_columns() {
            out.push_str(&format!("\t\t\tself::{},\n", column.get_field_constant()));
        }
        out.push_str("\t\t);\n");
        out.push_str("\t}\n");
    }
}
