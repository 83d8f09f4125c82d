use sqlx::{MySqlPool, Row};
use tracing::info;

use crate::{Column, Error, TableTransformer};

/// Reads one table's structure from `information_schema`. Two read-only
/// queries per table: the table comment and the ordered column list. A table
/// that does not exist yields an empty comment and no columns, not an error.
#[derive(Clone, Debug)]
pub struct SchemaDiscovery {
    pool: MySqlPool,
    schema: String,
}

impl SchemaDiscovery {
    pub fn new(pool: MySqlPool, schema: &str) -> Self {
        Self {
            pool,
            schema: schema.to_owned(),
        }
    }

    pub async fn discover(&self, table: &str) -> Result<TableTransformer, Error> {
        info!("Discovering `{}`.`{}`", self.schema, table);
        let table_comment = self.discover_table_comment(table).await?;
        let columns = self.discover_columns(table).await?;
        info!("... discovered {} columns", columns.len());
        Ok(TableTransformer::new(table, &table_comment, columns))
    }

    async fn discover_table_comment(&self, table: &str) -> Result<String, Error> {
        let row = sqlx::query(
            "SELECT TABLE_COMMENT \
             FROM information_schema.TABLES \
             WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ?",
        )
        .bind(&self.schema)
        .bind(table)
        .fetch_optional(&self.pool)
        .await?;

        let comment = match row {
            Some(row) => row
                .try_get::<Option<String>, _>("TABLE_COMMENT")?
                .unwrap_or_default(),
            None => String::new(),
        };
        Ok(comment)
    }

    async fn discover_columns(&self, table: &str) -> Result<Vec<Column>, Error> {
        let rows = sqlx::query(
            "SELECT COLUMN_NAME, DATA_TYPE, COLUMN_TYPE, COLUMN_COMMENT \
             FROM information_schema.COLUMNS \
             WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ? \
             ORDER BY ORDINAL_POSITION ASC",
        )
        .bind(&self.schema)
        .bind(table)
        .fetch_all(&self.pool)
        .await?;

        let mut columns = Vec::with_capacity(rows.len());
        for row in rows {
            columns.push(Column::new(
                &row.try_get::<String, _>("COLUMN_NAME")?,
                &row
                    .try_get::<Option<String>, _>("DATA_TYPE")?
                    .unwrap_or_default(),
                &row
                    .try_get::<Option<String>, _>("COLUMN_TYPE")?
                    .unwrap_or_default(),
                &row
                    .try_get::<Option<String>, _>("COLUMN_COMMENT")?
                    .unwrap_or_default(),
            ));
        }
        Ok(columns)
    }
}
