use sqlx::MySqlPool;

use crate::{Error, SchemaDiscovery, TableTransformer};

#[derive(Clone, Debug)]
pub struct TableGenerator {}

impl TableGenerator {
    /// Connects to the server behind `url` and reads the structure of
    /// `schema`.`table`. The connection lives only for the two discovery
    /// queries; the pool is dropped with the returned transformer's scope.
    pub async fn discover(url: &str, schema: &str, table: &str) -> Result<TableTransformer, Error> {
        let connection = MySqlPool::connect(url).await?;
        let schema_discovery = SchemaDiscovery::new(connection, schema);
        schema_discovery.discover(table).await
    }
}
