mod connect;
pub use connect::Connect;

use crate::{map_result, Record, Result, Value};

use rowmap_core::{
    driver::{Connection, Driver},
    Error,
};
use tokio::sync::Mutex;

/// A database handle over one connection.
///
/// Every call locks the connection for its whole duration, so an insert and
/// the read of its generated id cannot interleave with another call.
#[derive(Debug)]
pub struct Db {
    connection: Mutex<Box<dyn Connection>>,
}

/// Shape of a `SELECT COUNT(*) AS result ...` row.
#[derive(Debug, Default, Record)]
struct CountResult {
    #[column]
    result: u64,
}

impl Db {
    /// Opens a connection from a URL such as `sqlite::memory:` or
    /// `sqlite:///var/lib/app.db`.
    pub async fn connect(url: &str) -> Result<Db> {
        let driver = Connect::new(url)?;
        let connection = driver.connect().await?;
        tracing::debug!(url = %driver.url(), "connected");
        Ok(Db::new(connection))
    }

    pub fn new(connection: Box<dyn Connection>) -> Db {
        Db {
            connection: Mutex::new(connection),
        }
    }

    /// Runs literal SQL, returning the number of affected rows.
    pub async fn execute(&self, sql: &str) -> Result<u64> {
        tracing::debug!(sql, "execute");
        self.connection.lock().await.execute(sql, &[]).await
    }

    pub async fn select<R: Record>(&self, sql: &str, params: &[Value]) -> Result<Vec<R>> {
        let mut records = vec![];
        self.select_into(&mut records, sql, params).await?;
        Ok(records)
    }

    /// Like [`select`](Db::select), appending to `out`. Records mapped
    /// before a failing row remain in `out`.
    pub async fn select_into<R: Record>(
        &self,
        out: &mut Vec<R>,
        sql: &str,
        params: &[Value],
    ) -> Result<()> {
        tracing::debug!(sql, params = params.len(), record = R::NAME, "select");
        let mut rows = self.connection.lock().await.query(sql, params).await?;
        map_result(&mut rows, out)
    }

    /// Runs a count query. The count must be aliased `AS result`.
    pub async fn count(&self, sql: &str, params: &[Value]) -> Result<u64> {
        let counts: Vec<CountResult> = self.select(sql, params).await?;

        match counts.first() {
            Some(count) => Ok(count.result),
            None => Err(Error::invalid_result(
                "count query returned no rows with a `result` column",
            )),
        }
    }

    /// Inserts `record` into `table`, returning the generated row id.
    pub async fn insert<R: Record>(&self, table: &str, record: &R) -> Result<i64> {
        let (sql, params) = crate::to_insert_statement(table, record)?.into_parts();
        tracing::debug!(sql = %sql, params = params.len(), "insert");

        let mut connection = self.connection.lock().await;
        connection.execute(&sql, &params).await?;
        connection.last_insert_id().await
    }

    /// Updates the row of `table` identified by `record`'s primary key, or
    /// by `custom_where` when given. Returns the number of affected rows.
    pub async fn update<R: Record>(
        &self,
        table: &str,
        record: &R,
        custom_where: Option<&str>,
    ) -> Result<u64> {
        let (sql, params) =
            crate::to_update_statement(table, record, custom_where)?.into_parts();
        tracing::debug!(sql = %sql, params = params.len(), "update");

        self.connection.lock().await.execute(&sql, &params).await
    }

    /// Closes the connection.
    pub async fn close(self) {
        let connection = self.connection.into_inner();
        tracing::debug!(?connection, "closing");
        drop(connection);
    }
}
