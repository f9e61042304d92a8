use super::Rows;
use crate::{stmt::Value, Result};

use std::{borrow::Cow, fmt::Debug};

/// A database driver: knows how to open connections.
#[async_trait::async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Connection URL this driver was configured with.
    fn url(&self) -> Cow<'_, str>;

    /// Opens a new connection.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// A live database connection.
///
/// Statements are literal SQL with positional `?` placeholders; `params`
/// binds to them in order.
#[async_trait::async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Runs a query and buffers its result set.
    async fn query(&mut self, sql: &str, params: &[Value]) -> Result<Rows>;

    /// Runs a statement, returning the number of affected rows.
    async fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64>;

    /// Row id assigned by the most recent successful INSERT on this
    /// connection.
    async fn last_insert_id(&mut self) -> Result<i64>;
}
