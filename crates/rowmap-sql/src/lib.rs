pub mod serializer;
pub use serializer::{Params, Placeholder, Serializer};

pub mod stmt;
pub use stmt::{Insert, Statement, Update, UpdateFilter};

use rowmap_core::{stmt::Value, Record, Result};

/// A serialized statement: SQL text with positional `?` placeholders and
/// the parameters bound to them, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Sql {
    pub text: String,
    pub params: Vec<Value>,
}

impl Sql {
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.text, self.params)
    }
}

impl From<&Statement> for Sql {
    fn from(stmt: &Statement) -> Self {
        let mut params = Vec::new();
        let text = Serializer::new().serialize(stmt, &mut params);
        Sql { text, params }
    }
}

/// Builds `INSERT INTO <table> (<columns>) VALUES (<placeholders>)` for
/// `record`, skipping auto-increment and read-only fields.
pub fn to_insert_statement<R: Record>(table: &str, record: &R) -> Result<Sql> {
    let stmt = Statement::from(Insert::from_record(table, record)?);
    let sql = Sql::from(&stmt);
    tracing::trace!(sql = %sql.text, params = sql.params.len(), "generated insert");
    Ok(sql)
}

/// Builds `UPDATE <table> SET <assignments> ...` for `record`.
///
/// Without `custom_where` the statement ends in `WHERE <pk> = ?`; with it,
/// the caller's clause is appended verbatim. Either way the primary-key value
/// (when the record declares one) is the last parameter.
pub fn to_update_statement<R: Record>(
    table: &str,
    record: &R,
    custom_where: Option<&str>,
) -> Result<Sql> {
    let stmt = Statement::from(Update::from_record(table, record, custom_where)?);
    let sql = Sql::from(&stmt);
    tracing::trace!(sql = %sql.text, params = sql.params.len(), "generated update");
    Ok(sql)
}
