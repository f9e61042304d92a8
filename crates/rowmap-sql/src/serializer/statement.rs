use super::{Comma, Formatter, Params, ToSql};
use crate::stmt::{Insert, Statement, Update, UpdateFilter};

impl ToSql for &Statement {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &Insert {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table = &self.table;
        let columns = Comma(self.columns.iter().copied());
        let values = Comma(self.values.iter());

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" values ")");
    }
}

impl ToSql for &Update {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table = &self.table;
        let assignments = Comma(self.assignments.iter().map(Assignment));

        fmt!(f, "UPDATE " table " SET " assignments);

        match &self.filter {
            UpdateFilter::PrimaryKey { column, value } => {
                let column: &str = column;
                fmt!(f, " WHERE " column " = " value);
            }
            UpdateFilter::Custom { clause, key } => {
                fmt!(f, " " clause);

                // The clause text is opaque; the key is bound after every
                // SET parameter without a placeholder of its own.
                if let Some(key) = key {
                    f.params.push(key);
                }
            }
        }
    }
}

struct Assignment<'a>(&'a (&'static str, rowmap_core::Value));

impl ToSql for Assignment<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let (column, value) = self.0;
        let column: &str = column;
        fmt!(f, column " = " value);
    }
}
