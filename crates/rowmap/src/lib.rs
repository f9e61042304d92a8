// Lets `#[derive(Record)]` expand inside this crate.
extern crate self as rowmap;

pub mod db;
pub use db::Db;

mod map;
pub use map::map_result;

pub use rowmap_core::{
    bail, driver, err, schema, stmt, Connection, Cursor, Error, Field, Primitive, Record,
    RecordMut, Result, Rows, ScanTargets, Value,
};

pub use rowmap_macros::Record;

pub use rowmap_sql::{to_insert_statement, to_update_statement, Sql};

#[doc(hidden)]
pub mod codegen_support {
    pub use rowmap_core::{Error, Field, Primitive, Record, Result, Value};
    pub use std::format;
}
