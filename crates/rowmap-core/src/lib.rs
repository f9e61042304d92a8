pub mod driver;
pub use driver::{Connection, Cursor, Rows, ScanTargets};

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{Field, Record, RecordMut};

pub mod stmt;
pub use stmt::{Primitive, Value};

/// A Result type alias that uses rowmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
