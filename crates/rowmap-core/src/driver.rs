mod connection;
pub use connection::{Connection, Driver};

mod cursor;
pub use cursor::{Cursor, ScanTarget, ScanTargets};

mod rows;
pub use rows::Rows;
