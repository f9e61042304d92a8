mod field;
pub use field::Field;

mod record;
pub use record::{Record, RecordMut};
