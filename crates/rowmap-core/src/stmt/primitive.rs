use super::Value;
use crate::Result;

use uuid::Uuid;

/// A field type that can be stored in a single column.
///
/// `load` converts a scanned column value into the field type and `to_value`
/// snapshots the field's current value as a statement parameter.
pub trait Primitive: Sized {
    fn load(value: Value) -> Result<Self>;

    fn to_value(&self) -> Value;
}

macro_rules! impl_primitive {
    ( $( $ty:ty ),* ) => {
        $(
            impl Primitive for $ty {
                fn load(value: Value) -> Result<Self> {
                    <$ty>::try_from(value)
                }

                fn to_value(&self) -> Value {
                    Value::from(self.clone())
                }
            }
        )*
    };
}

impl_primitive!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, String, Vec<u8>, Uuid);

impl<T: Primitive> Primitive for Option<T> {
    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            return Ok(None);
        }

        T::load(value).map(Some)
    }

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}
