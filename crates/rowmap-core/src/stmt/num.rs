use super::Value;

macro_rules! impl_num {
    ( $( $variant:ident($ty:ty) )* ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }

            // Any integer variant converts as long as the value fits. Drivers
            // report every integer column as 64-bit, so narrowing on load is
            // the common path.
            impl TryFrom<Value> for $ty {
                type Error = crate::Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let converted = match value {
                        Value::I8(v) => <$ty>::try_from(v).ok(),
                        Value::I16(v) => <$ty>::try_from(v).ok(),
                        Value::I32(v) => <$ty>::try_from(v).ok(),
                        Value::I64(v) => <$ty>::try_from(v).ok(),
                        Value::U8(v) => <$ty>::try_from(v).ok(),
                        Value::U16(v) => <$ty>::try_from(v).ok(),
                        Value::U32(v) => <$ty>::try_from(v).ok(),
                        Value::U64(v) => <$ty>::try_from(v).ok(),
                        _ => None,
                    };

                    converted.ok_or_else(|| crate::Error::type_conversion(value, stringify!($ty)))
                }
            }
        )*
    };
}

impl_num! {
    I8(i8)
    I16(i16)
    I32(i32)
    I64(i64)
    U8(u8)
    U16(u16)
    U32(u32)
    U64(u64)
}
