use std::fmt::{self, Formatter};

use crate::ip::{write_fields, PrintIp};

// Signed values are reinterpreted bit for bit as the unsigned type of the same
// width before their bytes are taken.
macro_rules! impl_print_ip_signed {
    ($($ty:ty => $unsigned:ty),* $(,)?) => {
        $(
            impl PrintIp for $ty {
                fn fmt_ip(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    write_fields(f, (*self as $unsigned).to_be_bytes())
                }
            }
        )*
    };
}

macro_rules! impl_print_ip_unsigned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PrintIp for $ty {
                fn fmt_ip(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    write_fields(f, self.to_be_bytes())
                }
            }
        )*
    };
}

impl_print_ip_signed!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
);
impl_print_ip_unsigned!(u8, u16, u32, u64, u128, usize);
