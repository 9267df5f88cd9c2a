use std::fmt::{self, Display, Formatter};

use crate::ip::{write_fields, PrintIp};

// Every position of the tuple is the same `T`, so a tuple mixing field types
// has no `PrintIp` implementation.
macro_rules! uniform {
    ($idx:tt) => {
        T
    };
}

macro_rules! impl_print_ip_tuple {
    ($(($($idx:tt)+))+) => {
        $(
            impl<T: Display> PrintIp for ($(uniform!($idx),)+) {
                fn fmt_ip(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    write_fields(f, [$(&self.$idx),+])
                }
            }
        )+
    };
}

impl PrintIp for () {
    fn fmt_ip(&self, _f: &mut Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl_print_ip_tuple! {
    (0)
    (0 1)
    (0 1 2)
    (0 1 2 3)
    (0 1 2 3 4)
    (0 1 2 3 4 5)
    (0 1 2 3 4 5 6)
    (0 1 2 3 4 5 6 7)
    (0 1 2 3 4 5 6 7 8)
    (0 1 2 3 4 5 6 7 8 9)
    (0 1 2 3 4 5 6 7 8 9 10)
    (0 1 2 3 4 5 6 7 8 9 10 11)
}
