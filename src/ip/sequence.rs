use std::collections::LinkedList;
use std::fmt::{self, Display, Formatter};

use crate::ip::{write_fields, PrintIp};

// Only these two containers are addresses. Sets, maps, arrays and slices do
// not implement `PrintIp`.

impl<T: Display> PrintIp for Vec<T> {
    fn fmt_ip(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_fields(f, self)
    }
}

impl<T: Display> PrintIp for LinkedList<T> {
    fn fmt_ip(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_fields(f, self)
    }
}
