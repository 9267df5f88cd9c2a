use std::fmt::{self, Formatter};

use crate::ip::PrintIp;

impl PrintIp for str {
    fn fmt_ip(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl PrintIp for String {
    fn fmt_ip(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}
