//! Print integers, strings, lists and tuples as dot-separated addresses.
//!
//! ```
//! use print_ip::{print_ip, to_ip_string};
//!
//! print_ip(-1i8);                                      // 255
//! assert_eq!(to_ip_string(2130706433i32), "127.0.0.1");
//! assert_eq!(to_ip_string((123, 456, 789, 0)), "123.456.789.0");
//! ```
//!
//! Only the shapes listed in [`ip`] can be printed. A tuple mixing field types
//! does not compile:
//!
//! ```compile_fail
//! print_ip::print_ip((1, "a"));
//! ```
//!
//! and neither do other containers or non-integer numbers:
//!
//! ```compile_fail
//! use std::collections::HashSet;
//! print_ip::print_ip(HashSet::from([1, 2]));
//! ```
//!
//! ```compile_fail
//! print_ip::print_ip([192, 168, 0, 1]);
//! ```
//!
//! ```compile_fail
//! use std::collections::VecDeque;
//! print_ip::print_ip(VecDeque::from([1]));
//! ```
//!
//! ```compile_fail
//! print_ip::print_ip(&[1, 2][..]);
//! ```
//!
//! ```compile_fail
//! print_ip::print_ip(1.5f64);
//! ```
//!
//! Addresses whose shape is only known at runtime are modelled by [`Address`]
//! and, with the `serde` feature, can be loaded from json, yaml or toml files
//! through [`AddressList`].

pub mod address;
#[cfg(feature = "cmd")]
pub mod cmd;
pub mod ip;
mod logger;

pub use address::{Address, Fields, Shape};
#[cfg(feature = "serde")]
pub use address::{AddressList, Format, ParseError};
pub use ip::{print_ip, to_ip_string, write_ip, IpDisplay, PrintIp, SEPARATOR};
#[cfg(feature = "log")]
pub use logger::{ConsoleLogger, CONSOLE_LOGGER};
