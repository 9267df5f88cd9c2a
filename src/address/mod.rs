#[cfg(feature = "serde")]
mod parsing;

#[cfg(feature = "serde")]
pub use parsing::{AddressList, Format, ParseError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use crate::ip::PrintIp;

/// Structural category of an [`Address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Integer,
    Text,
    Sequence,
    Tuple,
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::Integer => "integer",
            Shape::Text => "text",
            Shape::Sequence => "sequence",
            Shape::Tuple => "tuple",
        })
    }
}

/// Fields of a sequence or tuple address. All fields have one type: a mixed
/// list has no representation.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fields {
    Integers(Vec<i64>),
    Texts(Vec<String>),
}

impl Fields {
    pub fn len(&self) -> usize {
        match self {
            Fields::Integers(v) => v.len(),
            Fields::Texts(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<i64>> for Fields {
    fn from(value: Vec<i64>) -> Self {
        Fields::Integers(value)
    }
}

impl From<Vec<String>> for Fields {
    fn from(value: Vec<String>) -> Self {
        Fields::Texts(value)
    }
}

impl From<Vec<&str>> for Fields {
    fn from(value: Vec<&str>) -> Self {
        Fields::Texts(value.into_iter().map(str::to_owned).collect())
    }
}

impl PrintIp for Fields {
    fn fmt_ip(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Fields::Integers(v) => v.fmt_ip(f),
            Fields::Texts(v) => v.fmt_ip(f),
        }
    }
}

/// An address whose shape is chosen at runtime, e.g. read from a file.
///
/// Each variant prints exactly like the Rust value it stands for: an
/// `Address::Int16(0)` like `0i16`, an `Address::List` like a `LinkedList`.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Address {
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Text(String),
    Vector(Fields),
    List(Fields),
    Tuple(Fields),
}

macro_rules! impl_from_integer {
    ($($ty:ty => $variant:path),* $(,)?) => {
        $(
            impl From<$ty> for Address {
                fn from(value: $ty) -> Self {
                    $variant(value)
                }
            }
        )*
    };
}

impl_from_integer!(
    i8 => Address::Int8,
    i16 => Address::Int16,
    i32 => Address::Int32,
    i64 => Address::Int64,
    u8 => Address::Uint8,
    u16 => Address::Uint16,
    u32 => Address::Uint32,
    u64 => Address::Uint64,
);

impl From<String> for Address {
    fn from(value: String) -> Self {
        Address::Text(value)
    }
}

impl From<&str> for Address {
    fn from(value: &str) -> Self {
        Address::Text(value.to_owned())
    }
}

impl Address {
    pub fn vector(fields: impl Into<Fields>) -> Self {
        Address::Vector(fields.into())
    }

    pub fn list(fields: impl Into<Fields>) -> Self {
        Address::List(fields.into())
    }

    pub fn tuple(fields: impl Into<Fields>) -> Self {
        Address::Tuple(fields.into())
    }

    pub fn shape(&self) -> Shape {
        match self {
            Address::Int8(..)
            | Address::Int16(..)
            | Address::Int32(..)
            | Address::Int64(..)
            | Address::Uint8(..)
            | Address::Uint16(..)
            | Address::Uint32(..)
            | Address::Uint64(..) => Shape::Integer,
            Address::Text(..) => Shape::Text,
            Address::Vector(..) | Address::List(..) => Shape::Sequence,
            Address::Tuple(..) => Shape::Tuple,
        }
    }
}

impl PrintIp for Address {
    fn fmt_ip(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Address::Int8(v) => v.fmt_ip(f),
            Address::Int16(v) => v.fmt_ip(f),
            Address::Int32(v) => v.fmt_ip(f),
            Address::Int64(v) => v.fmt_ip(f),
            Address::Uint8(v) => v.fmt_ip(f),
            Address::Uint16(v) => v.fmt_ip(f),
            Address::Uint32(v) => v.fmt_ip(f),
            Address::Uint64(v) => v.fmt_ip(f),
            Address::Text(s) => s.fmt_ip(f),
            Address::Vector(fields) | Address::List(fields) | Address::Tuple(fields) => fields.fmt_ip(f),
        }
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_ip(f)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::LinkedList;

    use super::*;
    use crate::ip::to_ip_string;

    #[test]
    fn integers_print_like_their_type() {
        assert_eq!(Address::from(-1i8).to_string(), to_ip_string(-1i8));
        assert_eq!(Address::from(0i16).to_string(), "0.0");
        assert_eq!(Address::from(2130706433i32).to_string(), "127.0.0.1");
        assert_eq!(Address::from(u64::MAX).to_string(), to_ip_string(u64::MAX));
    }

    #[test]
    fn text_prints_verbatim() {
        assert_eq!(Address::from("Hello, World!").to_string(), "Hello, World!");
    }

    #[test]
    fn sequences_print_like_containers() {
        let v = vec![100i64, 200, 300, 400];
        assert_eq!(Address::vector(v.clone()).to_string(), to_ip_string(&v));

        let l: LinkedList<i64> = v.iter().rev().copied().collect();
        assert_eq!(
            Address::list(v.into_iter().rev().collect::<Vec<_>>()).to_string(),
            to_ip_string(&l)
        );
        assert_eq!(Address::list(vec!["a", "b"]).to_string(), "a.b");
    }

    #[test]
    fn tuple_prints_like_uniform_tuple() {
        assert_eq!(
            Address::tuple(vec![123i64, 456, 789, 0]).to_string(),
            to_ip_string((123, 456, 789, 0))
        );
        assert_eq!(Address::tuple(Vec::<String>::new()).to_string(), "");
    }

    #[test]
    fn shapes() {
        assert_eq!(Address::from(1u16).shape(), Shape::Integer);
        assert_eq!(Address::from("x").shape(), Shape::Text);
        assert_eq!(Address::vector(vec![1i64]).shape(), Shape::Sequence);
        assert_eq!(Address::list(vec!["x"]).shape(), Shape::Sequence);
        assert_eq!(Address::tuple(vec![1i64]).shape(), Shape::Tuple);
        assert_eq!(Shape::Tuple.to_string(), "tuple");
    }

    #[test]
    fn fields_len() {
        assert_eq!(Fields::from(vec![1i64, 2]).len(), 2);
        assert!(Fields::from(Vec::<&str>::new()).is_empty());
    }
}
