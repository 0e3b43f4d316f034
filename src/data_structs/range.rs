use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize};

/// A normalized GenBank location expression.
///
/// GenBank locations are either a single position (`42`), a span
/// (`42..108`), the reverse-strand complement of a nested location
/// (`complement(...)`), or an ordered composition of nested locations
/// (`join(...)` / `order(...)`, which are treated as equivalent).
///
/// The serialized form follows the GBSON schema: a span is a two-element
/// array, the wrappers are single-key objects:
///
/// ```text
/// 42..108                  -> [42, 108]
/// complement(42..108)      -> {"complement": [42, 108]}
/// join(1..5,10..15)        -> {"joined": [[1, 5], [10, 15]]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Range {
    /// A closed interval `[start, end]`. A bare position `p` is
    /// represented as `Span(p, p)`.
    Span(u64, u64),
    /// Reverse-strand complement of the inner location.
    Complement(Box<Range>),
    /// Ordered sequence of sub-locations (`join`/`order`).
    Joined(Vec<Range>),
}

impl Range {
    pub fn span(
        start: u64,
        end: u64,
    ) -> Self {
        Range::Span(start, end)
    }

    pub fn complement(inner: Range) -> Self {
        Range::Complement(Box::new(inner))
    }

    pub fn joined<I: IntoIterator<Item = Range>>(parts: I) -> Self {
        Range::Joined(parts.into_iter().collect())
    }
}

impl fmt::Display for Range {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Range::Span(start, end) if start == end => write!(f, "{}", start),
            Range::Span(start, end) => write!(f, "{}..{}", start, end),
            Range::Complement(inner) => write!(f, "complement({})", inner),
            Range::Joined(parts) => {
                write!(f, "join(")?;
                for (n, part) in parts.iter().enumerate() {
                    if n > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", part)?;
                }
                write!(f, ")")
            },
        }
    }
}

impl FromStr for Range {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_location(s)
    }
}

impl Serialize for Range {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer, {
        match self {
            Range::Span(start, end) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(start)?;
                seq.serialize_element(end)?;
                seq.end()
            },
            Range::Complement(inner) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("complement", inner.as_ref())?;
                map.end()
            },
            Range::Joined(parts) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("joined", parts)?;
                map.end()
            },
        }
    }
}

impl<'de> Deserialize<'de> for Range {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>, {
        struct RangeVisitor;

        impl<'de> Visitor<'de> for RangeVisitor {
            type Value = Range;

            fn expecting(
                &self,
                formatter: &mut fmt::Formatter,
            ) -> fmt::Result {
                formatter.write_str(
                    "a [start, end] pair or a {complement}/{joined} object",
                )
            }

            fn visit_seq<A>(
                self,
                mut seq: A,
            ) -> Result<Range, A::Error>
            where
                A: SeqAccess<'de>, {
                let start = seq
                    .next_element::<u64>()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let end = seq
                    .next_element::<u64>()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                if seq.next_element::<u64>()?.is_some() {
                    return Err(de::Error::invalid_length(3, &self));
                }
                Ok(Range::Span(start, end))
            }

            fn visit_map<A>(
                self,
                mut map: A,
            ) -> Result<Range, A::Error>
            where
                A: MapAccess<'de>, {
                let key: String = map
                    .next_key()?
                    .ok_or_else(|| de::Error::custom("empty range object"))?;
                let range = match key.as_str() {
                    "complement" => {
                        Range::Complement(Box::new(map.next_value()?))
                    },
                    "joined" => Range::Joined(map.next_value()?),
                    other => {
                        return Err(de::Error::unknown_field(other, &[
                            "complement",
                            "joined",
                        ]))
                    },
                };
                if map.next_key::<String>()?.is_some() {
                    return Err(de::Error::custom(
                        "range object must have exactly one key",
                    ));
                }
                Ok(range)
            }
        }

        deserializer.deserialize_any(RangeVisitor)
    }
}
