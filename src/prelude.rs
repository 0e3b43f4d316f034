pub use crate::data_structs::{
    Feature,
    FormatInfo,
    Gbson,
    Meta,
    Range,
    RawFeature,
    Reference,
    Source,
};
pub use crate::parse::{parse_location, parse_record};
