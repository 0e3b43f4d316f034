//! Output data model of the converter: the [`Range`] location algebra,
//! [`Reference`] citations, the [`RawFeature`]/[`Feature`] pair and the
//! assembled [`Gbson`] document.

mod document;
mod feature;
mod range;
mod reference;

pub use document::{
    FormatInfo,
    Gbson,
    Meta,
    Source,
    FORMAT_NAME,
    FORMAT_URL,
    FORMAT_VERSION,
};
pub use feature::{Feature, RawFeature, SOURCE_FEATURE_TYPE};
pub use range::Range;
pub use reference::Reference;

#[cfg(test)]
mod tests;
