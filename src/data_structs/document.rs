use indexmap::IndexMap;
use serde::Serialize;

use crate::data_structs::feature::Feature;
use crate::data_structs::range::Range;
use crate::data_structs::reference::Reference;

pub const FORMAT_NAME: &str = "GBSON";
pub const FORMAT_VERSION: &str = "1.0.6";
pub const FORMAT_URL: &str =
    "https://github.com/lehwark/GBSON/blob/master/GBSON.d.ts";

/// Fixed format identification emitted under `meta.format`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatInfo {
    pub name:    String,
    pub version: String,
    pub url:     String,
}

impl Default for FormatInfo {
    fn default() -> Self {
        Self {
            name:    FORMAT_NAME.to_string(),
            version: FORMAT_VERSION.to_string(),
            url:     FORMAT_URL.to_string(),
        }
    }
}

/// Document-level provenance metadata, promoted from the record's
/// `source` feature (minus its id/parent/type, keeping its range).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Source {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range:      Option<Range>,
    #[serde(flatten)]
    pub qualifiers: IndexMap<String, String>,
}

impl Default for Source {
    fn default() -> Self {
        let mut qualifiers = IndexMap::new();
        qualifiers.insert("organism".to_string(), String::new());
        qualifiers.insert("mol_type".to_string(), "genomic DNA".to_string());
        Self {
            range: Some(Range::Span(0, 0)),
            qualifiers,
        }
    }
}

/// Header metadata of a GBSON document.
///
/// `fields` holds the free header tags (definition, accession, version,
/// keywords, organism, dblink, ...) in order of first appearance; tags
/// owned by the dedicated locus/reference extractors never land here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meta {
    pub format:     FormatInfo,
    pub circular:   bool,
    pub locus:      String,
    /// Residue count of the normalized sequence.
    pub length:     usize,
    /// ISO-8601 timestamp of the conversion.
    pub datetime:   String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<Reference>>,
    #[serde(flatten)]
    pub fields:     IndexMap<String, String>,
    pub source:     Source,
}

/// A complete GBSON document: header metadata, the annotated feature
/// forest and the raw residue string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gbson {
    pub meta:     Meta,
    pub features: Vec<Feature>,
    pub origin:   String,
}

impl Gbson {
    /// Converts one GenBank flat-file record into a GBSON document.
    ///
    /// See [`crate::parse::parse_record`] for the failure contract.
    pub fn from_genbank(text: &str) -> anyhow::Result<Self> {
        crate::parse::parse_record(text)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
