use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::Serialize;

use crate::data_structs::range::Range;

/// Feature type that is promoted to document-level source metadata
/// instead of being emitted as a feature.
pub const SOURCE_FEATURE_TYPE: &str = "source";

/// A feature record as read from the feature table, before location
/// parsing, qualifier filtering and forest assembly.
///
/// `id` is assigned in encounter order, starting at 1. Qualifier keys are
/// lower-cased and trimmed at insertion; a key colliding with an existing
/// one is made unique by appending `$` until it no longer collides, so
/// three `host` qualifiers occupy the slots `host`, `host$` and `host$$`
/// in their original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFeature {
    pub id:           u64,
    /// Declared parent id. No extraction rule currently populates this;
    /// the forest assembler still resolves it when present.
    pub parent:       Option<String>,
    pub feature_type: String,
    /// Raw location text, exactly as read from the table.
    pub location:     String,
    pub qualifiers:   IndexMap<String, String>,
}

impl RawFeature {
    pub fn new<S: Into<String>>(
        feature_type: S,
        location: S,
    ) -> Self {
        Self {
            feature_type: feature_type.into(),
            location: location.into(),
            ..Default::default()
        }
    }

    /// Inserts a qualifier under the next free `$`-suffixed slot for its
    /// lower-cased, trimmed key.
    pub fn insert_qualifier(
        &mut self,
        key: &str,
        value: String,
    ) {
        let mut key = key.trim().to_lowercase();
        while self.qualifiers.contains_key(&key) {
            key.push('$');
        }
        self.qualifiers.insert(key, value);
    }

    pub fn is_source(&self) -> bool {
        self.feature_type == SOURCE_FEATURE_TYPE
    }
}

/// An assembled feature: a [`RawFeature`] with its location parsed into a
/// [`Range`], qualifiers filtered down to the recognized set, and child
/// features attached.
///
/// Serializes to the GBSON feature shape: `id` as `"i<n>"`, `type`,
/// `range`, the qualifiers flattened into the object, and `features` only
/// when children exist. The resolved `parent` link is not emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id:           u64,
    pub parent:       Option<String>,
    pub feature_type: String,
    pub range:        Range,
    pub qualifiers:   IndexMap<String, String>,
    pub children:     Vec<Feature>,
}

impl Feature {
    /// The document-level id string, `"i"` followed by the numeric id.
    pub fn id_str(&self) -> String {
        format!("i{}", self.id)
    }
}

impl Serialize for Feature {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer, {
        let extra = usize::from(!self.children.is_empty());
        let mut map =
            serializer.serialize_map(Some(3 + self.qualifiers.len() + extra))?;
        map.serialize_entry("id", &self.id_str())?;
        map.serialize_entry("type", &self.feature_type)?;
        map.serialize_entry("range", &self.range)?;
        for (key, value) in &self.qualifiers {
            map.serialize_entry(key, value)?;
        }
        if !self.children.is_empty() {
            map.serialize_entry("features", &self.children)?;
        }
        map.end()
    }
}
