use log::warn;

use crate::data_structs::RawFeature;

/// Internal delimiter a qualifier slash is rewritten to, so slashes
/// embedded in values (translations, URLs) cannot be mistaken for
/// qualifier boundaries.
const QUALIFIER_DELIMITER: &str = "///";

/// Indent depth that marks a qualifier or continuation line.
const DEEP_INDENT: &str = "          ";

/// Column at which a feature header line carries its location text.
const LOCATION_COLUMN: usize = 20;

/// Qualifier key whose value must not gain spaces at line joins.
const TRANSLATION_KEY: &str = "translation";

/// Walks the feature block and produces the committed raw features in
/// encounter order, ids assigned from 1.
///
/// The walk keeps two pieces of local state: the pending feature (type +
/// location, opened by a feature header line) and a qualifier buffer
/// (deep-indented lines). Any line that is neither ends the buffer: its
/// chunks are resolved into qualifiers of the pending feature, and the
/// feature is committed unless its location is a remote (`:`-containing)
/// reference. Feature header lines whose trimmed text ends with a comma
/// pull in following lines, so multi-line location expressions stay whole.
pub(crate) fn tokenize_features(table: &str) -> Vec<RawFeature> {
    let lines: Vec<&str> = table.split('\n').collect();

    let mut features: Vec<RawFeature> = Vec::new();
    let mut next_id = 1u64;
    let mut pending: Option<RawFeature> = None;
    let mut buffer = String::new();

    let mut n = 0;
    while n < lines.len() {
        let line = lines[n].replace("     /", "     ///");

        if line.starts_with(DEEP_INDENT) && n < lines.len() - 1 {
            buffer.push_str(line.trim());
            buffer.push('\n');
            n += 1;
            continue;
        }

        // Boundary: resolve buffered qualifiers, then commit the pending
        // feature. Remote locations are excluded by design.
        if let Some(feature) = pending.as_mut() {
            apply_qualifiers(feature, &buffer);
        }
        if let Some(mut feature) = pending.take() {
            if !feature.location.contains(':') {
                feature.id = next_id;
                next_id += 1;
                features.push(feature);
            }
        }
        buffer.clear();

        if let Some(feature_type) = parse_feature_type(&line) {
            let mut header = line.clone();
            while header.trim_end().ends_with(',') && n + 1 < lines.len() {
                n += 1;
                header.push_str(lines[n]);
            }
            let location = header
                .get(LOCATION_COLUMN..)
                .unwrap_or("")
                .trim()
                .to_string();
            pending = Some(RawFeature::new(feature_type, location));
        }
        else if !line.starts_with("BASE COUNT") && !line.trim().is_empty() {
            warn!("could not parse feature type from line '{}'", line);
        }
        n += 1;
    }

    features
}

/// A feature header line has a 5-column indent followed directly by the
/// feature type word.
fn parse_feature_type(line: &str) -> Option<String> {
    let rest = line.strip_prefix("     ")?;
    let (feature_type, _) = rest.split_once(' ')?;
    if feature_type.is_empty() {
        None
    }
    else {
        Some(feature_type.trim().to_string())
    }
}

/// Splits the accumulated buffer into qualifier chunks and inserts each
/// into the feature.
///
/// A chunk splits at its first `=`: key before, value after. Values in
/// matching double quotes lose them; newlines inside a value become single
/// spaces, except under the `translation` key where they vanish outright.
/// A chunk without `=` and with non-empty text becomes an empty-valued
/// (boolean-style) qualifier.
fn apply_qualifiers(
    feature: &mut RawFeature,
    buffer: &str,
) {
    for chunk in buffer.split(QUALIFIER_DELIMITER) {
        match chunk.find('=') {
            Some(idx) if idx > 0 => {
                let key = chunk[..idx].replace('\n', "");
                let key = key.trim();
                let mut value = chunk[idx + 1..].trim();
                if value.starts_with('"') && value.ends_with('"') && value.len() >= 2
                {
                    value = value[1..value.len() - 1].trim();
                }
                let joined = if key.eq_ignore_ascii_case(TRANSLATION_KEY) {
                    value.replace('\n', "")
                }
                else {
                    value.replace('\n', " ")
                };
                feature.insert_qualifier(key, joined.trim().to_string());
            },
            _ => {
                let key = chunk.replace('\n', "");
                let key = key.trim();
                if !key.is_empty() {
                    feature.insert_qualifier(key, String::new());
                }
            },
        }
    }
}
