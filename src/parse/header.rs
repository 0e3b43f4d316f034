use hashbrown::HashSet;
use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::utils::normalize_whitespace;

/// Header tags owned by the dedicated locus/reference extractors; these
/// never enter the generic header map copied into document metadata.
pub(crate) static EXCLUDED_HEADER_KEYS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| {
        HashSet::from_iter([
            "locus", "reference", "authors", "title", "journal", "pubmed",
            "remark", "consrtm",
        ])
    });

/// Width of the column-aligned header tag prefix.
const KEY_WIDTH: usize = 12;

/// Parses the header block into an ordered tag -> text mapping.
///
/// A line whose first 12 columns are non-blank starts a new tag; lines
/// indented by 12 spaces continue the current value. Values are joined
/// with single spaces and whitespace-normalized; keys are lower-cased.
/// Lines of 12 characters or fewer are ignored. Later occurrences of a
/// tag overwrite earlier ones.
pub(crate) fn extract_header_fields(head: &str) -> IndexMap<String, String> {
    let mut fields = IndexMap::new();
    let mut current_key: Option<String> = None;
    let mut current_value = String::new();

    for line in head.lines() {
        if line.len() <= KEY_WIDTH {
            continue;
        }
        // Non-ASCII text straddling the tag column cannot be a header tag.
        let Some(rest) = line.get(KEY_WIDTH..) else {
            continue;
        };
        if !line.starts_with("            ") {
            flush(&mut fields, current_key.take(), &current_value);
            current_key = Some(line[..KEY_WIDTH].to_string());
            current_value.clear();
        }
        current_value.push_str(rest);
        current_value.push(' ');
    }
    flush(&mut fields, current_key, &current_value);

    fields
}

fn flush(
    fields: &mut IndexMap<String, String>,
    key: Option<String>,
    value: &str,
) {
    let Some(key) = key else {
        return;
    };
    let value = normalize_whitespace(value);
    if value.is_empty() {
        return;
    }
    fields.insert(normalize_whitespace(&key).to_lowercase(), value);
}
