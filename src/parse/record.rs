use anyhow::{bail, Result};
use itertools::Itertools;

/// Marker terminating the header block. The padded form distinguishes the
/// section keyword from incidental occurrences of the word.
const FEATURES_MARKER: &str = "\nFEATURES     ";
const FEATURES_TAG: &str = "\nFEATURES";
const ORIGIN_MARKER: &str = "\nORIGIN     ";
const ORIGIN_TAG: &str = "\nORIGIN";

/// Sentinel appended to the feature block so the tokenizer flushes its
/// last pending feature.
const TABLE_SENTINEL: &str = "\n                     ";

/// The three byte regions of a GenBank record, plus the locus facts that
/// are read straight off the `LOCUS` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordParts {
    /// Header block: everything before `FEATURES`.
    pub head:     String,
    /// Feature table: between `FEATURES` and `ORIGIN`, sentinel-terminated.
    pub table:    String,
    /// Sequence block: everything after `ORIGIN`, still numbered/wrapped.
    pub sequence: String,
    pub locus:    String,
    pub circular: bool,
}

/// Splits a raw record into header, feature table and sequence regions.
///
/// Line endings are normalized to `\n` and blank lines are dropped before
/// splitting. Missing `FEATURES`/`ORIGIN` markers are a structural failure:
/// no document can be produced from such input.
pub(crate) fn split_record(text: &str) -> Result<RecordParts> {
    let normalized = normalize_lines(text);

    let Some(head_end) = normalized.find(FEATURES_MARKER) else {
        bail!("no FEATURES section found in record");
    };
    let head = &normalized[..head_end];

    let after_features = &normalized[head_end + FEATURES_TAG.len()..];
    let table_end = match after_features
        .find(ORIGIN_MARKER)
        .or_else(|| after_features.find(ORIGIN_TAG))
    {
        Some(idx) => idx,
        None => bail!("no ORIGIN section found in record"),
    };
    let mut table = after_features[..table_end].to_string();
    table.push_str(TABLE_SENTINEL);

    // The padded marker begins with the bare tag, so this holds for both.
    let sequence = after_features[table_end + ORIGIN_TAG.len()..].to_string();

    let locus_line = head
        .lines()
        .find(|line| line.starts_with("LOCUS"))
        .unwrap_or("");
    let locus = locus_line
        .strip_prefix("LOCUS")
        .unwrap_or("")
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_string();
    let circular = locus_line
        .split_whitespace()
        .any(|token| token.eq_ignore_ascii_case("circular"));

    Ok(RecordParts {
        head: head.to_string(),
        table,
        sequence,
        locus,
        circular,
    })
}

/// `\r` becomes `\n`, runs of blank lines collapse to a single newline.
fn normalize_lines(text: &str) -> String {
    text.replace('\r', "\n")
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .join("\n")
}

/// Strips numbering, whitespace and slashes from the `ORIGIN` block,
/// leaving the pure residue string. The declared header length is not
/// checked against the result.
pub(crate) fn normalize_sequence(block: &str) -> String {
    block
        .chars()
        .filter(|c| !c.is_ascii_digit() && !c.is_whitespace() && *c != '/')
        .collect()
}
