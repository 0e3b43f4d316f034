use crate::data_structs::Reference;
use crate::utils::normalize_whitespace;

const REFERENCE_TAG: &str = "REFERENCE";

/// Re-parses the `REFERENCE` sections of the header block into structured
/// citation records.
///
/// A block runs from its `REFERENCE` line to the next line starting in
/// column 0 (the next top-level header tag) or the end of the header.
/// Blocks without a title are dropped. Returns `None` when no valid block
/// was found.
pub(crate) fn extract_references(head: &str) -> Option<Vec<Reference>> {
    let mut references = Vec::new();
    let mut last_index = 0u64;

    for block in reference_blocks(head) {
        let Some(title) = subfield(&block, "TITLE") else {
            continue;
        };

        let mut reference = Reference::new(title);

        let index = explicit_index(&block).unwrap_or(last_index + 1);
        last_index = index;
        reference.index = Some(index);
        reference.range = base_range(&block);

        if let Some(mut journal) = subfield(&block, "JOURNAL") {
            // A PUBMED sub-field swallowed into the journal text is cut
            // off; its id is still captured separately below.
            if let Some(idx) = journal.find("PUBMED") {
                journal = journal[..idx].trim().to_string();
            }
            if !journal.is_empty() {
                reference.journal = Some(journal);
            }
        }
        reference.pubmed = subfield(&block, "PUBMED");
        reference.remark = subfield(&block, "REMARK");
        reference.consrtm = subfield(&block, "CONSRTM");
        reference.authors = subfield(&block, "AUTHORS");

        references.push(reference);
    }

    if references.is_empty() {
        None
    }
    else {
        Some(references)
    }
}

/// Yields each REFERENCE block as the text after its tag plus all
/// following indented lines.
fn reference_blocks(head: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Option<String> = None;

    for line in head.lines() {
        if line.starts_with(REFERENCE_TAG) {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            current = Some(line[REFERENCE_TAG.len()..].to_string());
        }
        else if line.starts_with(char::is_whitespace) {
            if let Some(block) = current.as_mut() {
                block.push('\n');
                block.push_str(line);
            }
        }
        else if let Some(block) = current.take() {
            // A new top-level tag ends the block.
            blocks.push(block);
        }
    }
    if let Some(block) = current {
        blocks.push(block);
    }
    blocks
}

/// Extracts a citation sub-field: the text after its tag up to the next
/// sub-field line (blank-blank-nonblank prefix) or the end of the block,
/// whitespace-normalized. Empty results become `None`.
fn subfield(
    block: &str,
    tag: &str,
) -> Option<String> {
    let mut lines = block.lines();
    let mut value = String::new();

    for line in lines.by_ref() {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(tag) {
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                value.push_str(rest);
                break;
            }
        }
    }
    if value.is_empty() && block.find(tag).is_none() {
        return None;
    }
    for line in lines {
        if is_subfield_start(line) {
            break;
        }
        value.push(' ');
        value.push_str(line);
    }

    let value = normalize_whitespace(&value);
    if value.is_empty() {
        None
    }
    else {
        Some(value)
    }
}

/// A sub-field starts on a line whose third column is the first non-blank
/// one; deeper-indented lines are continuations.
fn is_subfield_start(line: &str) -> bool {
    let mut chars = line.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(a), Some(b), Some(c))
            if a.is_whitespace() && b.is_whitespace() && !c.is_whitespace()
    )
}

/// The explicit reference number: first integer token on the tag line.
fn explicit_index(block: &str) -> Option<u64> {
    block
        .lines()
        .next()?
        .split_whitespace()
        .next()?
        .parse()
        .ok()
}

/// Captures `(bases N to M)` anywhere in the block.
fn base_range(block: &str) -> Option<(u64, u64)> {
    let rest = &block[block.find("(bases ")? + "(bases ".len()..];
    let inner = &rest[..rest.find(')')?];
    let (start, end) = inner.split_once(" to ")?;
    Some((start.trim().parse().ok()?, end.trim().parse().ok()?))
}
