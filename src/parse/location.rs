use anyhow::{anyhow, bail, Result};

use crate::data_structs::Range;

/// Parses a GenBank location expression into a [`Range`].
///
/// Accepted grammar, after stripping the partial-certainty markers `<`/`>`
/// and all whitespace, and reading `^` (between-bases position) as `..`:
///
/// ```text
/// range    := interval
///           | "complement" "(" range ")"
///           | ("join" | "order") "(" range ("," range)* ")"
/// interval := INT (".." INT)?
/// ```
///
/// `order(...)` is semantically merged into [`Range::Joined`], and a bare
/// position `N` yields `Span(N, N)`. Remote (`accession:span`) locations
/// never reach this parser; the tokenizer excludes them beforehand.
pub fn parse_location(raw: &str) -> Result<Range> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '<' && *c != '>')
        .collect::<String>()
        .replace('^', "..");

    let mut cursor = Cursor::new(&cleaned);
    let range = cursor
        .parse_range()
        .map_err(|e| anyhow!("malformed location '{}': {}", raw.trim(), e))?;
    if !cursor.at_end() {
        bail!(
            "malformed location '{}': trailing text at offset {}",
            raw.trim(),
            cursor.pos
        );
    }
    Ok(range)
}

/// Character cursor over a cleaned location string.
struct Cursor<'a> {
    text: &'a str,
    pos:  usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn eat(
        &mut self,
        token: &str,
    ) -> bool {
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        }
        else {
            false
        }
    }

    fn expect(
        &mut self,
        token: &str,
    ) -> Result<()> {
        if self.eat(token) {
            Ok(())
        }
        else {
            bail!("expected '{}' at offset {}", token, self.pos)
        }
    }

    fn parse_range(&mut self) -> Result<Range> {
        if self.eat("complement(") {
            let inner = self.parse_range()?;
            self.expect(")")?;
            return Ok(Range::complement(inner));
        }
        if self.eat("join(") || self.eat("order(") {
            let mut parts = vec![self.parse_range()?];
            while self.eat(",") {
                parts.push(self.parse_range()?);
            }
            self.expect(")")?;
            return Ok(Range::Joined(parts));
        }
        self.parse_interval()
    }

    fn parse_interval(&mut self) -> Result<Range> {
        let start = self.parse_int()?;
        if self.eat("..") {
            let end = self.parse_int()?;
            Ok(Range::Span(start, end))
        }
        else {
            Ok(Range::Span(start, start))
        }
    }

    fn parse_int(&mut self) -> Result<u64> {
        let digits = self
            .rest()
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits == 0 {
            bail!("expected an integer at offset {}", self.pos);
        }
        let value = self.text[self.pos..self.pos + digits]
            .parse()
            .map_err(|_| {
                anyhow!("integer out of range at offset {}", self.pos)
            })?;
        self.pos += digits;
        Ok(value)
    }
}
