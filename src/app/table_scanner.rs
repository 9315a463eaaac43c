//! Heuristic table-name scanner.
//!
//! The query is whitespace-normalized once, then walked token by token. After
//! each clause keyword (FROM, JOIN, UPDATE, INTO) one identifier is read in one
//! of five shapes and its literal text is recorded. String literals and
//! comments are not skipped.

use std::sync::Arc;

use indexmap::IndexMap;
use sqltables_domain::{ClauseKeyword, IdentifierShape, TableName};

use crate::ports::ScanObserver;

type ShapeMatcher = fn(&str) -> Option<usize>;

/// Shapes in priority order; the first matcher that succeeds wins.
const SHAPE_MATCHERS: [(IdentifierShape, ShapeMatcher); 5] = [
    (IdentifierShape::QuotedQualified, quoted_qualified),
    (IdentifierShape::QuotedSchemaQualified, quoted_schema_qualified),
    (IdentifierShape::Qualified, qualified),
    (IdentifierShape::Quoted, quoted),
    (IdentifierShape::Bare, bare),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTable {
    pub name: TableName,
    /// Shape of the first occurrence.
    pub shape: IdentifierShape,
    pub occurrences: usize,
}

#[derive(Clone, Default)]
pub struct TableNameExtractor {
    observer: Option<Arc<dyn ScanObserver>>,
}

impl TableNameExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observer(observer: Arc<dyn ScanObserver>) -> Self {
        Self {
            observer: Some(observer),
        }
    }

    /// Returns the distinct table names in first-occurrence order.
    pub fn parse(&self, query: &str) -> Vec<String> {
        self.extract(query)
            .into_iter()
            .map(|table| table.name.into_string())
            .collect()
    }

    /// Like [`parse`](Self::parse), keeping shape and occurrence count per name.
    pub fn extract(&self, query: &str) -> Vec<ExtractedTable> {
        let buffer = normalize_whitespace(query);
        let mut scan = Scan::new(&buffer);
        let mut tables: IndexMap<TableName, (IdentifierShape, usize)> = IndexMap::new();

        while let Some(token) = scan.next_token() {
            let Some(keyword) = ClauseKeyword::match_token(token) else {
                continue;
            };
            let offset = scan.cursor;
            self.notify(|observer| observer.keyword_matched(keyword, offset));

            match scan.recognize_name() {
                Some((text, shape)) if text.chars().any(is_word_char) => {
                    let name = TableName::new(text);
                    let entry = tables.entry(name.clone()).or_insert((shape, 0));
                    entry.1 += 1;
                    let occurrences = entry.1;
                    self.notify(|observer| observer.table_recorded(&name, shape, occurrences));
                }
                _ => self.notify(|observer| observer.name_unrecognized(keyword, offset)),
            }
        }

        tables
            .into_iter()
            .map(|(name, (shape, occurrences))| ExtractedTable {
                name,
                shape,
                occurrences,
            })
            .collect()
    }

    fn notify(&self, event: impl FnOnce(&dyn ScanObserver)) {
        if let Some(observer) = &self.observer {
            event(observer.as_ref());
        }
    }
}

/// Collapses every whitespace run to a single ASCII space. Leading and
/// trailing runs are collapsed, not trimmed.
pub fn normalize_whitespace(query: &str) -> String {
    let mut buffer = String::with_capacity(query.len());
    let mut in_run = false;
    for c in query.chars() {
        if c.is_whitespace() {
            if !in_run {
                buffer.push(' ');
            }
            in_run = true;
        } else {
            buffer.push(c);
            in_run = false;
        }
    }
    buffer
}

/// Per-call cursor over a normalized buffer.
struct Scan<'a> {
    buffer: &'a str,
    cursor: usize,
}

impl<'a> Scan<'a> {
    fn new(buffer: &'a str) -> Self {
        Self { buffer, cursor: 0 }
    }

    /// Reads up to the next space and moves the cursor past it.
    fn next_token(&mut self) -> Option<&'a str> {
        let rest = self.buffer.get(self.cursor..).filter(|rest| !rest.is_empty())?;
        let (token, consumed) = match rest.find(' ') {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };
        self.cursor += consumed;
        Some(token)
    }

    /// Matches an identifier starting exactly at the cursor. The cursor only
    /// moves on success.
    fn recognize_name(&mut self) -> Option<(&'a str, IdentifierShape)> {
        let rest = self.buffer.get(self.cursor..)?;
        let (len, shape) = match_identifier(rest)?;
        self.cursor += len;
        Some((&rest[..len], shape))
    }
}

fn match_identifier(text: &str) -> Option<(usize, IdentifierShape)> {
    SHAPE_MATCHERS
        .iter()
        .find_map(|(shape, matcher)| matcher(text).map(|len| (len, *shape)))
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Backtick, one or more non-backtick chars, backtick.
fn quoted_ident(text: &str) -> Option<usize> {
    let inner = text.strip_prefix('`')?;
    let close = inner.find('`')?;
    (close > 0).then_some(close + 2)
}

fn word(text: &str) -> Option<usize> {
    let len = text
        .find(|c: char| !is_word_char(c))
        .unwrap_or(text.len());
    (len > 0).then_some(len)
}

fn dotted(text: &str, head: usize, tail: ShapeMatcher) -> Option<usize> {
    let after = text[head..].strip_prefix('.')?;
    tail(after).map(|len| head + 1 + len)
}

fn undotted(text: &str, len: usize) -> Option<usize> {
    (!text[len..].starts_with('.')).then_some(len)
}

fn quoted_qualified(text: &str) -> Option<usize> {
    dotted(text, quoted_ident(text)?, quoted_ident)
}

fn quoted_schema_qualified(text: &str) -> Option<usize> {
    dotted(text, quoted_ident(text)?, word)
}

fn qualified(text: &str) -> Option<usize> {
    dotted(text, word(text)?, word)
}

fn quoted(text: &str) -> Option<usize> {
    undotted(text, quoted_ident(text)?)
}

fn bare(text: &str) -> Option<usize> {
    undotted(text, word(text)?)
}
