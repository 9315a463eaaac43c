use std::fmt;

use serde::{Serialize, Serializer};

/// Which identifier form a table name was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierShape {
    /// `` `db`.`table` ``
    QuotedQualified,
    /// `` `db`.table ``
    QuotedSchemaQualified,
    /// `db.table`
    Qualified,
    /// `` `table` ``
    Quoted,
    /// `table`
    Bare,
}

impl IdentifierShape {
    pub fn is_qualified(self) -> bool {
        matches!(
            self,
            IdentifierShape::QuotedQualified
                | IdentifierShape::QuotedSchemaQualified
                | IdentifierShape::Qualified
        )
    }
}

/// Table name exactly as it appeared in the query text, backticks included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(String);

impl TableName {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Splits the literal into schema and table parts with backticks removed.
    pub fn qualified_name(&self) -> QualifiedName {
        let (head, rest) = split_head(&self.0);
        match rest.strip_prefix('.') {
            Some(table) if !table.is_empty() => QualifiedName {
                schema: Some(unquote_part(head).to_string()),
                table: unquote_part(table).to_string(),
            },
            _ => QualifiedName {
                schema: None,
                table: unquote_part(&self.0).to_string(),
            },
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for TableName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

fn split_head(text: &str) -> (&str, &str) {
    if let Some(inner) = text.strip_prefix('`')
        && let Some(close) = inner.find('`')
        && close > 0
    {
        return text.split_at(close + 2);
    }
    match text.find('.') {
        Some(dot) => text.split_at(dot),
        None => (text, ""),
    }
}

fn unquote_part(part: &str) -> &str {
    part.strip_prefix('`')
        .and_then(|inner| inner.strip_suffix('`'))
        .filter(|inner| !inner.is_empty())
        .unwrap_or(part)
}

/// Unquoted `schema.table` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub schema: Option<String>,
    pub table: String,
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{}.{}", schema, self.table),
            None => write!(f, "{}", self.table),
        }
    }
}
