//! Post-processing that merges names differing only in backtick quoting.
//!
//! Extraction keeps literal text; callers opt into this step explicitly.

use indexmap::{IndexMap, IndexSet};
use sqltables_domain::{QualifiedName, TableName};

use crate::table_scanner::ExtractedTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnquotedTable {
    pub name: QualifiedName,
    pub occurrences: usize,
}

/// Unquotes each name and drops duplicates, keeping first-occurrence order.
pub fn unquote_names(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|name| TableName::new(name.as_str()).qualified_name().to_string())
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

/// Unquotes extracted tables, summing occurrences of names that collapse.
pub fn unquote_tables(tables: &[ExtractedTable]) -> Vec<UnquotedTable> {
    let mut merged: IndexMap<QualifiedName, usize> = IndexMap::new();
    for table in tables {
        *merged.entry(table.name.qualified_name()).or_insert(0) += table.occurrences;
    }
    merged
        .into_iter()
        .map(|(name, occurrences)| UnquotedTable { name, occurrences })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table_scanner::TableNameExtractor;
    use rstest::rstest;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    mod unquote_names {
        use super::*;

        #[rstest]
        #[case(&["`orders`", "orders"], &["orders"])]
        #[case(&["`db`.`t`", "db.t", "`db`.t"], &["db.t"])]
        #[case(&["b", "`a`", "b"], &["b", "a"])]
        #[case(&[], &[])]
        fn merges_quoting_variants(#[case] input: &[&str], #[case] expected: &[&str]) {
            assert_eq!(super::super::unquote_names(&strings(input)), expected);
        }

        #[test]
        fn keeps_unrecognized_text_verbatim() {
            assert_eq!(super::super::unquote_names(&strings(&["`"])), vec!["`"]);
        }
    }

    mod unquote_tables {
        use super::*;

        #[test]
        fn sums_occurrences_of_collapsed_names() {
            let tables = TableNameExtractor::new()
                .extract("SELECT * FROM `orders` JOIN orders o ON 1 JOIN users ON 1 JOIN orders o3 ON 1");

            let unquoted = super::super::unquote_tables(&tables);

            assert_eq!(unquoted.len(), 2);
            assert_eq!(unquoted[0].name.to_string(), "orders");
            assert_eq!(unquoted[0].occurrences, 3);
            assert_eq!(unquoted[1].name.to_string(), "users");
            assert_eq!(unquoted[1].occurrences, 1);
        }

        #[test]
        fn keeps_schema_part() {
            let tables = TableNameExtractor::new().extract("UPDATE `shop`.`orders` SET a = 1");

            let unquoted = super::super::unquote_tables(&tables);

            assert_eq!(unquoted[0].name.schema.as_deref(), Some("shop"));
            assert_eq!(unquoted[0].name.table, "orders");
        }
    }
}
