use sqltables_domain::{ClauseKeyword, IdentifierShape, TableName};

/// Receives progress notifications from a table-name scan.
///
/// Every hook defaults to a no-op, so adapters only implement what they need.
/// Offsets are byte positions in the whitespace-normalized query.
#[cfg_attr(test, mockall::automock)]
pub trait ScanObserver: Send + Sync {
    fn keyword_matched(&self, _keyword: ClauseKeyword, _offset: usize) {}

    fn table_recorded(&self, _name: &TableName, _shape: IdentifierShape, _occurrences: usize) {}

    fn name_unrecognized(&self, _keyword: ClauseKeyword, _offset: usize) {}
}
