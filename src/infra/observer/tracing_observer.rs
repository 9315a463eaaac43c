use sqltables_app::ports::ScanObserver;
use sqltables_domain::{ClauseKeyword, IdentifierShape, TableName};
use tracing::{debug, trace};

/// Forwards scan events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingScanObserver;

impl TracingScanObserver {
    pub fn new() -> Self {
        Self
    }
}

impl ScanObserver for TracingScanObserver {
    fn keyword_matched(&self, keyword: ClauseKeyword, offset: usize) {
        trace!(%keyword, offset, "clause keyword matched");
    }

    fn table_recorded(&self, name: &TableName, shape: IdentifierShape, occurrences: usize) {
        debug!(table = %name, ?shape, occurrences, "table name recorded");
    }

    fn name_unrecognized(&self, keyword: ClauseKeyword, offset: usize) {
        debug!(%keyword, offset, "no table name after keyword");
    }
}
