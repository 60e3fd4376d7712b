//! Process-wide logging setup shared by the server binary and tests.

/// Initialize tracing with the default `info` filter.
///
/// Safe to call multiple times; subsequent calls become no-ops and return
/// `false`.
pub fn init() -> bool {
    tracing::init(tracing::DEFAULT_FILTER)
}

/// Tracing subscriber configuration (filters, output format).
pub mod tracing;

#[cfg(test)]
mod tests {
    #[test]
    fn init_reports_whether_it_installed() {
        super::init();
        assert!(!super::init());
    }
}
