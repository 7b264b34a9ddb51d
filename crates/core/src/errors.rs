use thiserror::Error;

/// Unified error type for the entire stock-chart-core library.
/// Every fallible public function returns `Result<T, ChartError>`.
#[derive(Debug, Error)]
pub enum ChartError {
    // ── Series / Range ──────────────────────────────────────────────
    #[error("Cannot compute a price range from an empty series")]
    EmptySeries,

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid chart configuration: {0}")]
    InvalidConfig(String),

    // ── Data feed ───────────────────────────────────────────────────
    #[error("Malformed feed payload: {0}")]
    FeedFormat(String),

    #[error("Invalid numeric field '{field}' for period {period}: {value}")]
    FieldFormat {
        field: &'static str,
        period: String,
        value: String,
    },

    // ── Colors ──────────────────────────────────────────────────────
    #[error("Invalid color literal: {0}")]
    ColorFormat(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for ChartError {
    fn from(e: serde_json::Error) -> Self {
        ChartError::FeedFormat(e.to_string())
    }
}
