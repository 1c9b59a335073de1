use thiserror::Error;

/// Errors that can occur on the I/O surface of a calculation.
///
/// The geometric core itself never fails: empty geometry, degenerate
/// intervals and pathological crossings all resolve to zero-area results
/// by policy. Only reading an input document or writing an export can err.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CalcError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid input document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write export: {0}")]
    Csv(#[from] csv::Error),
}
