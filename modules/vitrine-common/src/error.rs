use thiserror::Error;

/// Every failure the service surfaces, from any layer.
///
/// Comparison scoring never produces an error: unmatched ids and an empty
/// product set are defined outcomes and stay out of this enum.
#[derive(Error, Debug)]
pub enum VitrineError {
    #[error("Product {0} not found")]
    NotFound(i32),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Blog service rejected the post (status {status}): {body}")]
    BlogRejected { status: u16, body: String },

    #[error("Blog service unreachable: {0}")]
    BlogUnavailable(String),

    #[error("Missing resource: {0}")]
    MissingResource(String),

    // A child killed by a signal is recorded with exit code -1.
    #[error("Posting script failed (exit code {exit_code}): {output}")]
    ScriptFailed { exit_code: i32, output: String },

    // Staging or spawn faults, before any exit status existed.
    #[error("Tweet posting failed: {0}")]
    PostingFailed(String),

    #[error("Store failure: {0}")]
    Store(String),
}
