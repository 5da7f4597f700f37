//! Error taxonomy for patch application.

use hangar_buffer::BufferError;
use thiserror::Error;

/// Why a single command could not be applied.
///
/// Rendered into the per-command outcome of the apply report; never fatal to
/// the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyFailure {
    /// The command addresses lines beyond the current document, e.g. the
    /// reply referenced stale line numbers.
    #[error("out of range")]
    OutOfRange,

    #[error(transparent)]
    Buffer(#[from] BufferError),
}
