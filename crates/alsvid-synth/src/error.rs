//! Error types for circuit synthesis.

use alsvid_ir::IrError;
use thiserror::Error;

/// Errors that can occur while synthesizing a gate sequence.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SynthError {
    /// The transform was asked for more qubits than the target circuit has.
    #[error("transform needs {requested} qubits but the circuit has {available}")]
    QubitCountExceeded {
        /// Qubit count the transform was asked for.
        requested: u32,
        /// Qubit count the target circuit actually has.
        available: u32,
    },

    /// An underlying circuit operation failed.
    #[error(transparent)]
    Ir(#[from] IrError),
}

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;
