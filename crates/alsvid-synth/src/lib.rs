//! Quantum Fourier Transform gate-sequence synthesis.
//!
//! This crate turns a qubit count into the exact gate sequence of the QFT:
//! the recursive Hadamard / controlled-phase ladder, then a qubit-order
//! reversal. It emits into anything implementing the small [`GateSink`]
//! trait, so the routine does not care what the circuit type is — the
//! [`alsvid_ir::Circuit`] implementation is provided.
//!
//! # Example
//!
//! ```rust
//! use alsvid_synth::qft_circuit;
//!
//! let circuit = qft_circuit(3).unwrap();
//! // 3 Hadamards, 3 controlled phases, 1 swap
//! assert_eq!(circuit.num_ops(), 7);
//! ```

pub mod error;
pub mod qft;

pub use error::{SynthError, SynthResult};
pub use qft::{GateSink, apply_rotations, qft, qft_circuit, reverse_order};
