//! Quantum gate types.

use serde::{Deserialize, Serialize};

/// The gates a Fourier-transform circuit is built from.
///
/// This is deliberately not a general gate set: the synthesis layer only
/// ever emits Hadamards, controlled phases, and swaps, and the renderers
/// only know how to draw these three.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// Hadamard gate.
    H,
    /// Controlled-phase gate with angle in radians.
    CP(f64),
    /// SWAP gate.
    Swap,
}

impl Gate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::H => "h",
            Gate::CP(_) => "cp",
            Gate::Swap => "swap",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            Gate::H => 1,
            Gate::CP(_) | Gate::Swap => 2,
        }
    }

    /// Get the phase angle, for gates that carry one.
    pub fn theta(&self) -> Option<f64> {
        match self {
            Gate::CP(theta) => Some(*theta),
            _ => None,
        }
    }
}
