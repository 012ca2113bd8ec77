//! Data Transfer Objects for the dashboard API.

use serde::{Deserialize, Serialize};

use alsvid_ir::Circuit;

// ============================================================================
// Circuit DTOs
// ============================================================================

/// Request to build a QFT circuit.
#[derive(Debug, Deserialize)]
pub struct QftRequest {
    /// Desired qubit count. Falls back to the configured default when absent.
    ///
    /// Parsed wide and signed so out-of-range values reach validation
    /// instead of failing deserialization with an opaque message.
    pub num_qubits: Option<i64>,
}

/// A built circuit, rendered for display.
#[derive(Debug, Serialize)]
pub struct QftCircuitResponse {
    /// Circuit name.
    pub name: String,
    /// Number of qubits.
    pub num_qubits: usize,
    /// Circuit depth.
    pub depth: usize,
    /// Total number of gate operations.
    pub num_ops: usize,
    /// Base64-encoded image for inline `data:` display.
    pub image_data: String,
    /// Media type of the encoded image.
    pub image_media_type: String,
    /// ASCII wire diagram.
    pub text_diagram: String,
}

impl QftCircuitResponse {
    /// Assemble the response from a circuit and its renderings.
    pub fn new(circuit: &Circuit, image_data: String, text_diagram: String) -> Self {
        Self {
            name: circuit.name().to_string(),
            num_qubits: circuit.num_qubits(),
            depth: circuit.depth(),
            num_ops: circuit.num_ops(),
            image_data,
            image_media_type: "image/svg+xml".to_string(),
            text_diagram,
        }
    }
}

// ============================================================================
// Health check response
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status (always "ok" if responding).
    pub status: String,
    /// Dashboard version.
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
