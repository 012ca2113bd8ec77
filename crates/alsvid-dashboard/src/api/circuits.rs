//! QFT circuit construction endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};

use crate::dto::{QftCircuitResponse, QftRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/circuits/qft - Build a QFT circuit and return its renderings.
pub async fn qft(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QftRequest>,
) -> Result<Json<QftCircuitResponse>, ApiError> {
    let requested = req
        .num_qubits
        .unwrap_or_else(|| i64::from(state.config.default_qubits));

    if requested < 1 {
        return Err(ApiError::BadRequest(format!(
            "num_qubits must be at least 1, got {requested}"
        )));
    }
    let max = state.config.max_circuit_qubits;
    if requested > i64::from(max) {
        return Err(ApiError::BadRequest(format!(
            "num_qubits must be at most {max}, got {requested}"
        )));
    }
    let num_qubits = requested as u32;

    let circuit = alsvid_synth::qft_circuit(num_qubits)?;
    tracing::debug!(num_qubits, ops = circuit.num_ops(), "built QFT circuit");

    let image_data = BASE64.encode(alsvid_render::draw_svg(&circuit));
    let text_diagram = alsvid_render::draw_text(&circuit);

    Ok(Json(QftCircuitResponse::new(
        &circuit,
        image_data,
        text_diagram,
    )))
}
