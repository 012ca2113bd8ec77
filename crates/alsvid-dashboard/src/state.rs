//! Application state for the dashboard server.

use std::net::SocketAddr;

/// Dashboard configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,
    /// Qubit count used when a request does not specify one.
    pub default_qubits: u32,
    /// Maximum qubits for circuit visualization (performance limit).
    pub max_circuit_qubits: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind_address: ([127, 0, 0, 1], 3000).into(),
            default_qubits: 3,
            max_circuit_qubits: 50,
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// Dashboard configuration.
    pub config: DashboardConfig,
}

impl AppState {
    /// Create a new application state with default configuration.
    pub fn new() -> Self {
        Self {
            config: DashboardConfig::default(),
        }
    }

    /// Create application state with custom configuration.
    pub fn with_config(config: DashboardConfig) -> Self {
        Self { config }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
