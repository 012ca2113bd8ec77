//! High-level circuit builder API.

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::instruction::Instruction;
use crate::qubit::{Qubit, QubitId};

/// A quantum circuit.
///
/// The circuit is an ordered, append-only list of gate operations over a
/// fixed set of qubits. Insertion order is significant and preserved
/// exactly: nothing here re-schedules or optimizes the sequence.
#[derive(Debug)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Qubits in the circuit.
    qubits: Vec<Qubit>,
    /// Operations in insertion order.
    ops: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qubits: vec![],
            ops: vec![],
        }
    }

    /// Create a circuit with a given number of qubits in a register `"q"`.
    pub fn with_size(name: impl Into<String>, num_qubits: u32) -> Self {
        let mut circuit = Self::new(name);
        circuit.add_qreg("q", num_qubits);
        circuit
    }

    /// Add a single qubit to the circuit.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId(self.qubits.len() as u32);
        self.qubits.push(Qubit::new(id));
        id
    }

    /// Add a quantum register with multiple qubits.
    pub fn add_qreg(&mut self, name: impl Into<String>, size: u32) -> Vec<QubitId> {
        let name = name.into();
        let mut ids = vec![];
        for i in 0..size {
            let id = QubitId(self.qubits.len() as u32);
            self.qubits.push(Qubit::with_register(id, &name, i));
            ids.push(id);
        }
        ids
    }

    // =========================================================================
    // Gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.check_qubit(qubit, &Gate::H)?;
        self.ops.push(Instruction::single(Gate::H, qubit));
        Ok(self)
    }

    /// Apply controlled-phase gate.
    pub fn cp(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        let gate = Gate::CP(theta);
        self.check_pair(control, target, &gate)?;
        self.ops.push(Instruction::pair(gate, control, target));
        Ok(self)
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.check_pair(q1, q2, &Gate::Swap)?;
        self.ops.push(Instruction::pair(Gate::Swap, q1, q2));
        Ok(self)
    }

    fn check_qubit(&self, qubit: QubitId, gate: &Gate) -> IrResult<()> {
        if (qubit.0 as usize) < self.qubits.len() {
            Ok(())
        } else {
            Err(IrError::QubitNotFound {
                qubit,
                gate_name: Some(gate.name().to_string()),
            })
        }
    }

    fn check_pair(&self, q1: QubitId, q2: QubitId, gate: &Gate) -> IrResult<()> {
        self.check_qubit(q1, gate)?;
        self.check_qubit(q2, gate)?;
        if q1 == q2 {
            return Err(IrError::DuplicateQubit {
                qubit: q1,
                gate_name: Some(gate.name().to_string()),
            });
        }
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the qubits in the circuit.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Get the operations in insertion order.
    pub fn ops(&self) -> &[Instruction] {
        &self.ops
    }

    /// Get the total number of operations.
    pub fn num_ops(&self) -> usize {
        self.ops.len()
    }

    /// Check whether the circuit contains no operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Get the circuit depth: the length of the longest per-wire schedule,
    /// with each operation placed as early as its operands allow.
    pub fn depth(&self) -> usize {
        let mut wire = vec![0_usize; self.qubits.len()];
        for op in &self.ops {
            let d = op
                .qubits
                .iter()
                .map(|q| wire[q.0 as usize])
                .max()
                .unwrap_or(0);
            for q in &op.qubits {
                wire[q.0 as usize] = d + 1;
            }
        }
        wire.into_iter().max().unwrap_or(0)
    }
}

impl Clone for Circuit {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            qubits: self.qubits.clone(),
            ops: self.ops.clone(),
        }
    }
}
