//! Quantum Fourier Transform synthesis.
//!
//! The QFT on `n` qubits decomposes into a Hadamard / controlled-phase
//! ladder followed by a qubit-order reversal. [`apply_rotations`] emits the
//! ladder, [`reverse_order`] emits the swaps, and [`qft`] composes the two;
//! all three write into any [`GateSink`].

use std::f64::consts::PI;

use alsvid_ir::{Circuit, IrResult, QubitId};

use crate::error::{SynthError, SynthResult};

/// The gate insertions a synthesis target must support.
///
/// Implementors append operations in call order; the synthesis routines
/// rely on that order being preserved.
pub trait GateSink {
    /// Number of qubits the sink can address.
    fn num_qubits(&self) -> u32;

    /// Append a Hadamard gate.
    fn hadamard(&mut self, qubit: QubitId) -> IrResult<()>;

    /// Append a controlled-phase gate with `theta` in radians.
    fn controlled_phase(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<()>;

    /// Append a swap gate.
    fn swap(&mut self, a: QubitId, b: QubitId) -> IrResult<()>;
}

impl GateSink for Circuit {
    fn num_qubits(&self) -> u32 {
        Circuit::num_qubits(self) as u32
    }

    fn hadamard(&mut self, qubit: QubitId) -> IrResult<()> {
        self.h(qubit).map(|_| ())
    }

    fn controlled_phase(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<()> {
        self.cp(theta, control, target).map(|_| ())
    }

    fn swap(&mut self, a: QubitId, b: QubitId) -> IrResult<()> {
        Circuit::swap(self, a, b).map(|_| ())
    }
}

fn check_capacity<S: GateSink>(sink: &S, n: u32) -> SynthResult<()> {
    let available = sink.num_qubits();
    if n > available {
        return Err(SynthError::QubitCountExceeded {
            requested: n,
            available,
        });
    }
    Ok(())
}

/// Emit the QFT rotation ladder on the first `n` qubits (without swaps).
///
/// Qubit `n − 1` receives a Hadamard and then a controlled phase from every
/// lower qubit `q` with angle `π / 2^(n − 1 − q)`, and the same pattern
/// recurses downward until qubit 0, which receives only a Hadamard.
///
/// Fails before emitting anything if `n` exceeds the sink's qubit count.
pub fn apply_rotations<S: GateSink>(sink: &mut S, n: u32) -> SynthResult<()> {
    check_capacity(sink, n)?;
    rotations(sink, n)
}

fn rotations<S: GateSink>(sink: &mut S, n: u32) -> SynthResult<()> {
    if n == 0 {
        return Ok(());
    }
    let m = n - 1;
    sink.hadamard(QubitId(m))?;
    for q in 0..m {
        // powi instead of a bit shift keeps the angle defined past 63 qubits
        let theta = PI / 2_f64.powi((m - q) as i32);
        sink.controlled_phase(theta, QubitId(q), QubitId(m))?;
    }
    rotations(sink, m)
}

/// Emit the qubit-order reversal: swap qubit `k` with qubit `n − k − 1`
/// for every pair. For `n ≤ 1` no gate is emitted.
///
/// Fails before emitting anything if `n` exceeds the sink's qubit count.
pub fn reverse_order<S: GateSink>(sink: &mut S, n: u32) -> SynthResult<()> {
    check_capacity(sink, n)?;
    for k in 0..n / 2 {
        sink.swap(QubitId(k), QubitId(n - k - 1))?;
    }
    Ok(())
}

/// Emit the full QFT on the first `n` qubits: the rotation ladder followed
/// by the qubit-order reversal.
///
/// The order is load-bearing — the rotations address the natural qubit
/// ordering, and the reversal is a relabeling pass applied last.
pub fn qft<S: GateSink>(sink: &mut S, n: u32) -> SynthResult<()> {
    apply_rotations(sink, n)?;
    reverse_order(sink, n)
}

/// Build a fresh `n`-qubit circuit named `"qft"` containing the transform.
pub fn qft_circuit(n: u32) -> SynthResult<Circuit> {
    let mut circuit = Circuit::with_size("qft", n);
    qft(&mut circuit, n)?;
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsvid_ir::Gate;

    /// Test sink that records calls without validating anything.
    #[derive(Debug, Default)]
    struct Recorder {
        capacity: u32,
        ops: Vec<RecordedOp>,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum RecordedOp {
        H(u32),
        CP(f64, u32, u32),
        Swap(u32, u32),
    }

    impl Recorder {
        fn new(capacity: u32) -> Self {
            Self {
                capacity,
                ops: vec![],
            }
        }
    }

    impl GateSink for Recorder {
        fn num_qubits(&self) -> u32 {
            self.capacity
        }

        fn hadamard(&mut self, qubit: QubitId) -> IrResult<()> {
            self.ops.push(RecordedOp::H(qubit.0));
            Ok(())
        }

        fn controlled_phase(
            &mut self,
            theta: f64,
            control: QubitId,
            target: QubitId,
        ) -> IrResult<()> {
            self.ops.push(RecordedOp::CP(theta, control.0, target.0));
            Ok(())
        }

        fn swap(&mut self, a: QubitId, b: QubitId) -> IrResult<()> {
            self.ops.push(RecordedOp::Swap(a.0, b.0));
            Ok(())
        }
    }

    #[test]
    fn test_qft_three_qubits_exact_sequence() {
        let mut sink = Recorder::new(3);
        qft(&mut sink, 3).unwrap();

        assert_eq!(
            sink.ops,
            vec![
                RecordedOp::H(2),
                RecordedOp::CP(PI / 4.0, 0, 2),
                RecordedOp::CP(PI / 2.0, 1, 2),
                RecordedOp::H(1),
                RecordedOp::CP(PI / 2.0, 0, 1),
                RecordedOp::H(0),
                RecordedOp::Swap(0, 2),
            ]
        );
    }

    #[test]
    fn test_zero_qubits_is_a_no_op() {
        let mut sink = Recorder::new(0);
        apply_rotations(&mut sink, 0).unwrap();
        reverse_order(&mut sink, 0).unwrap();
        qft(&mut sink, 0).unwrap();
        assert!(sink.ops.is_empty());
    }

    #[test]
    fn test_single_qubit_is_one_hadamard() {
        let mut sink = Recorder::new(1);
        qft(&mut sink, 1).unwrap();
        assert_eq!(sink.ops, vec![RecordedOp::H(0)]);
    }

    #[test]
    fn test_reverse_order_four_qubits() {
        let mut sink = Recorder::new(4);
        reverse_order(&mut sink, 4).unwrap();
        assert_eq!(
            sink.ops,
            vec![RecordedOp::Swap(0, 3), RecordedOp::Swap(1, 2)]
        );
    }

    #[test]
    fn test_reverse_order_leaves_middle_qubit_alone() {
        let mut sink = Recorder::new(5);
        reverse_order(&mut sink, 5).unwrap();
        assert_eq!(
            sink.ops,
            vec![RecordedOp::Swap(0, 4), RecordedOp::Swap(1, 3)]
        );
    }

    #[test]
    fn test_capacity_checked_before_emitting() {
        let mut circuit = Circuit::with_size("small", 2);
        let err = apply_rotations(&mut circuit, 3).unwrap_err();
        assert!(matches!(
            err,
            SynthError::QubitCountExceeded {
                requested: 3,
                available: 2,
            }
        ));
        assert!(circuit.is_empty());

        let err = reverse_order(&mut circuit, 3).unwrap_err();
        assert!(matches!(err, SynthError::QubitCountExceeded { .. }));
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_qft_on_wider_circuit_touches_prefix_only() {
        let mut circuit = Circuit::with_size("wide", 5);
        qft(&mut circuit, 3).unwrap();

        // 3 H + 3 CP + 1 swap, none addressing qubits 3 or 4
        assert_eq!(circuit.num_ops(), 7);
        assert!(
            circuit
                .ops()
                .iter()
                .flat_map(|op| op.qubits.iter())
                .all(|q| q.0 < 3)
        );
    }

    #[test]
    fn test_qft_circuit_matches_sink_sequence() {
        let circuit = qft_circuit(4).unwrap();
        let mut sink = Recorder::new(4);
        qft(&mut sink, 4).unwrap();

        assert_eq!(circuit.num_qubits(), 4);
        assert_eq!(circuit.num_ops(), sink.ops.len());
        for (inst, recorded) in circuit.ops().iter().zip(&sink.ops) {
            let expect = match *recorded {
                RecordedOp::H(q) => (Gate::H, vec![QubitId(q)]),
                RecordedOp::CP(t, c, q) => (Gate::CP(t), vec![QubitId(c), QubitId(q)]),
                RecordedOp::Swap(a, b) => (Gate::Swap, vec![QubitId(a), QubitId(b)]),
            };
            assert_eq!(inst.gate, expect.0);
            assert_eq!(inst.qubits, expect.1);
        }
    }

    #[test]
    fn test_deterministic() {
        let a = qft_circuit(6).unwrap();
        let b = qft_circuit(6).unwrap();
        assert_eq!(a.ops(), b.ops());
    }
}
