//! Column layout shared by the renderers.

use alsvid_ir::{Circuit, Instruction};

/// Pack operations into visual columns, preserving insertion order.
///
/// Each operation lands in the earliest column where every wire in its
/// min..=max span is free. Claiming the whole span (not just the operation's
/// endpoints) keeps verticals in one column from crossing each other.
pub(crate) fn columns(circuit: &Circuit) -> Vec<Vec<&Instruction>> {
    let mut cols: Vec<Vec<&Instruction>> = vec![];
    let mut wire_depth = vec![0_usize; circuit.num_qubits()];

    for op in circuit.ops() {
        let (lo, hi) = span(op);
        let col = wire_depth[lo..=hi].iter().copied().max().unwrap_or(0);
        if cols.len() <= col {
            cols.resize_with(col + 1, Vec::new);
        }
        cols[col].push(op);
        for depth in &mut wire_depth[lo..=hi] {
            *depth = col + 1;
        }
    }

    cols
}

/// Lowest and highest wire index an operation touches.
pub(crate) fn span(op: &Instruction) -> (usize, usize) {
    let mut lo = usize::MAX;
    let mut hi = 0;
    for q in &op.qubits {
        let i = q.0 as usize;
        lo = lo.min(i);
        hi = hi.max(i);
    }
    if lo == usize::MAX { (0, 0) } else { (lo, hi) }
}
