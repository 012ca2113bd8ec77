//! ASCII circuit diagrams.

use alsvid_ir::{Circuit, Gate};

use crate::label::format_angle;
use crate::layout::{columns, span};

/// Render a circuit as a text diagram, one wire row per qubit.
///
/// Controls are `●`, phase boxes are `P(θ)`, swap endpoints are `X`, and
/// verticals connect the operands of two-qubit gates. The empty circuit
/// renders to an empty string.
pub fn draw_text(circuit: &Circuit) -> String {
    let nq = circuit.num_qubits();
    if nq == 0 {
        return String::new();
    }

    let prefixes: Vec<String> = circuit.qubits().iter().map(|q| format!("{q}: ")).collect();
    let prefix_w = prefixes.iter().map(|p| p.chars().count()).max().unwrap_or(0);

    // wire rows at even indices, connector rows between them
    let mut rows: Vec<String> = Vec::with_capacity(2 * nq - 1);
    for (i, prefix) in prefixes.iter().enumerate() {
        rows.push(format!("{prefix:>prefix_w$}"));
        if i + 1 < nq {
            rows.push(" ".repeat(prefix_w));
        }
    }

    for column in columns(circuit) {
        let mut labels: Vec<Option<String>> = vec![None; nq];
        let mut vspans: Vec<(usize, usize)> = vec![];
        for op in column {
            match op.gate {
                Gate::H => labels[op.qubits[0].0 as usize] = Some("H".to_string()),
                Gate::CP(theta) => {
                    labels[op.qubits[0].0 as usize] = Some("●".to_string());
                    labels[op.qubits[1].0 as usize] = Some(format!("P({})", format_angle(theta)));
                    vspans.push(span(op));
                }
                Gate::Swap => {
                    labels[op.qubits[0].0 as usize] = Some("X".to_string());
                    labels[op.qubits[1].0 as usize] = Some("X".to_string());
                    vspans.push(span(op));
                }
            }
        }

        let label_w = labels
            .iter()
            .flatten()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(1);
        let cell_w = label_w + 2;
        let center = (cell_w - 1) / 2;

        for w in 0..nq {
            let row = &mut rows[2 * w];
            match &labels[w] {
                Some(label) => {
                    let len = label.chars().count();
                    let left = (cell_w - len) / 2;
                    row.push_str(&"─".repeat(left));
                    row.push_str(label);
                    row.push_str(&"─".repeat(cell_w - left - len));
                }
                None => {
                    if vspans.iter().any(|&(lo, hi)| lo < w && w < hi) {
                        row.push_str(&"─".repeat(center));
                        row.push('┼');
                        row.push_str(&"─".repeat(cell_w - center - 1));
                    } else {
                        row.push_str(&"─".repeat(cell_w));
                    }
                }
            }

            if w + 1 < nq {
                let conn = &mut rows[2 * w + 1];
                if vspans.iter().any(|&(lo, hi)| lo <= w && w + 1 <= hi) {
                    conn.push_str(&" ".repeat(center));
                    conn.push('│');
                    conn.push_str(&" ".repeat(cell_w - center - 1));
                } else {
                    conn.push_str(&" ".repeat(cell_w));
                }
            }
        }
    }

    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        if i % 2 == 0 {
            out.push_str(row);
            out.push('─');
        } else {
            out.push_str(row.trim_end());
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsvid_ir::QubitId;
    use alsvid_synth::qft_circuit;
    use std::f64::consts::PI;

    #[test]
    fn test_empty_circuit_renders_empty() {
        assert_eq!(draw_text(&Circuit::new("empty")), "");
    }

    #[test]
    fn test_single_hadamard() {
        let mut circuit = Circuit::with_size("t", 1);
        circuit.h(QubitId(0)).unwrap();

        let text = draw_text(&circuit);
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("q[0]: "));
        assert!(text.contains("─H─"));
    }

    #[test]
    fn test_controlled_phase_drawing() {
        let mut circuit = Circuit::with_size("t", 2);
        circuit.cp(PI / 2.0, QubitId(0), QubitId(1)).unwrap();

        let text = draw_text(&circuit);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains('●'));
        assert!(lines[1].contains('│'));
        assert!(lines[2].contains("P(π/2)"));
    }

    #[test]
    fn test_crossing_wire_marked() {
        let mut circuit = Circuit::with_size("t", 3);
        circuit.cp(PI / 4.0, QubitId(0), QubitId(2)).unwrap();

        let text = draw_text(&circuit);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[2].contains('┼'), "middle wire must show the crossing");
        assert!(lines[1].contains('│'));
        assert!(lines[3].contains('│'));
    }

    #[test]
    fn test_qft_three_qubits() {
        let circuit = qft_circuit(3).unwrap();
        let text = draw_text(&circuit);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("q[0]: "));
        assert!(lines[2].starts_with("q[1]: "));
        assert!(lines[4].starts_with("q[2]: "));

        // the ladder lands on the top wire of the diagram's bottom row
        assert!(lines[4].contains("─H─"));
        assert!(lines[4].contains("P(π/4)"));
        assert!(lines[4].contains("P(π/2)"));
        // the final swap joins the outer wires
        assert!(lines[0].contains('X'));
        assert!(lines[4].contains('X'));
        assert!(!lines[2].contains('X'));
    }

    #[test]
    fn test_wire_rows_share_width() {
        let circuit = qft_circuit(4).unwrap();
        let text = draw_text(&circuit);
        let widths: Vec<usize> = text
            .lines()
            .step_by(2)
            .map(|l| l.chars().count())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}
