//! SVG circuit diagrams.
//!
//! The renderer emits a standalone SVG document from the column layout,
//! the same way the text renderer works: no drawing library, just markup
//! generated from the operation list.

use alsvid_ir::{Circuit, Gate};

use crate::label::format_angle;
use crate::layout::{columns, span};

const CHAR_W: usize = 9;
const ROW_H: usize = 44;
const V_PAD: usize = 32;
const BOX_H: usize = 26;
const MIN_COL_W: usize = 44;

/// Render a circuit as a standalone SVG document.
pub fn draw_svg(circuit: &Circuit) -> String {
    let nq = circuit.num_qubits();
    let cols = columns(circuit);

    let wire_labels: Vec<String> = circuit.qubits().iter().map(|q| q.to_string()).collect();
    let label_w = wire_labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        * CHAR_W
        + 16;

    // per-column pixel widths driven by the widest gate label
    let col_widths: Vec<usize> = cols
        .iter()
        .map(|column| {
            let widest = column
                .iter()
                .map(|op| gate_label(&op.gate).chars().count())
                .max()
                .unwrap_or(1);
            MIN_COL_W.max(widest * CHAR_W + 18)
        })
        .collect();

    let width = label_w + col_widths.iter().sum::<usize>() + 24;
    let height = 2 * V_PAD + nq.saturating_sub(1) * ROW_H;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">\n"
    ));
    svg.push_str(
        "<style>\n\
         .wire { stroke: #546e7a; stroke-width: 1.5; }\n\
         .link { stroke: #1565c0; stroke-width: 1.5; }\n\
         .gate { fill: #e3f2fd; stroke: #1565c0; stroke-width: 1.5; }\n\
         .control { fill: #1565c0; }\n\
         .gate-label { font: 13px monospace; text-anchor: middle; dominant-baseline: central; fill: #0d47a1; }\n\
         .qubit-label { font: 13px monospace; text-anchor: end; dominant-baseline: central; fill: #263238; }\n\
         </style>\n",
    );

    let wire_y = |w: usize| V_PAD + w * ROW_H;

    for (w, label) in wire_labels.iter().enumerate() {
        let y = wire_y(w);
        svg.push_str(&format!(
            "<text class=\"qubit-label\" x=\"{x}\" y=\"{y}\">{label}</text>\n",
            x = label_w - 8,
        ));
        svg.push_str(&format!(
            "<line class=\"wire\" x1=\"{label_w}\" y1=\"{y}\" x2=\"{x2}\" y2=\"{y}\"/>\n",
            x2 = width - 12,
        ));
    }

    let mut x = label_w;
    for (column, col_w) in cols.iter().zip(&col_widths) {
        let cx = x + col_w / 2;
        for &op in column {
            let (lo, hi) = span(op);
            match op.gate {
                Gate::H => draw_box(&mut svg, cx, wire_y(lo), "H"),
                Gate::CP(theta) => {
                    let cy = wire_y(op.qubits[0].0 as usize);
                    let ty = wire_y(op.qubits[1].0 as usize);
                    svg.push_str(&format!(
                        "<line class=\"link\" x1=\"{cx}\" y1=\"{y1}\" x2=\"{cx}\" y2=\"{y2}\"/>\n",
                        y1 = wire_y(lo),
                        y2 = wire_y(hi),
                    ));
                    svg.push_str(&format!(
                        "<circle class=\"control\" cx=\"{cx}\" cy=\"{cy}\" r=\"4.5\"/>\n"
                    ));
                    draw_box(&mut svg, cx, ty, &format!("P({})", format_angle(theta)));
                }
                Gate::Swap => {
                    svg.push_str(&format!(
                        "<line class=\"link\" x1=\"{cx}\" y1=\"{y1}\" x2=\"{cx}\" y2=\"{y2}\"/>\n",
                        y1 = wire_y(lo),
                        y2 = wire_y(hi),
                    ));
                    draw_cross(&mut svg, cx, wire_y(lo));
                    draw_cross(&mut svg, cx, wire_y(hi));
                }
            }
        }
        x += col_w;
    }

    svg.push_str("</svg>\n");
    svg
}

fn draw_box(svg: &mut String, cx: usize, cy: usize, label: &str) {
    let bw = (label.chars().count() * CHAR_W + 10).max(BOX_H);
    svg.push_str(&format!(
        "<rect class=\"gate\" x=\"{x}\" y=\"{y}\" width=\"{bw}\" height=\"{BOX_H}\" rx=\"4\"/>\n",
        x = cx - bw / 2,
        y = cy - BOX_H / 2,
    ));
    svg.push_str(&format!(
        "<text class=\"gate-label\" x=\"{cx}\" y=\"{cy}\">{label}</text>\n"
    ));
}

fn draw_cross(svg: &mut String, cx: usize, cy: usize) {
    svg.push_str(&format!(
        "<line class=\"link\" x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\"/>\n",
        x1 = cx - 6,
        y1 = cy - 6,
        x2 = cx + 6,
        y2 = cy + 6,
    ));
    svg.push_str(&format!(
        "<line class=\"link\" x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\"/>\n",
        x1 = cx - 6,
        y1 = cy + 6,
        x2 = cx + 6,
        y2 = cy - 6,
    ));
}

fn gate_label(gate: &Gate) -> String {
    match gate {
        Gate::H => "H".to_string(),
        Gate::CP(theta) => format!("P({})", format_angle(*theta)),
        Gate::Swap => "X".to_string(),
    }
}
