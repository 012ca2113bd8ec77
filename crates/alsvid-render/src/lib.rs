//! Circuit renderers for Alsvid.
//!
//! Two backends over one shared column layout:
//!
//! - [`draw_text`] — an ASCII wire diagram, the terminal-friendly view;
//! - [`draw_svg`] — a standalone SVG document, the one the dashboard
//!   embeds inline as a `data:` image.
//!
//! Both consume the circuit's operation list as-is; layout packs gates
//! into columns for display but never reorders them.

mod label;
mod layout;
pub mod svg;
pub mod text;

pub use svg::draw_svg;
pub use text::draw_text;
