//! Pure page logic for folio.glass.
//!
//! Everything here is renderer-agnostic: content in, `RenderCommand`s and
//! orientation writes out. The egui, terminal, and wasm front-ends only
//! interpret what this crate emits.

pub mod content;
pub mod lifecycle;
pub mod scroll;
pub mod svg;
pub mod tilt;
pub mod views;
