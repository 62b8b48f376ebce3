//! Application layer: payload encoding and rendering orchestration.
//!
//! The [`encoder::PayloadEncoder`] is the core of the crate; the
//! [`renderer::BillRenderer`] wires it to the rasterizer and layout ports
//! supplied by the caller.

pub mod encoder;
pub mod renderer;
