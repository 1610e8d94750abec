// File: crates/bizchart-render-skia/src/lib.rs
// Summary: Skia backend: canvas-backed `Surface`, text shaping and PNG export.

pub mod export;
pub mod surface;
pub mod text;

pub use export::{RenderOptions, RenderToPng};
pub use surface::SkiaSurface;
pub use text::TextShaper;
