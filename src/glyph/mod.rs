/// Per-glyph quads.
pub mod quad;
/// Baseline capture, re-taken every frame.
pub mod snapshot;
