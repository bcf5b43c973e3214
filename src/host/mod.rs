//! Interfaces to the layout and rendering collaborators, plus simple in-memory implementations.

/// Glyph geometry source.
pub mod layout;
/// Vertex buffer destination.
pub mod mesh;
