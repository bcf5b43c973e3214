use crate::{
    foundation::core::{Point, Rect, Rgba8},
    glyph::quad::{Glyph, QUAD_VERTS},
};

/// Vertex and color arrays for one submesh, laid out four vertices per glyph.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SubmeshBuffers {
    /// Vertex positions.
    pub positions: Vec<Point>,
    /// Vertex colors, parallel to `positions`.
    pub colors: Vec<Rgba8>,
}

impl SubmeshBuffers {
    fn reset(&mut self) {
        self.positions.clear();
        self.colors.clear();
    }

    fn ensure_len(&mut self, len: usize) {
        if self.positions.len() < len {
            self.positions.resize(len, Point::ZERO);
            self.colors.resize(len, Rgba8::WHITE);
        }
    }
}

/// Undeformed geometry and colors for the current frame's layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BaselineSnapshot {
    /// Every glyph reported by the layout, visible or not.
    pub glyphs: Vec<Glyph>,
    /// Per-submesh vertex data built from the glyph quads.
    pub submeshes: Vec<SubmeshBuffers>,
    /// Axis-aligned bounds of the whole text block.
    pub full_bounds: Rect,
}

impl BaselineSnapshot {
    /// Build a snapshot from layout output.
    ///
    /// Returns `None` when no glyph is visible: such a frame is skipped.
    pub fn from_glyphs(glyphs: &[Glyph], full_bounds: Rect) -> Option<Self> {
        let mut snap = Self::default();
        snap.refill(glyphs, full_bounds).then_some(snap)
    }

    /// Number of glyphs with `visible == true`.
    pub fn visible_count(&self) -> usize {
        self.glyphs.iter().filter(|g| g.visible).count()
    }

    fn refill(&mut self, glyphs: &[Glyph], full_bounds: Rect) -> bool {
        self.glyphs.clear();
        for s in &mut self.submeshes {
            s.reset();
        }
        self.full_bounds = full_bounds;

        if !glyphs.iter().any(|g| g.visible) {
            return false;
        }

        self.glyphs.extend_from_slice(glyphs);
        for g in glyphs {
            if self.submeshes.len() <= g.submesh {
                self.submeshes.resize_with(g.submesh + 1, SubmeshBuffers::default);
            }
            let mesh = &mut self.submeshes[g.submesh];
            mesh.ensure_len(g.vertex_index + QUAD_VERTS);
            for (j, corner) in g.quad.corners.iter().enumerate() {
                mesh.positions[g.vertex_index + j] = *corner;
                mesh.colors[g.vertex_index + j] = g.color;
            }
        }
        let used = glyphs.iter().map(|g| g.submesh + 1).max().unwrap_or(0);
        self.submeshes.truncate(used);
        true
    }
}

/// Holds the most recent baseline and reuses its allocations across frames.
#[derive(Debug, Default)]
pub struct SnapshotCache {
    snapshot: BaselineSnapshot,
    valid: bool,
}

impl SnapshotCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached baseline with the given layout output.
    ///
    /// Returns `None` (and invalidates the cache) when no glyph is visible.
    pub fn capture(&mut self, glyphs: &[Glyph], full_bounds: Rect) -> Option<&BaselineSnapshot> {
        self.valid = self.snapshot.refill(glyphs, full_bounds);
        self.current()
    }

    /// Last successfully captured baseline, if any.
    pub fn current(&self) -> Option<&BaselineSnapshot> {
        self.valid.then_some(&self.snapshot)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/snapshot.rs"]
mod tests;
