use crate::foundation::core::{Point, Rect, Rgba8, Vec2};

/// Number of vertices per glyph quad.
pub const QUAD_VERTS: usize = 4;

/// The four corners of one glyph cell, in render-mesh space.
///
/// Mesh space is y-up: positive Y moves a glyph toward the top of the frame and
/// positive rotation turns counter-clockwise. Corner order is
/// `[bottom_left, top_left, top_right, bottom_right]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlyphQuad {
    /// Corner positions.
    pub corners: [Point; QUAD_VERTS],
}

impl GlyphQuad {
    /// Build a quad from an axis-aligned cell.
    ///
    /// "Bottom" is the `y0` edge.
    pub fn from_rect(r: Rect) -> Self {
        Self {
            corners: [
                Point::new(r.x0, r.y0),
                Point::new(r.x0, r.y1),
                Point::new(r.x1, r.y1),
                Point::new(r.x1, r.y0),
            ],
        }
    }

    /// Average of the bottom-left and top-right corners.
    pub fn midpoint(&self) -> Point {
        self.corners[0].midpoint(self.corners[2])
    }

    /// Translate every corner by `by`.
    pub fn translate(&mut self, by: Vec2) {
        for c in &mut self.corners {
            *c += by;
        }
    }

    /// Rewrite every corner as `mid + f(corner - mid)` around the current midpoint.
    pub fn deform(&mut self, f: impl Fn(Vec2) -> Vec2) {
        let mid = self.midpoint();
        for c in &mut self.corners {
            *c = mid + f(*c - mid);
        }
    }

    /// Axis-aligned bounds of the four corners.
    pub fn bounds(&self) -> Rect {
        let [a, b, c, d] = self.corners;
        Rect::from_points(a, c).union_pt(b).union_pt(d)
    }
}

/// One laid-out character cell as reported by the layout collaborator.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Glyph {
    /// Character index within the text; drives per-letter phase and stagger.
    pub index: usize,
    /// Invisible glyphs (whitespace) keep their vertices untouched.
    pub visible: bool,
    /// Undeformed quad for the current layout.
    pub quad: GlyphQuad,
    /// Baseline vertex color.
    pub color: Rgba8,
    /// Submesh (font/material run) holding this glyph's vertices.
    pub submesh: usize,
    /// Offset of the first of this glyph's four vertices in its submesh.
    pub vertex_index: usize,
}
