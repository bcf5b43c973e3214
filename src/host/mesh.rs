use crate::{
    foundation::{
        core::{Point, Rgba8, Transform2D},
        error::{GlyphFxError, GlyphFxResult},
    },
    glyph::snapshot::SubmeshBuffers,
};

/// Destination for one frame's vertex data.
///
/// The sink owns the buffers; the pipeline only writes into them.
pub trait RenderSink {
    /// Replace the vertex positions of `submesh`.
    fn write_vertices(&mut self, submesh: usize, positions: &[Point]) -> GlyphFxResult<()>;

    /// Replace the vertex colors of `submesh`.
    fn write_colors(&mut self, submesh: usize, colors: &[Rgba8]) -> GlyphFxResult<()>;

    /// Set the whole-text transform; identity when no whole-text effect is active.
    fn set_text_transform(&mut self, transform: Transform2D) -> GlyphFxResult<()>;

    /// Upload `submesh` to the backend.
    fn commit(&mut self, submesh: usize) -> GlyphFxResult<()>;
}

/// In-memory render target holding the last committed mesh state.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct MeshBuffers {
    /// Per-submesh vertex and color buffers.
    pub submeshes: Vec<SubmeshBuffers>,
    /// Whole-text transform.
    pub transform: Transform2D,
    /// Total commits received.
    pub commits: u64,
}

impl MeshBuffers {
    /// Empty target.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, submesh: usize) -> &mut SubmeshBuffers {
        if self.submeshes.len() <= submesh {
            self.submeshes
                .resize_with(submesh + 1, SubmeshBuffers::default);
        }
        &mut self.submeshes[submesh]
    }
}

impl RenderSink for MeshBuffers {
    fn write_vertices(&mut self, submesh: usize, positions: &[Point]) -> GlyphFxResult<()> {
        let slot = self.slot(submesh);
        slot.positions.clear();
        slot.positions.extend_from_slice(positions);
        Ok(())
    }

    fn write_colors(&mut self, submesh: usize, colors: &[Rgba8]) -> GlyphFxResult<()> {
        let slot = self.slot(submesh);
        slot.colors.clear();
        slot.colors.extend_from_slice(colors);
        Ok(())
    }

    fn set_text_transform(&mut self, transform: Transform2D) -> GlyphFxResult<()> {
        self.transform = transform;
        Ok(())
    }

    fn commit(&mut self, submesh: usize) -> GlyphFxResult<()> {
        let Some(slot) = self.submeshes.get(submesh) else {
            return Err(GlyphFxError::render(format!(
                "commit of unknown submesh {submesh}"
            )));
        };
        if slot.positions.len() != slot.colors.len() {
            return Err(GlyphFxError::render(format!(
                "submesh {submesh} has {} positions but {} colors",
                slot.positions.len(),
                slot.colors.len()
            )));
        }
        self.commits += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/mesh.rs"]
mod tests;
