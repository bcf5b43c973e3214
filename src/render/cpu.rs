use crate::{
    foundation::{
        core::{Affine, BezPath, Point, Rgba8, Vec2},
        error::{GlyphFxError, GlyphFxResult},
    },
    glyph::quad::QUAD_VERTS,
    host::mesh::MeshBuffers,
};

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRgba {
    /// RGBA of the pixel at `(x, y)`, or `None` when out of range.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Convert to straight alpha in place; no-op when already straight.
    pub fn unpremultiply(&mut self) {
        if !self.premultiplied {
            return;
        }
        for px in self.data.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 {
                px[..3].fill(0);
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        self.premultiplied = false;
    }
}

/// Canvas settings for [`rasterize_mesh`].
#[derive(Clone, Copy, Debug)]
pub struct RasterOpts {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Background color.
    pub clear: Rgba8,
    /// Position of the mesh-space origin, measured up and right from the canvas's
    /// bottom-left corner.
    pub origin: Vec2,
}

impl Default for RasterOpts {
    fn default() -> Self {
        Self {
            width: 512,
            height: 128,
            clear: Rgba8::new(0, 0, 0, 0),
            origin: Vec2::ZERO,
        }
    }
}

/// Fill every committed quad with its vertex color, under the mesh's whole-text transform.
///
/// Mesh space is y-up and is flipped onto the y-down canvas. Output is premultiplied.
#[tracing::instrument(level = "debug", skip(mesh), fields(submeshes = mesh.submeshes.len()))]
pub fn rasterize_mesh(mesh: &MeshBuffers, opts: &RasterOpts) -> GlyphFxResult<FrameRgba> {
    let width: u16 = opts
        .width
        .try_into()
        .ok()
        .filter(|&w| w > 0)
        .ok_or_else(|| GlyphFxError::render("canvas width must be in 1..=65535"))?;
    let height: u16 = opts
        .height
        .try_into()
        .ok()
        .filter(|&h| h > 0)
        .ok_or_else(|| GlyphFxError::render("canvas height must be in 1..=65535"))?;

    let mut ctx = vello_cpu::RenderContext::new(width, height);

    let c = opts.clear;
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(width),
        f64::from(height),
    ));

    let transform = mesh_to_canvas(opts.origin, height) * mesh.transform.to_affine();
    ctx.set_transform(affine_to_cpu(transform));

    for (i, sub) in mesh.submeshes.iter().enumerate() {
        if sub.positions.len() != sub.colors.len() {
            return Err(GlyphFxError::render(format!(
                "submesh {i} has {} positions but {} colors",
                sub.positions.len(),
                sub.colors.len()
            )));
        }
        for (quad, colors) in sub
            .positions
            .chunks_exact(QUAD_VERTS)
            .zip(sub.colors.chunks_exact(QUAD_VERTS))
        {
            let color = colors[0];
            if color.a == 0 {
                continue;
            }
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                color.r, color.g, color.b, color.a,
            ));
            ctx.fill_path(&bezpath_to_cpu(&quad_path(quad)));
        }
    }

    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    Ok(FrameRgba {
        width: opts.width,
        height: opts.height,
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

fn mesh_to_canvas(origin: Vec2, height: u16) -> Affine {
    Affine::translate(Vec2::new(origin.x, f64::from(height) - origin.y))
        * Affine::scale_non_uniform(1.0, -1.0)
}

fn quad_path(corners: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut it = corners.iter();
    if let Some(first) = it.next() {
        path.move_to(*first);
        for p in it {
            path.line_to(*p);
        }
        path.close_path();
    }
    path
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

/// Write `frame` as a straight-alpha PNG.
pub fn write_png(frame: &FrameRgba, path: &std::path::Path) -> GlyphFxResult<()> {
    let mut straight = frame.clone();
    straight.unpremultiply();
    image::save_buffer_with_format(
        path,
        &straight.data,
        straight.width,
        straight.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| GlyphFxError::render(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
