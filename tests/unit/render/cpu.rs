use super::*;
use crate::{
    foundation::core::{Rect, Transform2D},
    glyph::{quad::GlyphQuad, snapshot::SubmeshBuffers},
};

fn mesh_with(rect: Rect, color: Rgba8) -> MeshBuffers {
    MeshBuffers {
        submeshes: vec![SubmeshBuffers {
            positions: GlyphQuad::from_rect(rect).corners.to_vec(),
            colors: vec![color; 4],
        }],
        ..MeshBuffers::default()
    }
}

fn opts(width: u32, height: u32) -> RasterOpts {
    RasterOpts {
        width,
        height,
        ..RasterOpts::default()
    }
}

#[test]
fn fills_quads_with_vertex_color() {
    let red = Rgba8::new(255, 0, 0, 255);
    let mesh = mesh_with(Rect::new(2.0, 2.0, 6.0, 6.0), red);
    let frame = rasterize_mesh(&mesh, &opts(8, 8)).unwrap();

    assert_eq!(frame.data.len(), 8 * 8 * 4);
    assert_eq!(frame.pixel(4, 4), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(frame.pixel(8, 0), None);
}

#[test]
fn applies_text_transform_and_origin() {
    let blue = Rgba8::new(0, 0, 255, 255);
    let mut mesh = mesh_with(Rect::new(0.0, 0.0, 2.0, 2.0), blue);
    mesh.transform = Transform2D {
        scale: Vec2::new(2.0, 2.0),
        ..Transform2D::default()
    };
    let frame = rasterize_mesh(
        &mesh,
        &RasterOpts {
            origin: Vec2::new(4.0, 4.0),
            ..opts(16, 16)
        },
    )
    .unwrap();

    // Mesh (0..4, 0..4) lands on columns 4..8 and rows 8..12 of the 16px canvas.
    assert_eq!(frame.pixel(6, 10), Some([0, 0, 255, 255]));
    assert_eq!(frame.pixel(6, 6), Some([0, 0, 0, 0]));
    assert_eq!(frame.pixel(9, 10), Some([0, 0, 0, 0]));
}

#[test]
fn mesh_y_points_up_the_canvas() {
    let green = Rgba8::new(0, 255, 0, 255);
    let mesh = mesh_with(Rect::new(0.0, 0.0, 8.0, 2.0), green);
    let frame = rasterize_mesh(&mesh, &opts(8, 8)).unwrap();

    assert_eq!(frame.pixel(3, 7), Some([0, 255, 0, 255]));
    assert_eq!(frame.pixel(3, 6), Some([0, 255, 0, 255]));
    assert_eq!(frame.pixel(3, 0), Some([0, 0, 0, 0]));
}

#[test]
fn rejects_degenerate_canvas() {
    let mesh = MeshBuffers::new();
    assert!(matches!(
        rasterize_mesh(&mesh, &opts(0, 8)),
        Err(GlyphFxError::Render(_))
    ));
    assert!(matches!(
        rasterize_mesh(&mesh, &opts(8, 70_000)),
        Err(GlyphFxError::Render(_))
    ));
}

#[test]
fn unpremultiply_restores_straight_channels() {
    let mut frame = FrameRgba {
        width: 2,
        height: 1,
        data: vec![64, 0, 0, 128, 9, 9, 9, 0],
        premultiplied: true,
    };
    frame.unpremultiply();
    assert!(!frame.premultiplied);
    assert_eq!(frame.pixel(0, 0), Some([128, 0, 0, 128]));
    assert_eq!(frame.pixel(1, 0), Some([0, 0, 0, 0]));
}
