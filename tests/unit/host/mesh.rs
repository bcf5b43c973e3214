use super::*;

#[test]
fn writes_grow_submesh_list() {
    let mut mesh = MeshBuffers::new();
    mesh.write_vertices(2, &[Point::new(1.0, 2.0)]).unwrap();
    mesh.write_colors(2, &[Rgba8::WHITE]).unwrap();
    assert_eq!(mesh.submeshes.len(), 3);
    mesh.commit(2).unwrap();
    assert_eq!(mesh.commits, 1);
}

#[test]
fn commit_rejects_unknown_or_mismatched_submesh() {
    let mut mesh = MeshBuffers::new();
    assert!(matches!(mesh.commit(0), Err(GlyphFxError::Render(_))));

    mesh.write_vertices(0, &[Point::ZERO, Point::ZERO]).unwrap();
    mesh.write_colors(0, &[Rgba8::WHITE]).unwrap();
    assert!(matches!(mesh.commit(0), Err(GlyphFxError::Render(_))));
    assert_eq!(mesh.commits, 0);
}

#[test]
fn writes_replace_previous_contents() {
    let mut mesh = MeshBuffers::new();
    mesh.write_vertices(0, &[Point::ZERO; 8]).unwrap();
    mesh.write_vertices(0, &[Point::new(3.0, 3.0); 4]).unwrap();
    assert_eq!(mesh.submeshes[0].positions, vec![Point::new(3.0, 3.0); 4]);

    let t = Transform2D {
        rotation_rad: 0.5,
        ..Transform2D::default()
    };
    mesh.set_text_transform(t).unwrap();
    assert_eq!(mesh.transform, t);
}
