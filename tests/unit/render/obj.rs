use super::*;
use crate::{
    foundation::core::{DVec3, Rgb},
    render::mesh::TessellationSettings,
    rig::model::Primitive,
    transform::Transform,
};

fn two_pyramids() -> Mesh {
    let local = Primitive::Pyramid {
        height: 1.0,
        width: 1.0,
        breadth: 1.0,
    }
    .tessellate(&TessellationSettings::default());
    let mut mesh = Mesh::new();
    mesh.append_group(&local, Transform::IDENTITY, "left", Rgb::WHITE)
        .unwrap();
    mesh.append_group(
        &local,
        Transform::translation(DVec3::new(5.0, 0.0, 0.0)),
        "right",
        Rgb::new(0.0, 0.5, 1.0),
    )
    .unwrap();
    mesh
}

#[test]
fn header_groups_and_counts() {
    let text = obj_string(&two_pyramids()).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("# articulate pose export"));
    assert_eq!(lines.next(), Some("# groups 2 vertices 8 triangles 8"));

    let groups: Vec<&str> = text.lines().filter(|l| l.starts_with("g ")).collect();
    assert_eq!(groups, vec!["g left", "g right"]);
    assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 8);
    assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 8);
    assert!(text.contains("# color 0 0.5 1"));
}

#[test]
fn faces_are_one_based_and_in_range() {
    let text = obj_string(&two_pyramids()).unwrap();
    let faces: Vec<Vec<usize>> = text
        .lines()
        .filter_map(|l| l.strip_prefix("f "))
        .map(|l| l.split(' ').map(|n| n.parse().unwrap()).collect())
        .collect();
    assert_eq!(faces[0], vec![1, 2, 3]);
    assert_eq!(faces[4], vec![5, 6, 7]);
    assert!(faces.iter().flatten().all(|&i| (1..=8).contains(&i)));
}

#[test]
fn vertices_use_fixed_precision() {
    let text = obj_string(&two_pyramids()).unwrap();
    assert!(text.contains("v 4.000000 0.000000 0.000000"));
}

#[test]
fn ungrouped_mesh_still_writes_geometry() {
    let mesh = Primitive::cube(1.0).tessellate(&TessellationSettings::default());
    let text = obj_string(&mesh).unwrap();
    assert!(!text.contains("\ng "));
    assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 8);
    assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 12);
}
