//! End-to-end tests against the linked native library: real imports and the
//! scene handle state machine.

use assimp_import::error::Error;
use assimp_import::{import, import_file, import_file_from_memory, PostProcess, SceneHandle};

// Minimal valid Wavefront OBJ: one triangle.
const TRIANGLE_OBJ: &[u8] = b"v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn import_of_nonexistent_path_returns_failure_not_panic() {
    init_logger();
    let result = import_file("does/not/exist.obj", PostProcess::empty());
    match result {
        Err(Error::Import(message)) => assert!(!message.is_empty(), "diagnostic must be non-empty"),
        other => panic!("expected an import failure, got {other:?}"),
    }
}

#[test]
fn import_from_memory_produces_owned_snapshot() -> anyhow::Result<()> {
    init_logger();
    let scene = import_file_from_memory(TRIANGLE_OBJ, PostProcess::TRIANGULATE, "obj")?;

    assert_eq!(scene.meshes.len(), 1);
    let mesh = &scene.meshes[0];
    assert_eq!(mesh.vertices.len(), 3);
    assert_eq!(mesh.faces.len(), 1);
    assert_eq!(mesh.faces[0].indices, vec![0, 1, 2]);
    assert_eq!(mesh.vertices[1], assimp_import::Vector3::new(1.0, 0.0, 0.0));

    // The OBJ importer synthesizes a material; every mesh index stays in range.
    assert!(!scene.materials.is_empty());
    assert!((mesh.material_index as usize) < scene.materials.len());

    // Channel slot arrays are always fully materialized.
    assert_eq!(mesh.colors.len(), 8);
    assert_eq!(mesh.texture_coords.len(), 8);

    // The root node (or a descendant) references mesh 0.
    fn references_mesh(node: &assimp_import::Node, index: u32) -> bool {
        node.meshes.contains(&index) || node.children.iter().any(|c| references_mesh(c, index))
    }
    assert!(references_mesh(&scene.root_node, 0));
    Ok(())
}

#[test]
fn view_can_run_repeatedly_while_live() -> anyhow::Result<()> {
    init_logger();
    let handle = SceneHandle::from_memory(TRIANGLE_OBJ, PostProcess::empty(), "obj")?;
    let first = handle.view()?;
    let second = handle.view()?;
    assert_eq!(first.meshes.len(), second.meshes.len());
    assert_eq!(first.root_node.name, second.root_node.name);
    Ok(())
}

#[test]
fn release_is_one_way_and_guarded() -> anyhow::Result<()> {
    init_logger();
    let mut handle = SceneHandle::from_memory(TRIANGLE_OBJ, PostProcess::empty(), "obj")?;
    assert!(handle.is_live());

    handle.release()?;
    assert!(!handle.is_live());

    // Double release and use-after-release both fail loudly.
    assert_eq!(handle.release(), Err(Error::SceneReleased));
    assert!(matches!(handle.view(), Err(Error::SceneReleased)));
    assert_eq!(
        handle.apply_postprocessing(PostProcess::TRIANGULATE),
        Err(Error::SceneReleased)
    );
    assert!(matches!(
        handle.memory_requirements(),
        Err(Error::SceneReleased)
    ));
    Ok(())
}

#[test]
fn postprocessing_applies_to_live_scene() -> anyhow::Result<()> {
    init_logger();
    let mut handle = SceneHandle::from_memory(TRIANGLE_OBJ, PostProcess::empty(), "obj")?;
    let succeeded = handle.apply_postprocessing(
        PostProcess::TRIANGULATE | PostProcess::JOIN_IDENTICAL_VERTICES,
    )?;
    assert!(succeeded);
    // Scene stays live and viewable after in-place postprocessing.
    let scene = handle.view()?;
    assert_eq!(scene.meshes.len(), 1);
    Ok(())
}

#[test]
fn memory_requirements_reports_nonzero_total() -> anyhow::Result<()> {
    init_logger();
    let handle = SceneHandle::from_memory(TRIANGLE_OBJ, PostProcess::empty(), "obj")?;
    let info = handle.memory_requirements()?;
    assert!(info.total > 0);
    Ok(())
}

#[test]
fn version_and_legal_accessors_pass_through() {
    assert!(import::version_major() >= 3);
    let _ = import::version_minor();
    let _ = import::version_revision();
    let _ = import::compile_flags();
    assert!(!import::legal_string().is_empty());
}
