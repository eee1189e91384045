//! Integration tests for the shipped lighting scene files

use std::path::PathBuf;

use skyguard_core::lighting::CuboidFaces;
use skyguard_core::{LightingDemo, LightingModel, LightingScene};

fn scene_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../scenes")
        .join(file)
}

#[test]
fn test_lab_file_matches_builtin() {
    let scene = LightingScene::load(scene_path("lighting_lab.ron")).expect("lab scene should load");
    assert_eq!(scene, LightingScene::lab());
}

#[test]
fn test_island_file_matches_builtin() {
    let scene = LightingScene::load(scene_path("island.ron")).expect("island scene should load");
    assert_eq!(scene, LightingScene::island());
}

#[test]
fn test_island_sea_is_a_top_face() {
    let scene = LightingScene::load(scene_path("island.ron")).unwrap();
    let sea = scene.object("sea").expect("island has a sea");
    assert_eq!(sea.faces, CuboidFaces::Top);
}

#[test]
fn test_demo_runs_a_shipped_scene() {
    let scene = LightingScene::load_or_default(scene_path("lighting_lab.ron"));
    let mut demo = LightingDemo::new(scene, LightingModel::default());

    for _ in 0..600 {
        demo.update(1.0 / 60.0);
        let red = demo.point_light().diffuse[0];
        assert!((0.0..=1.0).contains(&red));
    }
    assert!((demo.elapsed() - 10.0).abs() < 1e-2);
}
