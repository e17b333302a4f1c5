use halo_demo::{shader_dir, DemoConfig, MeshKind};
use halo_engine::shader::{check_source, load_shader_file, Stage};

fn shipped() -> Vec<std::path::PathBuf> {
    vec![shader_dir().join("basic.shader"), shader_dir().join("circle.shader")]
}

#[test]
fn shipped_shaders_have_both_stages() {
    for path in shipped() {
        let src = load_shader_file(&path);
        assert!(src.missing_stages().is_empty(), "{} is missing a stage", path.display());
        assert_eq!(check_source(&src), Ok(()), "{}", path.display());
    }
}

#[test]
fn header_comment_is_dropped() {
    for path in shipped() {
        let src = load_shader_file(&path);
        for stage in Stage::ALL {
            assert!(!src.get(stage).starts_with("//"), "{} {stage}", path.display());
        }
    }
}

#[test]
fn stages_declare_the_scene_uniform() {
    for path in shipped() {
        let src = load_shader_file(&path);
        for stage in Stage::ALL {
            assert!(src.get(stage).contains("@group(0) @binding(0)"), "{} {stage}", path.display());
        }
    }
}

#[test]
fn configs_point_at_shipped_files() {
    for cfg in [DemoConfig::quad(), DemoConfig::circle()] {
        assert!(cfg.shader_path.is_file(), "{}", cfg.shader_path.display());
    }
}

#[test]
fn circle_mesh_matches_config() {
    let mesh = DemoConfig::circle().mesh.build().unwrap();
    assert_eq!(mesh.index_count(), 108);
    assert!(matches!(DemoConfig::circle().mesh, MeshKind::Fan { .. }));
}
