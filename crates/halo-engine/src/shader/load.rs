use std::path::Path;

use halo_shader::{split_str, ShaderSource};

/// Reads a tagged shader file and splits it into stages.
///
/// A missing or unreadable file is not an error here: it is logged and
/// yields empty sources, which compilation reports later.
pub fn load_shader_file(path: impl AsRef<Path>) -> ShaderSource {
    let path = path.as_ref();

    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("could not read shader file {}: {e}", path.display());
            return ShaderSource::default();
        }
    };

    let source = split_str(&text);
    for stage in source.missing_stages() {
        log::warn!("shader file {} has no {stage} section", path.display());
    }
    log::debug!(
        "loaded {} (vertex {} bytes, fragment {} bytes)",
        path.display(),
        source.vertex().len(),
        source.fragment().len()
    );

    source
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_and_splits_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "#shader vertex\nv1\nv2\n#shader fragment\nf1").unwrap();

        let src = load_shader_file(file.path());
        assert_eq!(src.vertex(), "v1\nv2\n");
        assert_eq!(src.fragment(), "f1\n");
    }

    #[test]
    fn missing_file_gives_empty_sources() {
        let dir = tempfile::tempdir().unwrap();
        let src = load_shader_file(dir.path().join("nope.shader"));
        assert!(src.is_empty());
    }

    #[test]
    fn file_without_markers_gives_empty_sources() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "void main() {{}}").unwrap();
        assert!(load_shader_file(file.path()).is_empty());
    }
}
