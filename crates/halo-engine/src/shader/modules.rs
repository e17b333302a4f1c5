use std::fmt;

use halo_shader::{ShaderSource, Stage};

/// Entry point expected in the vertex section.
pub const VERTEX_ENTRY: &str = "vs_main";

/// Entry point expected in the fragment section.
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Error raised before a shader stage reaches the GPU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderError {
    /// The stage has no source text (missing file or missing section).
    EmptyStage(Stage),
    /// The stage does not declare its entry point.
    MissingEntryPoint { stage: Stage, entry: &'static str },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::EmptyStage(stage) => {
                write!(f, "compilation of {stage} shader failed: source is empty")
            }
            ShaderError::MissingEntryPoint { stage, entry } => {
                write!(f, "compilation of {stage} shader failed: no `fn {entry}` found")
            }
        }
    }
}

impl std::error::Error for ShaderError {}

/// Entry point name for `stage`.
pub fn entry_point(stage: Stage) -> &'static str {
    match stage {
        Stage::Vertex => VERTEX_ENTRY,
        Stage::Fragment => FRAGMENT_ENTRY,
    }
}

/// Cheap pre-flight checks on split WGSL sources.
///
/// Catches the failures the splitter lets through (empty sections, a file
/// that was never found) with a readable message instead of a device error.
pub fn check_source(source: &ShaderSource) -> Result<(), ShaderError> {
    for stage in Stage::ALL {
        let text = source.get(stage);
        if text.trim().is_empty() {
            return Err(ShaderError::EmptyStage(stage));
        }
        let entry = entry_point(stage);
        if !text.contains(&format!("fn {entry}")) {
            return Err(ShaderError::MissingEntryPoint { stage, entry });
        }
    }
    Ok(())
}

/// One compiled wgpu module per stage.
pub struct ShaderModules {
    pub vertex: wgpu::ShaderModule,
    pub fragment: wgpu::ShaderModule,
}

impl ShaderModules {
    /// Compiles both stages of `source` as WGSL.
    pub fn compile(
        device: &wgpu::Device,
        source: &ShaderSource,
        label: &str,
    ) -> Result<Self, ShaderError> {
        check_source(source)?;

        let module = |stage: Stage| {
            let label = format!("{label} {stage} shader");
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(label.as_str()),
                source: wgpu::ShaderSource::Wgsl(source.get(stage).into()),
            })
        };

        Ok(Self {
            vertex: module(Stage::Vertex),
            fragment: module(Stage::Fragment),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src(v: &str, f: &str) -> ShaderSource { ShaderSource::new(v, f) }

    #[test]
    fn accepts_both_entry_points() {
        let s = src("@vertex fn vs_main() {}\n", "@fragment fn fs_main() {}\n");
        assert_eq!(check_source(&s), Ok(()));
    }

    #[test]
    fn empty_vertex_reported_first() {
        assert_eq!(check_source(&src("", "")), Err(ShaderError::EmptyStage(Stage::Vertex)));
    }

    #[test]
    fn whitespace_only_is_empty() {
        let s = src("@vertex fn vs_main() {}\n", "\n\n  \n");
        assert_eq!(check_source(&s), Err(ShaderError::EmptyStage(Stage::Fragment)));
    }

    #[test]
    fn missing_entry_point() {
        let s = src("@vertex fn main() {}\n", "@fragment fn fs_main() {}\n");
        assert_eq!(
            check_source(&s),
            Err(ShaderError::MissingEntryPoint { stage: Stage::Vertex, entry: VERTEX_ENTRY })
        );
    }

    #[test]
    fn error_message_names_stage() {
        let msg = ShaderError::EmptyStage(Stage::Fragment).to_string();
        assert!(msg.contains("fragment shader failed"));
    }
}
