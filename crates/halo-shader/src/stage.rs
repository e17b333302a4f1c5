use std::fmt;

/// Token that opens a section in a tagged shader file.
pub const MARKER: &str = "#shader";

/// Shader stage a section of a tagged file belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl Stage {
    /// Stages in the order they are written back out.
    pub const ALL: [Stage; 2] = [Stage::Vertex, Stage::Fragment];

    /// Lower-case stage name as it appears after the marker token.
    pub const fn name(self) -> &'static str {
        match self {
            Stage::Vertex => "vertex",
            Stage::Fragment => "fragment",
        }
    }

    /// Full marker line that opens a section for this stage.
    pub fn marker(self) -> String {
        format!("{MARKER} {}", self.name())
    }

    /// Resolves the stage named by a marker line.
    ///
    /// `vertex` is checked before `fragment`, so a line mentioning both
    /// selects the vertex stage. Returns `None` for a marker line naming
    /// neither, which leaves the current section unchanged.
    pub(crate) fn from_marker_line(line: &str) -> Option<Stage> {
        if line.contains(Stage::Vertex.name()) {
            Some(Stage::Vertex)
        } else if line.contains(Stage::Fragment.name()) {
            Some(Stage::Fragment)
        } else {
            None
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
