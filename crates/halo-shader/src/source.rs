use crate::stage::Stage;

/// Vertex and fragment source text split out of one tagged file.
///
/// Each non-empty blob is a sequence of lines, every line terminated by `\n`.
/// The two blobs are unrelated beyond having been stored in the same file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderSource {
    vertex: String,
    fragment: String,
}

impl ShaderSource {
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self { vertex: vertex.into(), fragment: fragment.into() }
    }

    #[inline]
    pub fn vertex(&self) -> &str {
        &self.vertex
    }

    #[inline]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Returns the source text for `stage`.
    pub fn get(&self, stage: Stage) -> &str {
        match stage {
            Stage::Vertex => &self.vertex,
            Stage::Fragment => &self.fragment,
        }
    }

    pub(crate) fn buffer_mut(&mut self, stage: Stage) -> &mut String {
        match stage {
            Stage::Vertex => &mut self.vertex,
            Stage::Fragment => &mut self.fragment,
        }
    }

    /// True when both stages are empty (e.g. the file was missing).
    pub fn is_empty(&self) -> bool {
        self.vertex.is_empty() && self.fragment.is_empty()
    }

    /// Stages whose source text is empty, in `Stage::ALL` order.
    pub fn missing_stages(&self) -> Vec<Stage> {
        Stage::ALL
            .into_iter()
            .filter(|s| self.get(*s).is_empty())
            .collect()
    }

    /// Writes the sources back out as a tagged file.
    ///
    /// Splitting the result yields `self` again for any source produced by
    /// the splitter. Empty stages are written as a bare marker line.
    pub fn to_tagged_string(&self) -> String {
        let mut out = String::with_capacity(self.vertex.len() + self.fragment.len() + 40);
        for stage in Stage::ALL {
            out.push_str(&stage.marker());
            out.push('\n');
            out.push_str(self.get(stage));
        }
        out
    }
}
