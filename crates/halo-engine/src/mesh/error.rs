use std::fmt;

/// Error produced when building a mesh.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshError {
    /// The fan generator cannot build a circle from this angular step.
    InvalidConfiguration { angle_increment: f32, reason: String },
    /// Raw buffers handed to [`Mesh::new`](super::Mesh::new) break the mesh invariants.
    InvalidBuffers(String),
}

impl MeshError {
    pub(crate) fn invalid_step(angle_increment: f32, reason: impl Into<String>) -> Self {
        MeshError::InvalidConfiguration {
            angle_increment,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::InvalidConfiguration { angle_increment, reason } => {
                write!(f, "invalid fan step {angle_increment}°: {reason}")
            }
            MeshError::InvalidBuffers(msg) => write!(f, "invalid mesh buffers: {msg}"),
        }
    }
}

impl std::error::Error for MeshError {}
