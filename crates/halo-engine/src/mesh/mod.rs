//! CPU-side 2D meshes.
//!
//! A [`Mesh`] is a flat list of `[x, y]` positions in normalized device
//! coordinates plus a triangle-list index buffer. Meshes are built once and
//! handed to the renderer as opaque `f32` / `u32` buffers.

mod error;
mod fan;

pub use error::MeshError;
pub use fan::{fan_slice_count, FAN_RADIUS, MAX_FAN_SLICES, MIN_FAN_SLICES};

/// Positions + triangle indices.
///
/// Invariants (checked on construction):
/// - every index is a valid offset into `positions`
/// - the index count is a multiple of 3
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    positions: Vec<[f32; 2]>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Builds a mesh from raw buffers, validating the invariants.
    pub fn new(positions: Vec<[f32; 2]>, indices: Vec<u32>) -> Result<Self, MeshError> {
        if indices.len() % 3 != 0 {
            return Err(MeshError::InvalidBuffers(format!(
                "index count {} is not a multiple of 3",
                indices.len()
            )));
        }
        if let Some(bad) = indices.iter().find(|&&i| i as usize >= positions.len()) {
            return Err(MeshError::InvalidBuffers(format!(
                "index {bad} out of range for {} positions",
                positions.len()
            )));
        }
        Ok(Self { positions, indices })
    }

    /// Axis-aligned square with corners at ±0.5, as two triangles.
    pub fn quad() -> Self {
        Self {
            positions: vec![
                [-0.5, 0.5],
                [-0.5, -0.5],
                [0.5, 0.5],
                [0.5, -0.5],
            ],
            indices: vec![0, 1, 2, 1, 2, 3],
        }
    }

    #[inline]
    pub fn positions(&self) -> &[[f32; 2]] {
        &self.positions
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}
