use bytemuck::{Pod, Zeroable};

/// Uniform block shared by both shader stages (group 0, binding 0).
///
/// WGSL side:
///
/// ```wgsl
/// struct Scene {
///     color: vec4<f32>,
///     time: f32,
///     aspect: f32,
/// }
/// ```
///
/// Layout (32 bytes, 16-byte aligned):
///
///  offset  0  color   [f32; 4]
///  offset 16  time    f32
///  offset 20  aspect  f32
///  offset 24  _pad    [f32; 2]
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SceneUniform {
    pub color: [f32; 4],
    pub time: f32,
    pub aspect: f32,
    pub _pad: [f32; 2],
}

impl SceneUniform {
    pub const SIZE: u64 = std::mem::size_of::<SceneUniform>() as u64;

    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    pub fn with_time(mut self, time: f32) -> Self {
        self.time = time;
        self
    }
}

impl Default for SceneUniform {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0, 1.0],
            time: 0.0,
            aspect: 1.0,
            _pad: [0.0; 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_is_uniform_aligned() {
        assert_eq!(SceneUniform::SIZE, 32);
        assert_eq!(SceneUniform::SIZE % 16, 0);
    }

    #[test]
    fn builders_set_fields() {
        let u = SceneUniform::default().with_color([0.5, 1.0, 1.0, 1.0]).with_time(2.0);
        assert_eq!(u.color[0], 0.5);
        assert_eq!(u.time, 2.0);
        assert_eq!(u.aspect, 1.0);
    }
}
