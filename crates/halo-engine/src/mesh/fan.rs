use std::f32::consts::TAU;

use super::{Mesh, MeshError};

/// Radius of generated fans, in NDC units.
pub const FAN_RADIUS: f32 = 0.5;

/// Fewest slices accepted; the closing triangle needs a distinct second rim point.
pub const MIN_FAN_SLICES: u32 = 2;

/// Most slices accepted: 333 triangles (999 indices) fit the 1000-entry
/// geometry budget the circle program was designed around.
pub const MAX_FAN_SLICES: u32 = 333;

/// Validates an angular step and returns the number of fan slices it yields.
///
/// The step is in degrees and must be finite, positive, divide 360 evenly
/// and give between [`MIN_FAN_SLICES`] and [`MAX_FAN_SLICES`] slices.
///
/// "Evenly" allows for the rounding of the step to `f32` only: `360 / step`
/// may miss a whole number by at most `f32::EPSILON` relative to the slice
/// count, so `7.2` passes and `10.00002` does not.
pub fn fan_slice_count(angle_increment: f32) -> Result<u32, MeshError> {
    if !angle_increment.is_finite() || angle_increment <= 0.0 {
        return Err(MeshError::invalid_step(
            angle_increment,
            "must be a positive, finite number of degrees",
        ));
    }

    let exact = 360.0 / f64::from(angle_increment);
    let whole = exact.round();
    if (exact - whole).abs() > exact * f64::from(f32::EPSILON) {
        return Err(MeshError::invalid_step(angle_increment, "does not divide 360 evenly"));
    }

    if whole < f64::from(MIN_FAN_SLICES) || whole > f64::from(MAX_FAN_SLICES) {
        return Err(MeshError::invalid_step(
            angle_increment,
            format!("gives {whole} slices, expected {MIN_FAN_SLICES}..={MAX_FAN_SLICES}"),
        ));
    }

    Ok(whole as u32)
}

impl Mesh {
    /// Builds a triangle fan approximating a circle of radius [`FAN_RADIUS`]
    /// centred on the origin.
    ///
    /// Layout for `n` slices:
    /// - position 0 is the centre `(0, 0)`
    /// - positions `1..=n+1` are rim points at `0°, step, 2·step, …, 360°`;
    ///   the last one repeats the first (seam vertex is not shared)
    /// - triangle `i` is `(0, i+1, i+2)`, except the last which closes on
    ///   position 1
    ///
    /// The angle accumulates in degrees and is converted to radians per point.
    pub fn fan(angle_increment: f32) -> Result<Self, MeshError> {
        let slices = fan_slice_count(angle_increment)?;

        let mut positions = Vec::with_capacity(slices as usize + 2);
        positions.push([0.0, 0.0]);

        let mut angle = 0.0f32;
        for _ in 0..=slices {
            let theta = angle / 360.0 * TAU;
            positions.push([theta.cos() * FAN_RADIUS, theta.sin() * FAN_RADIUS]);
            angle += angle_increment;
        }

        let mut indices = Vec::with_capacity(slices as usize * 3);
        for i in 0..slices {
            let closing = if i + 1 == slices { 1 } else { i + 2 };
            indices.extend_from_slice(&[0, i + 1, closing]);
        }

        log::debug!(
            "fan mesh: {slices} slices, {} positions, {} indices",
            positions.len(),
            indices.len()
        );

        Ok(Self { positions, indices })
    }
}
