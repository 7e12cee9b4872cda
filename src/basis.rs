//! Conversion between the file's axis and rotation conventions and the
//! target's.
//!
//! The two disagree on which of Y and Z is up, so translations swap those
//! axes. Files store rotations as absolute joint-space `(x, y, z, w)`
//! quaternions while targets keyframe bones as deltas from their rest
//! orientation, so every rotation is re-expressed in the bone's rest basis:
//! `rest⁻¹ · q · rest`.

use cgmath::{InnerSpace, Quaternion, Vector3};

pub fn identity() -> Quaternion<f32> {
    Quaternion::new(1., 0., 0., 0.)
}

/// Swaps the Y and Z axes.
pub fn location_to_target([x, y, z]: [f32; 3]) -> Vector3<f32> {
    Vector3::new(x, z, y)
}

pub fn location_to_file(v: Vector3<f32>) -> [f32; 3] {
    [v.x, v.z, v.y]
}

/// True inverse, so a rest orientation that drifted off unit length still
/// cancels out.
fn inverse(q: Quaternion<f32>) -> Quaternion<f32> {
    q.conjugate() / q.magnitude2()
}

pub fn rotation_to_target(rest: Quaternion<f32>, [x, y, z, w]: [f32; 4]) -> Quaternion<f32> {
    let q = Quaternion::new(w, -x, -z, -y);
    inverse(rest) * q * rest
}

pub fn rotation_to_file(rest: Quaternion<f32>, r: Quaternion<f32>) -> [f32; 4] {
    let q = rest * r * inverse(rest);
    [-q.v.x, -q.v.z, -q.v.y, q.s]
}
