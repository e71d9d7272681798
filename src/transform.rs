//! Affine transform builders for 2D motion in homogeneous space.
//!
//! Everything here produces a [`glam::Mat4`] encoding a pure affine
//! transform: the bottom row is always `[0, 0, 0, 1]`. Matrices are
//! column-major and compose the usual way: applying `A` then `B` to a
//! point is `B * A * point`.
//!
//! The three builders cover the motion this example needs:
//!
//! - [`translation_matrix`]: offset in x/y, z left alone
//! - [`rotation_matrix`]: counter-clockwise rotation about the z axis
//! - [`scale_matrix`]: independent x/y scale factors
//!
//! # Example
//!
//! ```
//! use orbitquad::{rotation_matrix, scale_matrix, translation_matrix};
//! use glam::Vec4;
//!
//! // Scale, then rotate, then translate. Read right to left.
//! let model = translation_matrix(1.0, 0.0)
//!     * rotation_matrix(std::f32::consts::FRAC_PI_2)
//!     * scale_matrix(0.25, 0.25);
//!
//! let origin = model * Vec4::new(0.0, 0.0, 0.0, 1.0);
//! assert_eq!(origin, Vec4::new(1.0, 0.0, 0.0, 1.0));
//! ```

use glam::{Mat4, Vec4};

/// Builds a matrix that offsets points by `(tx, ty)` in the xy plane.
///
/// Maps `(x, y, z, 1)` to `(x + tx, y + ty, z, 1)`. The z component is
/// never translated; all motion in this example is 2D.
pub fn translation_matrix(tx: f32, ty: f32) -> Mat4 {
    //     [ 1 0 0 tx ]
    // T = [ 0 1 0 ty ]
    //     [ 0 0 1 0  ]
    //     [ 0 0 0 1  ]
    Mat4::from_cols(
        Vec4::X,
        Vec4::Y,
        Vec4::Z,
        Vec4::new(tx, ty, 0.0, 1.0),
    )
}

/// Builds a counter-clockwise rotation about the z axis.
///
/// `angle` is in radians. Positive angles rotate counter-clockwise under
/// the usual right-handed, y-up convention; the z row and column stay at
/// identity.
pub fn rotation_matrix(angle: f32) -> Mat4 {
    //     [ cos -sin 0 0 ]
    // R = [ sin  cos 0 0 ]
    //     [ 0    0   1 0 ]
    //     [ 0    0   0 1 ]
    let (sin, cos) = angle.sin_cos();
    Mat4::from_cols(
        Vec4::new(cos, sin, 0.0, 0.0),
        Vec4::new(-sin, cos, 0.0, 0.0),
        Vec4::Z,
        Vec4::W,
    )
}

/// Builds a matrix scaling x by `sx` and y by `sy`.
///
/// The z diagonal entry is zero, not one: any z extent collapses onto the
/// z = 0 plane. This mirrors the reference behavior this example was
/// ported from, and the rest of the crate relies on it staying that way.
pub fn scale_matrix(sx: f32, sy: f32) -> Mat4 {
    //     [ sx 0  0 0 ]
    // S = [ 0  sy 0 0 ]
    //     [ 0  0  0 0 ]   <- z scale is zero, see above
    //     [ 0  0  0 1 ]
    Mat4::from_cols(
        Vec4::new(sx, 0.0, 0.0, 0.0),
        Vec4::new(0.0, sy, 0.0, 0.0),
        Vec4::ZERO,
        Vec4::W,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec4_close(a: Vec4, b: Vec4) {
        assert!(
            (a - b).abs().max_element() < 1e-6,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn translation_offsets_xy_only() {
        let m = translation_matrix(3.0, -2.0);
        let p = m * Vec4::new(1.0, 1.0, 5.0, 1.0);
        assert_vec4_close(p, Vec4::new(4.0, -1.0, 5.0, 1.0));
    }

    #[test]
    fn translation_ignores_vectors() {
        // w = 0 means direction, not position; translation must not move it.
        let m = translation_matrix(10.0, 10.0);
        let v = m * Vec4::new(1.0, 0.0, 0.0, 0.0);
        assert_vec4_close(v, Vec4::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn rotation_of_zero_is_identity() {
        assert_eq!(rotation_matrix(0.0), Mat4::IDENTITY);
    }

    #[test]
    fn rotation_is_counter_clockwise() {
        let angle = 0.7f32;
        let p = rotation_matrix(angle) * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert_vec4_close(p, Vec4::new(angle.cos(), angle.sin(), 0.0, 1.0));
    }

    #[test]
    fn quarter_turn_sends_x_to_y() {
        let p = rotation_matrix(std::f32::consts::FRAC_PI_2) * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert_vec4_close(p, Vec4::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn scale_stretches_xy_and_collapses_z() {
        let m = scale_matrix(2.0, 3.0);
        let p = m * Vec4::new(1.0, 1.0, 7.0, 1.0);
        // z maps to 0 regardless of input; see scale_matrix docs.
        assert_vec4_close(p, Vec4::new(2.0, 3.0, 0.0, 1.0));
    }

    #[test]
    fn builders_are_affine() {
        for m in [
            translation_matrix(4.0, 5.0),
            rotation_matrix(1.3),
            scale_matrix(0.5, 2.0),
        ] {
            assert_eq!(m.row(3), Vec4::new(0.0, 0.0, 0.0, 1.0));
        }
    }
}
