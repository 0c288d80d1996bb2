//! Provides matrix conversion for resolved transformations using glam.
//!
//! A transformation is applied as translate, then rotate (Euler XYZ, degrees),
//! then scale. Left-hand contexts mirror the transformation across the YZ
//! plane: the X translation and the Y/Z rotations are negated.
//!
//! # Examples
//! ```
//! use display_transforms::transform::{Hand, Transformation};
//!
//! let m = Transformation::IDENTITY.to_mat4(Hand::Left);
//! assert_eq!(m, glam::Mat4::IDENTITY);
//! ```

use glam::{EulerRot, Mat4, Quat};

use super::{Transformation, Vector3};

/// The hand an item is held in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Hand {
    #[default]
    Right,
    Left,
}

impl Transformation {
    /// Converts to a glam transformation matrix for the given hand.
    ///
    /// # Examples
    /// ```
    /// use display_transforms::transform::{Hand, Transformation, Vector3};
    ///
    /// let t = Transformation::new(Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0), Vector3::ONE);
    /// let p = t.transform_point([0.0, 0.0, 0.0], Hand::Left);
    /// assert_eq!(p, [-1.0, 0.0, 0.0]);
    /// ```
    pub fn to_mat4(&self, hand: Hand) -> Mat4 {
        if self.is_identity() {
            return Mat4::IDENTITY;
        }

        let (translation, rotation) = match hand {
            Hand::Right => (self.translation, self.rotation),
            Hand::Left => (
                self.translation * Vector3::new(-1.0, 1.0, 1.0),
                self.rotation * Vector3::new(1.0, -1.0, -1.0),
            ),
        };

        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            rotation.x.to_radians(),
            rotation.y.to_radians(),
            rotation.z.to_radians(),
        );

        Mat4::from_scale_rotation_translation(self.scale, rotation, translation)
    }

    /// Applies this transformation to a single point.
    pub fn transform_point(&self, point: [f32; 3], hand: Hand) -> [f32; 3] {
        self.to_mat4(hand)
            .transform_point3(Vector3::from_array(point))
            .to_array()
    }
}
