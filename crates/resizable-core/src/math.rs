/// Fast mathematical operations using SIMD-accelerated `glam` types.
///
/// Pointer positions and element sizes are carried as [`Vec2`], translations
/// written to an element as [`Vec3`], and translations decoded from a
/// computed transform as [`IVec3`] (whole pixels).
///
/// # Examples
///
/// ```
/// use resizable_core::math::{IVec3, Vec2};
///
/// let origin = Vec2::new(200.0, 200.0);
/// let pointer = Vec2::new(250.0, 230.0);
/// assert_eq!(pointer - origin, Vec2::new(50.0, 30.0));
///
/// let offset = IVec3::new(10, -4, 0);
/// assert_eq!(offset.as_vec3().x, 10.0);
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::*;
