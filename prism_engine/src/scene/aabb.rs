/// Axis-aligned bounding box.
///
/// Used for mesh bounds (local space), entity and scene bounds (world
/// space) and as the arena of the `Motion::Bounce` rule.

use glam::{Mat4, Vec3};

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Smallest box enclosing all points. `None` for an empty iterator.
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Smallest box enclosing both.
    pub fn union(&self, other: &AABB) -> AABB {
        AABB { min: self.min.min(other.min), max: self.max.max(other.max) }
    }

    /// World-space box enclosing this box under an affine `matrix`.
    ///
    /// The center maps as a point; the half extents grow by the absolute
    /// value of each basis column.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let center = matrix.transform_point3(self.center());
        let half = self.extents() * 0.5;
        let reach = matrix.x_axis.truncate().abs() * half.x
            + matrix.y_axis.truncate().abs() * half.y
            + matrix.z_axis.truncate().abs() * half.z;

        AABB { min: center - reach, max: center + reach }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_corners() {
        let aabb = AABB::new(Vec3::new(1.0, -1.0, 2.0), Vec3::new(-1.0, 1.0, 0.0));
        assert_eq!(aabb.min, Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn test_from_points() {
        let aabb = AABB::from_points([
            Vec3::new(0.0, 0.4, 0.0),
            Vec3::new(0.2, -0.1, 0.0),
            Vec3::new(-0.2, -0.6, 0.0),
        ])
        .unwrap();
        assert_eq!(aabb.min, Vec3::new(-0.2, -0.6, 0.0));
        assert_eq!(aabb.max, Vec3::new(0.2, 0.4, 0.0));
        assert!(AABB::from_points(Vec::<Vec3>::new()).is_none());
    }

    #[test]
    fn test_contains_point_inclusive() {
        let aabb = AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        assert!(aabb.contains_point(Vec3::ZERO));
        assert!(aabb.contains_point(Vec3::ONE));
        assert!(!aabb.contains_point(Vec3::new(0.0, 1.5, 0.0)));
    }

    #[test]
    fn test_transformed_translation_and_scale() {
        let aabb = AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let m = Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0)) * Mat4::from_scale(Vec3::splat(2.0));
        let t = aabb.transformed(&m);
        assert!(t.min.abs_diff_eq(Vec3::new(3.0, -2.0, -2.0), 1e-5));
        assert!(t.max.abs_diff_eq(Vec3::new(7.0, 2.0, 2.0), 1e-5));
        assert!(t.center().abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 1e-5));
        assert!(t.extents().abs_diff_eq(Vec3::splat(4.0), 1e-5));
    }

    #[test]
    fn test_transformed_rotation_grows_box() {
        let aabb = AABB::new(Vec3::new(-1.0, -0.5, 0.0), Vec3::new(1.0, 0.5, 0.0));
        let m = Mat4::from_rotation_z(std::f32::consts::FRAC_PI_2);
        let t = aabb.transformed(&m);
        assert!(t.min.abs_diff_eq(Vec3::new(-0.5, -1.0, 0.0), 1e-5));
        assert!(t.max.abs_diff_eq(Vec3::new(0.5, 1.0, 0.0), 1e-5));

        let quarter = Mat4::from_rotation_z(std::f32::consts::FRAC_PI_4);
        let cube = AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0)).transformed(&quarter);
        let diagonal = std::f32::consts::SQRT_2;
        assert!(cube.max.abs_diff_eq(Vec3::new(diagonal, diagonal, 1.0), 1e-5));
    }

    #[test]
    fn test_union() {
        let a = AABB::new(Vec3::ZERO, Vec3::ONE);
        let b = AABB::new(Vec3::new(-2.0, 0.5, 0.5), Vec3::new(0.0, 3.0, 0.5));
        let u = a.union(&b);
        assert_eq!(u.min, Vec3::new(-2.0, 0.0, 0.0));
        assert_eq!(u.max, Vec3::new(1.0, 3.0, 1.0));
    }
}
