use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::render::intersection::Intersection;

/// Minimum accepted hit distance. Also the bias applied to secondary ray
/// origins so a surface does not shadow or reflect itself.
pub const EPSILON: f64 = 1e-5;

#[derive(Clone, Debug)]
pub struct Triangle {

    v0: Vector3,
    v1: Vector3,
    v2: Vector3,

    color: Vector3,
    double_sided: bool,
}

impl Triangle {

    pub const fn new(v0: Vector3, v1: Vector3, v2: Vector3, color: Vector3, double_sided: bool) -> Self {
        Self {
            v0,
            v1,
            v2,
            color,
            double_sided,
        }
    }

    pub fn vertices(&self) -> [&Vector3; 3] {
        [&self.v0, &self.v1, &self.v2]
    }

    pub fn color(&self) -> &Vector3 {
        &self.color
    }

    pub fn double_sided(&self) -> bool {
        self.double_sided
    }

    /// Möller-Trumbore ray/triangle intersection. Returns the closest hit
    /// strictly in front of the ray origin, or `None`.
    pub fn check_intersection(&self, ray: &Ray) -> Option<Intersection> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let direction = ray.direction();

        let h = direction.cross_product(&edge2);
        let a = edge1.dot_product(&h);

        // Backface culling, single-sided triangles only. Double-sided
        // triangles with a near-zero determinant fall through to 1/a.
        if !self.double_sided && a < EPSILON && a > -EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = *ray.origin() - self.v0;
        let u = f * s.dot_product(&h);

        if u < 0.0 || u > 1.0 {
            return None;
        }

        let q = s.cross_product(&edge1);
        let v = f * direction.dot_product(&q);

        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot_product(&q);
        if t <= EPSILON {
            return None;
        }

        let mut normal = edge1.cross_product(&edge2).normalized();
        if self.double_sided && normal.dot_product(direction) > 0.0 {
            normal = -normal;
        }

        Some(Intersection::new(t, ray.point(t), normal))
    }
}
