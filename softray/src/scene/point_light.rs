use crate::geometry::vector3::Vector3;

/// Single fixed point light, no falloff.
pub struct PointLight {

    position: Vector3,
}

impl PointLight {

    pub const fn new(position: Vector3) -> Self {
        PointLight {
            position,
        }
    }

    pub fn position(&self) -> &Vector3 {
        &self.position
    }

    pub fn distance_to(&self, point: &Vector3) -> f64 {
        self.position.distance_to(point)
    }
}
