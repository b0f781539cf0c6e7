use crate::geometry::vector3::Vector3;

/// A single ray/triangle hit: how far along the ray it happened, where,
/// and the surface normal at that point.
#[derive(Copy, Clone, Debug)]
pub struct Intersection {

    distance: f64,
    position: Vector3,
    normal: Vector3,
}

impl Intersection {

    pub fn new(distance: f64, position: Vector3, normal: Vector3) -> Self {
        Self {
            distance,
            position,
            normal,
        }
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn position(&self) -> &Vector3 {
        &self.position
    }

    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }
}
