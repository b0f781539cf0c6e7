use std::f64::consts::PI;

use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;

const DEFAULT_FIELD_OF_VIEW: f64 = 60.0;

/// Pinhole camera at a fixed position, looking down -z.
pub struct Camera {

    position: Vector3,
    field_of_view: f64,
}

impl Camera {

    /// `field_of_view` is the vertical field of view in degrees.
    pub fn new(position: Vector3, field_of_view: f64) -> Self {
        Self {
            position,
            field_of_view,
        }
    }

    pub fn default() -> Self {
        Self::new(Vector3::zero(), DEFAULT_FIELD_OF_VIEW)
    }

    pub fn position(&self) -> &Vector3 {
        &self.position
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    /// Ray through the center of pixel (x, y) on a width x height image.
    pub fn primary_ray(&self, x: usize, y: usize, width: usize, height: usize) -> Ray {
        let aspect_ratio = width as f64 / height as f64;
        let scale = (self.field_of_view * 0.5 * PI / 180.0).tan();

        let camera_x = (2.0 * (x as f64 + 0.5) / width as f64 - 1.0) * aspect_ratio * scale;
        let camera_y = (1.0 - 2.0 * (y as f64 + 0.5) / height as f64) * scale;

        Ray::new(self.position, Vector3::new(camera_x, camera_y, -1.0).normalized())
    }
}
