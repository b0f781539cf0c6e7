use super::camera::Camera;
use super::point_light::PointLight;
use crate::objects::triangle::Triangle;

/// Flat, unordered triangle list plus camera and light. Built once by a
/// scene provider, read-only while rendering.
pub struct Scene {

    camera: Camera,
    light: PointLight,
    triangles: Vec<Triangle>,
}

impl Scene {

    pub fn new(camera: Camera, light: PointLight) -> Self {
        Self {
            camera,
            light,
            triangles: Vec::new(),
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn light(&self) -> &PointLight {
        &self.light
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn add_triangles(&mut self, triangles: Vec<Triangle>) {
        self.triangles.extend(triangles);
    }

    pub fn triangles(&self) -> &Vec<Triangle> {
        &self.triangles
    }
}
