use std::collections::HashMap;

use super::provider::SceneProvider;
use crate::geometry::vector3::Vector3;
use crate::io::obj::obj_file_reader::ObjFileLoader;
use crate::io::traits::{MeshSettings, ModelLoader};
use crate::objects::triangle::Triangle;
use crate::scene::camera::Camera;
use crate::scene::point_light::PointLight;
use crate::scene::scene::Scene;

const DEFAULT_MODEL_PATH: &str = "assets/model.obj";

const LIGHT_POSITION: Vector3 = Vector3::new(2.0, 5.0, 1.0);
const CAMERA_POSITION: Vector3 = Vector3::new(0.0, 1.5, 4.0);

/// Bronze mesh in a green-floor, blue-wall box, with three small yellow
/// triangles marking the light.
pub struct DemoSceneProvider {

    model_loader: Box<dyn ModelLoader>,
}

impl DemoSceneProvider {

    pub fn new() -> Self {
        Self {
            model_loader: Box::new(ObjFileLoader::new()),
        }
    }
}

impl SceneProvider for DemoSceneProvider {

    fn scene(&self, options: &HashMap<String, String>) -> Scene {
        let mut scene = Scene::new(
            Camera::new(CAMERA_POSITION, 60.0),
            PointLight::new(LIGHT_POSITION),
        );

        let model_path = options.get("model").map(|v| v.as_str()).unwrap_or(DEFAULT_MODEL_PATH);
        let mesh_settings = MeshSettings::default()
            .with_color(Vector3::new(0.8, 0.5, 0.2))
            .with_offset(Vector3::new(0.0, 0.0, -2.0))
            .with_double_sided(true);

        // A scene without its mesh still renders, so a broken model file
        // only costs a warning.
        match self.model_loader.load(model_path, &mesh_settings) {
            Ok(triangles) => scene.add_triangles(triangles),
            Err(err) => log::warn!("rendering without model: {}", err),
        }

        add_floor(&mut scene);
        add_back_wall(&mut scene);
        add_light_marker(&mut scene);

        scene
    }
}

fn add_floor(scene: &mut Scene) {
    let color = Vector3::new(0.3, 0.6, 0.3);
    scene.add_triangle(Triangle::new(
        Vector3::new(-5.0, -1.0, -5.0),
        Vector3::new(5.0, -1.0, -5.0),
        Vector3::new(5.0, -1.0, 5.0),
        color,
        true,
    ));
    scene.add_triangle(Triangle::new(
        Vector3::new(-5.0, -1.0, -5.0),
        Vector3::new(5.0, -1.0, 5.0),
        Vector3::new(-5.0, -1.0, 5.0),
        color,
        true,
    ));
}

fn add_back_wall(scene: &mut Scene) {
    let color = Vector3::new(0.4, 0.4, 0.6);
    scene.add_triangle(Triangle::new(
        Vector3::new(-5.0, 5.0, -5.0),
        Vector3::new(5.0, 5.0, -5.0),
        Vector3::new(5.0, -1.0, -5.0),
        color,
        true,
    ));
    scene.add_triangle(Triangle::new(
        Vector3::new(-5.0, 5.0, -5.0),
        Vector3::new(5.0, -1.0, -5.0),
        Vector3::new(-5.0, -1.0, -5.0),
        color,
        true,
    ));
}

fn add_light_marker(scene: &mut Scene) {
    let color = Vector3::new(1.0, 1.0, 0.5);
    let offsets = [
        Vector3::new(0.1, 0.1, 0.1),
        Vector3::new(-0.1, 0.1, 0.1),
        Vector3::new(0.1, -0.1, 0.1),
    ];

    for offset in &offsets {
        scene.add_triangle(Triangle::new(
            LIGHT_POSITION,
            LIGHT_POSITION + Vector3::new(0.2, 0.0, 0.0) + *offset,
            LIGHT_POSITION + Vector3::new(0.0, 0.2, 0.0) + *offset,
            color,
            true,
        ));
    }
}
