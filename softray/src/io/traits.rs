use custom_error::custom_error;

use crate::geometry::vector3::Vector3;
use crate::objects::triangle::Triangle;

custom_error! {pub SoftrayIOError
    FailedToLoad {description: String} = "Failed to load model: {description}",
}

/// How loaded geometry enters the scene: every triangle of a mesh gets
/// the same color and sidedness, vertices are uniformly scaled and then
/// offset.
pub struct MeshSettings {

    color: Vector3,
    scale: f64,
    offset: Vector3,
    double_sided: bool,
}

impl MeshSettings {

    pub fn default() -> Self {
        Self {
            color: Vector3::one(),
            scale: 1.0,
            offset: Vector3::zero(),
            double_sided: false,
        }
    }

    pub fn with_color(self, color: Vector3) -> Self {
        Self {
            color,
            ..self
        }
    }

    pub fn with_scale(self, scale: f64) -> Self {
        Self {
            scale,
            ..self
        }
    }

    pub fn with_offset(self, offset: Vector3) -> Self {
        Self {
            offset,
            ..self
        }
    }

    pub fn with_double_sided(self, double_sided: bool) -> Self {
        Self {
            double_sided,
            ..self
        }
    }

    pub fn color(&self) -> &Vector3 {
        &self.color
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> &Vector3 {
        &self.offset
    }

    pub fn double_sided(&self) -> bool {
        self.double_sided
    }
}

pub trait ModelLoader {

    fn load(&self, path: &str, settings: &MeshSettings) -> Result<Vec<Triangle>, SoftrayIOError>;
}
