use custom_error::custom_error;

use softray_core::models::image::Image;

use crate::scene::scene::Scene;

custom_error! {pub RenderError
    FailedToRender {description: String} = "Failed to render scene: {description}",
}

/// A full-frame render pass over an immutable scene. Tracing itself
/// cannot fail; the error channel is for implementations that depend on
/// fallible resources while producing pixels.
pub trait Render {

    fn render(&self, scene: &Scene, render_to: &mut Image) -> Result<(), RenderError>;
}
