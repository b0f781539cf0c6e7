use indicatif::{ProgressBar, ProgressStyle};

use softray_core::models::image::Image;
use softray_core::models::pixel::Pixel;

use super::render::{Render, RenderError};
use super::tracer::{trace, TraceSettings};
use crate::scene::scene::Scene;

/// Single-threaded frame driver: one primary ray and one trace per pixel,
/// rows top to bottom.
pub struct BasicRender {

    settings: TraceSettings,
}

impl BasicRender {

    pub fn new() -> Self {
        Self {
            settings: TraceSettings::default(),
        }
    }

    pub fn with_settings(settings: TraceSettings) -> Self {
        Self {
            settings,
        }
    }
}

impl Render for BasicRender {

    fn render(&self, scene: &Scene, render_to: &mut Image) -> Result<(), RenderError> {
        let camera = scene.camera();
        let width = render_to.width;
        let height = render_to.height;

        let progress = ProgressBar::new(height as u64);
        progress.set_style(ProgressStyle::default_bar().template("rendering {bar:40} row {pos}/{len}"));

        for y in 0..height {
            for x in 0..width {
                let ray = camera.primary_ray(x, y, width, height);
                let color = trace(&ray, scene, &self.settings, 0);
                render_to.set_pixel(x, y, Pixel::from_normalized(color.x, color.y, color.z));
            }
            progress.inc(1);
        }

        progress.finish_and_clear();
        Ok(())
    }
}
