#[macro_use]
extern crate log;

pub mod geometry;
pub mod io;
pub mod objects;
pub mod render;
pub mod scene;
pub mod scenes;

use std::collections::HashMap;
use std::fs;
use std::time::Instant;

use env_logger::Env;

use softray_core::models::image::Image;
use softray_core::models::io::{ImageWriter, ImageWriterOptions};
use softray_core::models::ppm::PPMWriter;
use softray_core::utils::print_intro;

use crate::render::basic::BasicRender;
use crate::render::render::Render;
use crate::scenes::demo::DemoSceneProvider;
use crate::scenes::provider::SceneProvider;

const DEFAULT_LOGGING_LEVEL: &str = "info";

const OUTPUT_WIDTH: usize = 800;
const OUTPUT_HEIGHT: usize = 600;
const OUTPUT_PATH: &str = "output.ppm";

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();
    print_intro();

    render_scene();

    info!("done");
}

fn render_scene() {
    let scene_provider = DemoSceneProvider::new();
    let scene = scene_provider.scene(&HashMap::new());

    let render = BasicRender::new();
    let mut output = Image::new(OUTPUT_WIDTH, OUTPUT_HEIGHT);

    info!("rendering {}x{} image", OUTPUT_WIDTH, OUTPUT_HEIGHT);
    let started_at = Instant::now();
    render.render(&scene, &mut output).expect("failed to render scene");
    info!("rendering took {} ms", started_at.elapsed().as_millis());

    let image_bytes = PPMWriter::new().write(&output, &ImageWriterOptions::default())
        .expect("failed to write image");
    fs::write(OUTPUT_PATH, &image_bytes).expect("failed to save result image");

    info!("saved {}", OUTPUT_PATH);
}
