use super::image::Image;
use super::io::{ImageIOError, ImageWriter, ImageWriterOptions};

const MAX_COLOR_VALUE: u8 = 255;

/// Writes an image as PPM, plain text (P3) by default or binary (P6)
/// when the "binary" option is set.
pub struct PPMWriter {
}

impl PPMWriter {

    pub fn new() -> Self {
        PPMWriter {}
    }

    fn write_p3(&self, image: &Image) -> Vec<u8> {
        let mut result = format!("P3\n{} {}\n{}\n", image.width, image.height, MAX_COLOR_VALUE);

        for pixel in &image.pixels {
            result.push_str(&format!("{} {} {}\n", pixel.red, pixel.green, pixel.blue));
        }

        result.into_bytes()
    }

    fn write_p6(&self, image: &Image) -> Vec<u8> {
        let mut result = format!("P6\n{} {}\n{}\n", image.width, image.height, MAX_COLOR_VALUE).into_bytes();

        for pixel in &image.pixels {
            result.push(pixel.red);
            result.push(pixel.green);
            result.push(pixel.blue);
        }

        result
    }
}

impl ImageWriter for PPMWriter {

    fn write(&self, image: &Image, options: &ImageWriterOptions) -> Result<Vec<u8>, ImageIOError> {
        let binary = options.get_bool("binary", false)?;

        Ok(if binary {
            self.write_p6(image)
        } else {
            self.write_p3(image)
        })
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::models::pixel::Pixel;

    fn test_image() -> Image {
        let mut image = Image::new(2, 1);
        image.set_pixel(0, 0, Pixel::from_rgb(255, 0, 10));
        image.set_pixel(1, 0, Pixel::from_rgb(0, 128, 64));
        image
    }

    #[test]
    fn test_p3() {
        let bytes = PPMWriter::new().write(&test_image(), &ImageWriterOptions::default()).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "P3\n2 1\n255\n255 0 10\n0 128 64\n");
    }

    #[test]
    fn test_p6() {
        let options = ImageWriterOptions::default().with_option_bool("binary", true);
        let bytes = PPMWriter::new().write(&test_image(), &options).unwrap();

        assert_eq!(&bytes[0..9], b"P6\n2 1\n25");
        assert_eq!(&bytes[bytes.len() - 6..], &[255, 0, 10, 0, 128, 64]);
    }
}
