#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {

    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Pixel {
            red,
            green,
            blue,
        }
    }

    pub const fn black() -> Self {
        Self::from_rgb(0, 0, 0)
    }

    /// Converts a color with float channels in nominal [0, 1] range to a
    /// displayable pixel. Out of range channels are clamped, not wrapped.
    pub fn from_normalized(red: f64, green: f64, blue: f64) -> Self {
        Self::from_rgb(
            normalized_to_channel(red),
            normalized_to_channel(green),
            normalized_to_channel(blue),
        )
    }
}

fn normalized_to_channel(value: f64) -> u8 {
    (value * 255.0).max(0.0).min(255.0).round() as u8
}
