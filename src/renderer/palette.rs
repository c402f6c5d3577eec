//! Minimalist color palette
//!
//! All colors are flat grays; opacity does the visual work, so the one
//! formatting concern is turning a 0-255 alpha into a CSS rgba() string.

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS rgba() string with an alpha on the 0-255 scale used by the sim
    pub fn rgba(&self, alpha: f32) -> String {
        let a = (alpha / 255.0).clamp(0.0, 1.0);
        format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, a)
    }
}

/// Page background
pub const BG: Color = Color::new(255, 255, 255);
/// Ink for shapes, ripples, and the title
pub const INK: Color = Color::new(31, 41, 55);
/// Muted ink for the subtitle
pub const SUBTLE: Color = Color::new(156, 163, 175);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_formatting() {
        assert_eq!(INK.rgba(255.0), "rgba(31,41,55,1.000)");
        assert_eq!(INK.rgba(0.0), "rgba(31,41,55,0.000)");
        assert_eq!(BG.rgba(127.5), "rgba(255,255,255,0.500)");
    }

    #[test]
    fn test_rgba_clamps_out_of_range_alpha() {
        assert_eq!(SUBTLE.rgba(-40.0), "rgba(156,163,175,0.000)");
        assert_eq!(SUBTLE.rgba(400.0), "rgba(156,163,175,1.000)");
    }
}
