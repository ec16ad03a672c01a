//! RGBA colors and their CSS representation

use serde::{Deserialize, Serialize};

/// 8-bit RGB color with a float alpha, matching the Canvas 2D color model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build from a `0xRRGGBB` literal
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Darken every channel by `amount`, saturating at zero
    pub fn darken(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
            a: self.a,
        }
    }

    /// CSS color string (`rgb(..)` when opaque, `rgba(..)` otherwise)
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Named colors used by the scenes
pub mod palette {
    use super::Rgba;

    pub const STEM: Rgba = Rgba::hex(0x228B22);
    pub const GOLD: Rgba = Rgba::hex(0xFFD700);
    pub const ORANGE: Rgba = Rgba::hex(0xFFA500);
    pub const WHITE: Rgba = Rgba::hex(0xFFFFFF);
    pub const TRUNK: Rgba = Rgba::hex(0x8B4513);
    pub const SKY_TOP: Rgba = Rgba::hex(0x87CEEB);
    pub const SKY_HORIZON: Rgba = Rgba::hex(0xE0F6FF);
    pub const GROUND_NEAR: Rgba = Rgba::hex(0x90EE90);
    pub const GROUND_FAR: Rgba = Rgba::hex(0x228B22);
    pub const NIGHT: Rgba = Rgba::hex(0x000000);

    /// Firework spark colors
    pub const FIREWORKS: [Rgba; 5] = [
        Rgba::hex(0xFF0080),
        Rgba::hex(0x00FFFF),
        Rgba::hex(0xFFFF00),
        Rgba::hex(0xFF00FF),
        Rgba::hex(0x00FF00),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_strings() {
        assert_eq!(Rgba::hex(0xFF0080).to_css(), "rgb(255, 0, 128)");
        assert_eq!(Rgba::rgba(0, 0, 0, 0.1).to_css(), "rgba(0, 0, 0, 0.1)");
    }

    #[test]
    fn test_darken_saturates() {
        let c = Rgba::rgb(20, 100, 255).darken(30);
        assert_eq!((c.r, c.g, c.b), (0, 70, 225));
    }
}
