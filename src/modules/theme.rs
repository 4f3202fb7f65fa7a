use serde::{Deserialize, Serialize};

use crate::modules::mood::Mood;

/// Straight-alpha color handed to the shell for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

/// Lavender screen background.
pub const BACKGROUND: Rgba = Rgba::opaque(230, 230, 250);

/// Deep purple used for titles, the tab bar and the trend line.
pub const ACCENT: Rgba = Rgba::opaque(75, 0, 130);

/// Purple ramp for the frequency chart and legend, lightest for sad through
/// the full accent for great.
pub fn mood_color(mood: Mood) -> Rgba {
    match mood {
        Mood::Sad => Rgba::opaque(125, 75, 150).with_alpha(0.2),
        Mood::Down => Rgba::opaque(100, 50, 150).with_alpha(0.4),
        Mood::Neutral => ACCENT.with_alpha(0.6),
        Mood::Good => ACCENT.with_alpha(0.8),
        Mood::Great => ACCENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_darkens_toward_great() {
        let alphas: Vec<f32> = Mood::ALL.iter().map(|&mood| mood_color(mood).a).collect();
        for pair in alphas.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(mood_color(Mood::Great), ACCENT);
    }
}
