//! Color handling for Modelgram diagrams
//!
//! This module provides the [`Color`] type used for entity and choice-set
//! backgrounds. Group colors are derived deterministically from the group
//! name so the same application always gets the same tint, across runs and
//! across machines.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Hsl, OpaqueColor, Srgb};
use md5::{Digest, Md5};

/// Saturation used for group colors, in percent.
const GROUP_SATURATION: f32 = 60.0;

/// Lightness used for group colors, in percent.
///
/// High lightness keeps the dark diagram text readable on every hue.
const GROUP_LIGHTNESS: f32 = 90.0;

/// An opaque sRGB color rendered as `#rrggbb`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Color {
    rgb: [u8; 3],
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "#EEE", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use modelgram_core::color::Color;
    ///
    /// let grey = Color::new("#EEE").unwrap();
    /// assert_eq!(grey.to_string(), "#eeeeee");
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        let color = DynamicColor::from_str(color_str)
            .map_err(|err| format!("invalid color `{color_str}`: {err}"))?;
        let rgba = color.to_alpha_color::<Srgb>().to_rgba8();
        Ok(Self {
            rgb: [rgba.r, rgba.g, rgba.b],
        })
    }

    /// Create a `Color` directly from its red, green and blue channels.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b] }
    }

    /// Returns the display color for a group.
    ///
    /// The group name is hashed with MD5, the digest is read as a
    /// big-endian integer and reduced modulo 360 to pick a hue. Saturation
    /// and lightness are fixed, so only the hue varies between groups.
    ///
    /// # Examples
    ///
    /// ```
    /// use modelgram_core::color::Color;
    ///
    /// let billing = Color::for_group("billing");
    /// assert_eq!(billing, Color::for_group("billing"));
    /// assert_eq!(billing.to_string().len(), 7);
    /// ```
    pub fn for_group(group: &str) -> Self {
        let digest = Md5::digest(group.as_bytes());
        let hue = digest
            .iter()
            .fold(0u32, |acc, byte| (acc * 256 + u32::from(*byte)) % 360);

        let hsl = OpaqueColor::<Hsl>::new([hue as f32, GROUP_SATURATION, GROUP_LIGHTNESS]);
        let [r, g, b] = hsl.convert::<Srgb>().components;

        Self {
            rgb: [channel(r), channel(g), channel(b)],
        }
    }

    /// Returns the red, green and blue channels.
    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }
}

/// Truncates a unit-range channel to a byte.
fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let red = Color::new("#ff0000");
        assert_eq!(red, Ok(Color::from_rgb(255, 0, 0)));

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_new_short_hex() {
        let grey = Color::new("#EEE").unwrap();
        assert_eq!(grey.to_string(), "#eeeeee");
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::from_rgb(1, 171, 255).to_string(), "#01abff");
    }

    #[test]
    fn test_group_color_empty_name() {
        let color = Color::for_group("");
        let display = color.to_string();
        assert_eq!(display.len(), 7);
        assert!(display.starts_with('#'));
    }

    #[test]
    fn test_group_color_known_values() {
        assert_eq!(Color::for_group("auth").to_string(), "#e8f4d6");
        assert_eq!(Color::for_group("billing").to_string(), "#f4d6ef");
        assert_eq!(Color::for_group("library").to_string(), "#f4edd6");
        assert_eq!(Color::for_group("shop").to_string(), "#d6f4ed");
    }

    #[test]
    fn test_group_color_is_light() {
        // Lightness 90% keeps every channel in the upper range.
        for group in ["auth", "billing", "shipping", "library", "x"] {
            let [r, g, b] = Color::for_group(group).rgb();
            assert!(r >= 200 && g >= 200 && b >= 200, "{group} -> {r} {g} {b}");
        }
    }

    #[test]
    fn test_group_color_differs_between_groups() {
        let colors: std::collections::HashSet<_> = ["auth", "billing", "shipping", "library"]
            .iter()
            .map(|group| Color::for_group(group))
            .collect();
        assert!(colors.len() > 1);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Group colors are a pure function of the group name.
    fn check_group_color_is_deterministic(group: &str) -> Result<(), TestCaseError> {
        prop_assert_eq!(Color::for_group(group), Color::for_group(group));
        Ok(())
    }

    /// Group colors always display as `#` followed by six lowercase hex digits.
    fn check_group_color_format(group: &str) -> Result<(), TestCaseError> {
        let display = Color::for_group(group).to_string();

        prop_assert_eq!(display.len(), 7);
        prop_assert!(display.starts_with('#'));
        prop_assert!(
            display[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
        Ok(())
    }

    proptest! {
        #[test]
        fn group_color_is_deterministic(group in ".*") {
            check_group_color_is_deterministic(&group)?;
        }

        #[test]
        fn group_color_format(group in ".*") {
            check_group_color_format(&group)?;
        }
    }
}
