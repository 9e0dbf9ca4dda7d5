use std::fmt;

/// The literal background value meaning "no fill".
pub const TRANSPARENT: &str = "transparent";

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
///
/// # Examples
///
/// ```rust
/// use deckwright::common::RGBColor;
///
/// let blue = RGBColor::from_hex("#1e40af").unwrap();
/// assert_eq!(blue.to_hex(), "1E40AF");
///
/// let white = RGBColor::from_hex("fff").unwrap();
/// assert_eq!(white, RGBColor::new(255, 255, 255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string.
    ///
    /// Accepts `RRGGBB` and the CSS shorthand `RGB`, each with or without a
    /// leading `#`. Anything else (named colors, `transparent`, `rgb(...)`)
    /// yields `None`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
                let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
                Some(Self::new(r * 17, g * 17, b * 17))
            }
            _ => None,
        }
    }

    /// Convert to hex string (without # prefix), as DrawingML `srgbClr` expects.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// Whether an authored background value means "no fill".
#[inline]
pub fn is_transparent(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(TRANSPARENT)
}

/// Normalize an authored color to DrawingML's `RRGGBB`, or `None` when it is
/// not a hex color.
pub fn normalize_hex(value: &str) -> Option<String> {
    RGBColor::from_hex(value).map(|c| c.to_hex())
}
