//! RGB/hex color conversion and random colors.

use rand::Rng;

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Renders the color as a lowercase `#rrggbb` hex string.
    ///
    /// # Examples
    /// ```
    /// use kitbag::color::Rgb;
    /// assert_eq!(Rgb { r: 125, g: 125, b: 125 }.to_hex(), "#7d7d7d");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parses a `#rrggbb` hex string.
    ///
    /// # Returns
    /// `None` when the input is not exactly `#` plus six hex digits.
    ///
    /// # Examples
    /// ```
    /// use kitbag::color::Rgb;
    /// assert_eq!(Rgb::from_hex("#23ff45"), Some(Rgb { r: 0x23, g: 0xff, b: 0x45 }));
    /// assert_eq!(Rgb::from_hex("23ff45"), None);
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }
}

/// Displays as `rgb(r, g, b)`, the inverse of [`parse_rgb`].
impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Parses an `rgb(r, g, b)` string.
///
/// Whitespace around the components is tolerated; channel values must
/// fit in `0..=255`.
///
/// # Returns
/// `None` for any malformed input.
///
/// # Examples
/// ```
/// use kitbag::color::{parse_rgb, Rgb};
/// assert_eq!(parse_rgb("rgb(125, 125, 125)"), Some(Rgb { r: 125, g: 125, b: 125 }));
/// assert_eq!(parse_rgb("rgb(300, 0, 0)"), None);
/// ```
pub fn parse_rgb(input: &str) -> Option<Rgb> {
    let inner = input.trim().strip_prefix("rgb(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(str::trim);
    let r = parts.next()?.parse().ok()?;
    let g = parts.next()?.parse().ok()?;
    let b = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Rgb { r, g, b })
}

/// Uniformly random color.
///
/// # Examples
/// ```
/// use kitbag::collection::create_rng;
/// use kitbag::color::random_color;
/// let mut rng = create_rng(42);
/// let c = random_color(&mut rng);
/// assert_eq!(c.to_hex().len(), 7);
/// ```
pub fn random_color<R: Rng>(rng: &mut R) -> Rgb {
    Rgb {
        r: rng.random(),
        g: rng.random(),
        b: rng.random(),
    }
}
