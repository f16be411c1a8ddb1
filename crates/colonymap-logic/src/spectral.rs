//! Spectral classification — letter+digit class codes and the physical
//! property bands they map to.
//!
//! Classification is total: malformed codes fall back to a neutral G2
//! instead of failing, and an unreadable subclass digit falls back to 5.
//! Properties are linearly interpolated within the class letter's band by
//! subclass digit. The band bounds are calibration data carried over from
//! the catalog tooling — O's temperature band really is descending.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Main-sequence spectral letter, hottest to coolest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpectralLetter {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl SpectralLetter {
    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'O' => Some(Self::O),
            'B' => Some(Self::B),
            'A' => Some(Self::A),
            'F' => Some(Self::F),
            'G' => Some(Self::G),
            'K' => Some(Self::K),
            'M' => Some(Self::M),
            _ => None,
        }
    }

    /// Surface temperature band in Kelvin.
    fn temperature_band(self) -> (f64, f64) {
        match self {
            Self::O => (30000.0, 10000.0),
            Self::B => (10000.0, 30000.0),
            Self::A => (7500.0, 10000.0),
            Self::F => (6000.0, 7500.0),
            Self::G => (5200.0, 6000.0),
            Self::K => (3700.0, 5200.0),
            Self::M => (2400.0, 3700.0),
        }
    }

    /// Mass band in solar masses.
    fn mass_band(self) -> (f64, f64) {
        match self {
            Self::O => (16.0, 120.0),
            Self::B => (2.1, 16.0),
            Self::A => (1.4, 2.1),
            Self::F => (1.04, 1.4),
            Self::G => (0.8, 1.04),
            Self::K => (0.45, 0.8),
            Self::M => (0.08, 0.45),
        }
    }

    /// Radius band in solar radii.
    fn radius_band(self) -> (f64, f64) {
        match self {
            Self::O => (6.6, 50.0),
            Self::B => (1.8, 6.6),
            Self::A => (1.4, 1.8),
            Self::F => (1.15, 1.4),
            Self::G => (0.96, 1.15),
            Self::K => (0.7, 0.96),
            Self::M => (0.1, 0.7),
        }
    }

    /// Luminosity band in solar luminosities.
    fn luminosity_band(self) -> (f64, f64) {
        match self {
            Self::O => (30000.0, 100000.0),
            Self::B => (25.0, 30000.0),
            Self::A => (5.0, 25.0),
            Self::F => (1.5, 5.0),
            Self::G => (0.6, 1.5),
            Self::K => (0.08, 0.6),
            Self::M => (0.0, 0.08),
        }
    }
}

impl fmt::Display for SpectralLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::O => 'O',
            Self::B => 'B',
            Self::A => 'A',
            Self::F => 'F',
            Self::G => 'G',
            Self::K => 'K',
            Self::M => 'M',
        };
        write!(f, "{}", letter)
    }
}

/// A parsed spectral class: letter plus subclass digit 0-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpectralClass {
    pub letter: SpectralLetter,
    pub subclass: u8,
}

impl SpectralClass {
    /// Neutral class substituted for unreadable codes.
    pub const FALLBACK: SpectralClass = SpectralClass {
        letter: SpectralLetter::G,
        subclass: 2,
    };

    /// Parse a two-character class code. Total: a code that is too short
    /// or has an unknown letter becomes G2; a valid letter with a
    /// non-digit subclass becomes subclass 5. Trailing characters
    /// (luminosity suffixes etc.) are ignored.
    pub fn parse(code: &str) -> Self {
        let mut chars = code.chars();
        let (Some(letter_ch), Some(digit_ch)) = (chars.next(), chars.next()) else {
            return Self::FALLBACK;
        };
        let Some(letter) = SpectralLetter::from_char(letter_ch) else {
            return Self::FALLBACK;
        };
        let subclass = match digit_ch.to_digit(10) {
            Some(d) => d as u8,
            None => 5,
        };
        SpectralClass { letter, subclass }
    }

    fn interpolate(&self, (min, max): (f64, f64)) -> f64 {
        min + (max - min) * (self.subclass as f64 / 9.0)
    }

    /// Surface temperature in Kelvin.
    pub fn temperature(&self) -> f64 {
        self.interpolate(self.letter.temperature_band())
    }

    /// Stellar mass in solar masses.
    pub fn mass(&self) -> f64 {
        self.interpolate(self.letter.mass_band())
    }

    /// Stellar radius in solar radii.
    pub fn radius(&self) -> f64 {
        self.interpolate(self.letter.radius_band())
    }

    /// Luminosity in solar luminosities.
    pub fn luminosity(&self) -> f64 {
        self.interpolate(self.letter.luminosity_band())
    }

    /// Inner and outer habitable zone radii in AU.
    pub fn habitable_zone(&self) -> (f64, f64) {
        let lum = self.luminosity();
        ((lum / 1.1).sqrt(), (lum / 0.53).sqrt())
    }

    /// Frost line radius in AU: volatiles condense beyond this orbit.
    pub fn frost_line(&self) -> f64 {
        let (_, outer) = self.habitable_zone();
        outer * 2.25
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.subclass)
    }
}

impl Serialize for SpectralClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SpectralClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(SpectralClass::parse(&code))
    }
}
