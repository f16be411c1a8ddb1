//! Catalog construction — raw record shape and galaxy assembly.
//!
//! File ingestion lives outside this crate; callers hand over already
//! deserialized records plus the per-HIP spectral class lookup. The home
//! system is hardcoded and always occupies index 0.

use std::collections::HashMap;

use serde::Deserialize;

use colonymap_logic::spectral::SpectralClass;

use crate::galaxy::{Galaxy, Planet, Star};

/// One raw star record, in the shape of the source catalog JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    /// Hipparcos identifier.
    #[serde(rename = "HIP")]
    pub hip: u32,
    /// Right ascension in degrees.
    pub rectascension: f64,
    /// Declination in degrees.
    pub declination: f64,
    /// Radial distance in catalog units.
    pub distance: f64,
}

/// Options for catalog assembly.
#[derive(Debug, Clone)]
pub struct CatalogOptions {
    /// Records farther than this (absolute value) are dropped.
    pub max_distance: f64,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self { max_distance: 750.0 }
    }
}

/// Spectral code assumed for stars missing from the class lookup.
const DEFAULT_CLASS: &str = "G5";

/// Build a galaxy from raw catalog records. Sol and its hand-authored
/// planets take index 0; records beyond the distance cutoff are dropped;
/// stars missing a classification default to G5.
pub fn build_galaxy(
    records: &[CatalogRecord],
    classes: &HashMap<u32, String>,
    names: &HashMap<u32, String>,
    options: &CatalogOptions,
) -> Galaxy {
    let mut stars = vec![sol()];
    for record in records {
        if record.distance.abs() > options.max_distance {
            continue;
        }
        let class = match classes.get(&record.hip) {
            Some(code) => SpectralClass::parse(code),
            None => SpectralClass::parse(DEFAULT_CLASS),
        };
        stars.push(Star::new(
            record.hip,
            names.get(&record.hip).cloned(),
            record.rectascension,
            record.declination,
            record.distance,
            class,
        ));
    }
    Galaxy::new(stars)
}

/// The home system: Sol at the origin with its pre-seeded colonies.
pub fn sol() -> Star {
    let mut sol = Star::new(
        0,
        Some("Sol".to_string()),
        0.0,
        0.0,
        0.0,
        SpectralClass::parse("G8"),
    );
    let planets = vec![
        Planet::seeded(&sol, 0.72, 1.0e9, "Venus", 0),
        Planet::seeded(&sol, 1.0, 5.0e9, "Earth", 0),
        Planet::seeded(&sol, 1.6, 3.0e9, "Mars", 100),
        Planet::seeded(&sol, 2.5, 2.0e9, "Belt", 100),
        Planet::seeded(&sol, 5.2, 4.0e9, "Jupiter", 125),
        Planet::seeded(&sol, 9.5, 2.0e9, "Saturn", 130),
    ];
    sol.seed_planets(planets);
    sol
}

/// Proper names for well-known nearby and bright stars, keyed by HIP id.
pub fn special_names() -> HashMap<u32, String> {
    [
        (71681, "Alpha Centauri A"),
        (71683, "Alpha Centauri B"),
        (54035, "Lalande 21185"),
        (16537, "Epsilon Eridani"),
        (114046, "Lacaille 9352"),
        (91772, "Struve 2398 A"),
        (91768, "Struve 2398 B"),
        (104214, "61 Cygni A"),
        (104217, "61 Cygni B"),
        (110893, "Kruger 60"),
        (106440, "Gliese 832"),
        (88601, "70 Ophiuchi"),
        (105090, "Lacaille 8760"),
        (24186, "Kapteyn"),
        (32349, "Sirius"),
        (37279, "Procyon"),
        (91262, "Vega"),
        (69673, "Arcturus"),
        (24608, "Capella"),
        (27989, "Betelgeuse"),
        (24436, "Rigel"),
        (21421, "Aldebaran"),
        (65474, "Spica"),
        (80763, "Antares"),
        (97649, "Altair"),
        (102098, "Deneb"),
        (11767, "Polaris"),
        (49669, "Regulus"),
        (36850, "Castor"),
        (37826, "Pollux"),
        (30438, "Canopus"),
        (113357, "Helvetios"),
    ]
    .into_iter()
    .map(|(hip, name)| (hip, name.to_string()))
    .collect()
}
