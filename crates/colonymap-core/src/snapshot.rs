//! Galaxy snapshot — the one serialized artifact a simulation produces.
//!
//! The snapshot carries enough for a renderer to plot star positions and
//! for a report to list colonized worlds. Stars whose planet lists were
//! never generated during the run export empty planet lists.

use std::fmt;
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use colonymap_logic::spectral::SpectralClass;

use crate::galaxy::{Galaxy, Star};

/// Snapshot format version (increment when the format changes).
const SNAPSHOT_VERSION: u32 = 1;

/// Serializable snapshot of the full galaxy state.
#[derive(Debug, Serialize, Deserialize)]
pub struct GalaxySnapshot {
    /// Snapshot format version.
    pub version: u32,
    pub stars: Vec<StarSnapshot>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StarSnapshot {
    pub id: u32,
    /// Resolved display name (explicit or catalog-id default).
    pub name: String,
    pub ascension: f64,
    pub declination: f64,
    pub distance: f64,
    pub class: SpectralClass,
    pub position: [f64; 3],
    pub planets: Vec<PlanetSnapshot>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlanetSnapshot {
    /// Resolved display name (explicit or derived from the star).
    pub name: String,
    pub orbital_distance: f64,
    /// Whole-person population.
    pub population: u64,
    pub founding_year: Option<i64>,
    pub rocky: bool,
    pub habitable: bool,
}

impl GalaxySnapshot {
    pub fn capture(galaxy: &Galaxy) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            stars: galaxy.stars.iter().map(snapshot_star).collect(),
        }
    }
}

fn snapshot_star(star: &Star) -> StarSnapshot {
    StarSnapshot {
        id: star.id,
        name: star.display_name(),
        ascension: star.ascension,
        declination: star.declination,
        distance: star.distance,
        class: star.class,
        position: star.position(),
        planets: star
            .planets()
            .iter()
            .enumerate()
            .map(|(idx, planet)| PlanetSnapshot {
                name: star.planet_name(idx),
                orbital_distance: planet.orbital_distance,
                population: planet.population.max(0.0) as u64,
                founding_year: planet.founding_year,
                rocky: planet.rocky,
                habitable: planet.habitable,
            })
            .collect(),
    }
}

/// Snapshot serialization error.
#[derive(Debug)]
pub enum SnapshotError {
    Json(serde_json::Error),
    VersionMismatch { expected: u32, found: u32 },
}

impl From<serde_json::Error> for SnapshotError {
    fn from(e: serde_json::Error) -> Self {
        SnapshotError::Json(e)
    }
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Json(e) => write!(f, "Serialization error: {}", e),
            SnapshotError::VersionMismatch { expected, found } => {
                write!(
                    f,
                    "Snapshot version mismatch: expected {}, found {}",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

/// Write the galaxy snapshot as JSON.
pub fn write_snapshot<W: Write>(writer: W, galaxy: &Galaxy) -> Result<(), SnapshotError> {
    serde_json::to_writer(writer, &GalaxySnapshot::capture(galaxy))?;
    Ok(())
}

/// Snapshot as an owned JSON buffer. Two runs with the same seed,
/// catalog and configuration produce byte-identical buffers.
pub fn snapshot_to_vec(galaxy: &Galaxy) -> Result<Vec<u8>, SnapshotError> {
    Ok(serde_json::to_vec(&GalaxySnapshot::capture(galaxy))?)
}

/// Read a snapshot back (for tooling and tests).
pub fn read_snapshot<R: Read>(reader: R) -> Result<GalaxySnapshot, SnapshotError> {
    let snapshot: GalaxySnapshot = serde_json::from_reader(reader)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::VersionMismatch {
            expected: SNAPSHOT_VERSION,
            found: snapshot.version,
        });
    }
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sol;
    use crate::galaxy::Galaxy;

    #[test]
    fn snapshot_roundtrips_through_json() {
        let galaxy = Galaxy::new(vec![sol()]);
        let bytes = snapshot_to_vec(&galaxy).expect("serialize");
        let snapshot = read_snapshot(bytes.as_slice()).expect("deserialize");

        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.stars.len(), 1);
        let home = &snapshot.stars[0];
        assert_eq!(home.name, "Sol");
        assert_eq!(home.class.to_string(), "G8");
        assert_eq!(home.planets.len(), 6);
        assert_eq!(home.planets[1].name, "Earth");
        assert_eq!(home.planets[1].population, 5_000_000_000);
        assert_eq!(home.planets[1].founding_year, Some(0));
    }

    #[test]
    fn population_reported_as_whole_people() {
        let mut galaxy = Galaxy::new(vec![sol()]);
        galaxy.stars[0].planets_mut()[0].population = 1234.9;
        let snapshot = GalaxySnapshot::capture(&galaxy);
        assert_eq!(snapshot.stars[0].planets[0].population, 1234);
    }

    #[test]
    fn ungenerated_planet_lists_export_empty() {
        let star = crate::galaxy::Star::new(
            5,
            None,
            1.0,
            2.0,
            3.0,
            colonymap_logic::spectral::SpectralClass::parse("K1"),
        );
        let snapshot = GalaxySnapshot::capture(&Galaxy::new(vec![star]));
        assert_eq!(snapshot.stars[0].name, "HIP 5");
        assert!(snapshot.stars[0].planets.is_empty());
    }

    #[test]
    fn version_mismatch_is_rejected() {
        let galaxy = Galaxy::new(vec![sol()]);
        let mut bytes = snapshot_to_vec(&galaxy).expect("serialize");
        // Corrupt the version field.
        let json = String::from_utf8(std::mem::take(&mut bytes)).expect("utf8");
        let corrupted = json.replacen("\"version\":1", "\"version\":99", 1);
        match read_snapshot(corrupted.as_bytes()) {
            Err(SnapshotError::VersionMismatch { expected, found }) => {
                assert_eq!(expected, SNAPSHOT_VERSION);
                assert_eq!(found, 99);
            }
            other => panic!("expected version mismatch, got {:?}", other),
        }
    }
}
