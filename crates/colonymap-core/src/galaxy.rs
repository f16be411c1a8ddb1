//! Star and planet entities and the galaxy that owns them.
//!
//! Stars are constructed once from catalog records and never destroyed.
//! Two derived collections are computed lazily and cached forever: a
//! star's planet list (procedural, fixed on first access) and its
//! neighbor list (all other stars by ascending distance). After
//! construction, the only fields that ever mutate are planet population
//! and founding year, and only the colonization engine touches those.

use rand::Rng;

use colonymap_logic::spectral::SpectralClass;
use colonymap_logic::{geometry, growth, orbit};

use crate::generation::generate_planets;

/// Letters for derived planet names, by orbital index.
const PLANET_LETTERS: &[u8] = b"abcdefghijklmn";

/// A star from the catalog (or the hardcoded home star).
#[derive(Debug, Clone)]
pub struct Star {
    /// Catalog (HIP) identifier. The home star is 0.
    pub id: u32,
    /// Explicit display name; `None` falls back to the catalog id.
    pub name: Option<String>,
    /// Right ascension in degrees.
    pub ascension: f64,
    /// Declination in degrees.
    pub declination: f64,
    /// Radial distance from the origin, in catalog distance units.
    pub distance: f64,
    /// Spectral class (malformed catalog codes already fell back to G2).
    pub class: SpectralClass,
    planets: Option<Vec<Planet>>,
    neighbors: Option<Vec<(usize, f64)>>,
}

impl Star {
    pub fn new(
        id: u32,
        name: Option<String>,
        ascension: f64,
        declination: f64,
        distance: f64,
        class: SpectralClass,
    ) -> Self {
        Self {
            id,
            name,
            ascension,
            declination,
            distance,
            class,
            planets: None,
            neighbors: None,
        }
    }

    /// Cartesian position, a pure function of the catalog coordinates.
    pub fn position(&self) -> [f64; 3] {
        geometry::position(self.ascension, self.declination, self.distance)
    }

    /// Display name, falling back to the catalog-id-derived default.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("HIP {}", self.id),
        }
    }

    /// Whether the star still carries its catalog-id-derived default name.
    pub fn has_default_name(&self) -> bool {
        self.name.is_none()
    }

    pub fn rename(&mut self, name: String) {
        self.name = Some(name);
    }

    /// Stellar mass in solar masses.
    pub fn mass(&self) -> f64 {
        self.class.mass()
    }

    /// Surface temperature in Kelvin.
    pub fn temperature(&self) -> f64 {
        self.class.temperature()
    }

    /// Luminosity in solar luminosities.
    pub fn luminosity(&self) -> f64 {
        self.class.luminosity()
    }

    /// Inner and outer habitable zone radii in AU.
    pub fn habitable_zone(&self) -> (f64, f64) {
        self.class.habitable_zone()
    }

    /// Frost line radius in AU.
    pub fn frost_line(&self) -> f64 {
        self.class.frost_line()
    }

    /// The star's planets, or an empty slice if they have not been
    /// generated yet.
    pub fn planets(&self) -> &[Planet] {
        self.planets.as_deref().unwrap_or(&[])
    }

    pub fn planets_mut(&mut self) -> &mut [Planet] {
        self.planets.as_deref_mut().unwrap_or_default()
    }

    /// Whether the planet list has been generated (or pre-seeded).
    pub fn has_planets(&self) -> bool {
        self.planets.is_some()
    }

    /// Install a hand-authored planet set. Suppresses procedural
    /// generation for this star; used for the home system.
    pub fn seed_planets(&mut self, planets: Vec<Planet>) {
        self.planets = Some(planets);
    }

    /// Display name for the planet at `planet_idx`: its explicit name, or
    /// "<star name> <letter>" by orbital index.
    pub fn planet_name(&self, planet_idx: usize) -> String {
        if let Some(name) = self.planets().get(planet_idx).and_then(|p| p.name.as_deref()) {
            return name.to_string();
        }
        let letter = PLANET_LETTERS.get(planet_idx).copied().unwrap_or(b'?') as char;
        format!("{} {}", self.display_name(), letter)
    }
}

/// A planet orbiting exactly one star. The rocky and habitable flags are
/// fixed at construction from the star's frost line and habitable zone;
/// population and founding year are the only fields that ever change.
#[derive(Debug, Clone)]
pub struct Planet {
    /// Orbital distance in AU.
    pub orbital_distance: f64,
    /// Current population. Tracked as f64 for fractional intermediate
    /// math; reported as whole people.
    pub population: f64,
    /// Explicit name; `None` derives "<star name> <letter>".
    pub name: Option<String>,
    /// Year first colonized; `None` means never colonized.
    pub founding_year: Option<i64>,
    /// Orbits inside the star's frost line.
    pub rocky: bool,
    /// Orbits inside the star's habitable zone.
    pub habitable: bool,
}

impl Planet {
    pub fn new(star: &Star, orbital_distance: f64) -> Self {
        let (hz_min, hz_max) = star.habitable_zone();
        Self {
            orbital_distance,
            population: 0.0,
            name: None,
            founding_year: None,
            rocky: orbital_distance < star.frost_line(),
            habitable: hz_min <= orbital_distance && orbital_distance <= hz_max,
        }
    }

    /// A hand-authored planet with a name, population and founding year
    /// already in place.
    pub fn seeded(
        star: &Star,
        orbital_distance: f64,
        population: f64,
        name: &str,
        founding_year: i64,
    ) -> Self {
        let mut planet = Self::new(star, orbital_distance);
        planet.population = population;
        planet.name = Some(name.to_string());
        planet.founding_year = Some(founding_year);
        planet
    }

    /// Keplerian orbital period in days around `star`.
    pub fn orbital_period_days(&self, star: &Star) -> f64 {
        orbit::orbital_period_days(star.mass(), self.orbital_distance)
    }

    /// Apply one year of growth. A planet that was never colonized does
    /// not grow.
    pub fn grow(&mut self, current_year: i64) {
        if self.founding_year.is_none() {
            return;
        }
        let rate = growth::growth_rate(self.founding_year, current_year);
        self.population = growth::apply_growth(self.population, rate);
    }
}

/// The full star catalog plus the home system. All galaxy-wide queries
/// take this context explicitly rather than reaching for globals, so
/// independent simulations can coexist in one process.
#[derive(Debug, Clone, Default)]
pub struct Galaxy {
    pub stars: Vec<Star>,
}

impl Galaxy {
    pub fn new(stars: Vec<Star>) -> Self {
        Self { stars }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Generate planets for `star_idx` if they have not been generated
    /// yet. Memoized: the first call fixes the planet list for the run.
    pub fn ensure_planets(&mut self, star_idx: usize, rng: &mut impl Rng) {
        if self.stars[star_idx].planets.is_none() {
            let planets = generate_planets(&self.stars[star_idx], rng);
            self.stars[star_idx].planets = Some(planets);
        }
    }

    /// All other stars ordered by ascending straight-line distance from
    /// `star_idx`, computed once and cached. Ties break on catalog id so
    /// the order is reproducible.
    pub fn ensure_neighbors(&mut self, star_idx: usize) -> &[(usize, f64)] {
        if self.stars[star_idx].neighbors.is_none() {
            let origin = self.stars[star_idx].position();
            let mut neighbors: Vec<(usize, f64)> = self
                .stars
                .iter()
                .enumerate()
                .filter(|(idx, _)| *idx != star_idx)
                .map(|(idx, star)| (idx, geometry::distance(origin, star.position())))
                .collect();
            neighbors.sort_by(|(a_idx, a_dist), (b_idx, b_dist)| {
                a_dist
                    .partial_cmp(b_dist)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| self.stars[*a_idx].id.cmp(&self.stars[*b_idx].id))
            });
            self.stars[star_idx].neighbors = Some(neighbors);
        }
        self.stars[star_idx].neighbors.as_deref().unwrap_or(&[])
    }

    /// Prefix of the sorted neighbor list within `cutoff` distance. The
    /// list is pre-sorted, so this is a prefix take, not a full filter.
    pub fn neighbors_within(&mut self, star_idx: usize, cutoff: f64) -> Vec<usize> {
        self.ensure_neighbors(star_idx)
            .iter()
            .take_while(|(_, dist)| *dist <= cutoff)
            .map(|(idx, _)| *idx)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn star(id: u32, ascension: f64, declination: f64, distance: f64) -> Star {
        Star::new(id, None, ascension, declination, distance, SpectralClass::parse("G2"))
    }

    #[test]
    fn display_name_falls_back_to_catalog_id() {
        let mut s = star(4422, 0.0, 0.0, 10.0);
        assert_eq!(s.display_name(), "HIP 4422");
        assert!(s.has_default_name());

        s.rename("Castula".to_string());
        assert_eq!(s.display_name(), "Castula");
        assert!(!s.has_default_name());
    }

    #[test]
    fn planet_names_derive_from_star_and_index() {
        let mut s = star(7, 0.0, 0.0, 1.0);
        let planets = vec![Planet::new(&s, 0.5), Planet::new(&s, 1.0), Planet::new(&s, 2.0)];
        s.seed_planets(planets);
        assert_eq!(s.planet_name(0), "HIP 7 a");
        assert_eq!(s.planet_name(2), "HIP 7 c");

        s.planets_mut()[1].name = Some("New Geneva".to_string());
        assert_eq!(s.planet_name(1), "New Geneva");
    }

    #[test]
    fn planet_flags_follow_star_zones() {
        // G2: habitable zone (0.853, 1.229) AU, frost line 2.765 AU.
        let s = star(1, 0.0, 0.0, 1.0);
        let close = Planet::new(&s, 0.5);
        assert!(close.rocky && !close.habitable);
        let temperate = Planet::new(&s, 1.0);
        assert!(temperate.rocky && temperate.habitable);
        let far = Planet::new(&s, 5.0);
        assert!(!far.rocky && !far.habitable);
    }

    #[test]
    fn unfounded_planet_never_grows() {
        let s = star(1, 0.0, 0.0, 1.0);
        let mut p = Planet::new(&s, 1.0);
        p.population = 1000.0;
        for year in 0..50 {
            p.grow(year);
        }
        assert_eq!(p.population, 1000.0);
    }

    #[test]
    fn founded_planet_grows() {
        let s = star(1, 0.0, 0.0, 1.0);
        let mut p = Planet::seeded(&s, 1.0, 1000.0, "Haven", 10);
        p.grow(10);
        assert_eq!(p.population, 1009.0); // floor(1000 * 1.009725)
    }

    #[test]
    fn planet_generation_is_memoized() {
        let mut galaxy = Galaxy::new(vec![star(1, 10.0, 20.0, 5.0)]);
        let mut rng = StdRng::seed_from_u64(7);

        galaxy.ensure_planets(0, &mut rng);
        let first: Vec<f64> = galaxy.stars[0].planets().iter().map(|p| p.orbital_distance).collect();
        assert!(!first.is_empty());

        // A second call must not regenerate, even with a fresh rng.
        let mut other_rng = StdRng::seed_from_u64(999);
        galaxy.ensure_planets(0, &mut other_rng);
        let second: Vec<f64> = galaxy.stars[0].planets().iter().map(|p| p.orbital_distance).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn seeded_planets_suppress_generation() {
        let mut s = star(1, 0.0, 0.0, 1.0);
        let planets = vec![Planet::new(&s, 1.0)];
        s.seed_planets(planets);
        let mut galaxy = Galaxy::new(vec![s]);
        let mut rng = StdRng::seed_from_u64(1);
        galaxy.ensure_planets(0, &mut rng);
        assert_eq!(galaxy.stars[0].planets().len(), 1);
    }

    #[test]
    fn neighbors_sorted_ascending_and_exclude_self() {
        let mut galaxy = Galaxy::new(vec![
            star(0, 0.0, 0.0, 0.0),
            star(1, 0.0, 0.0, 10.0),
            star(2, 0.0, 0.0, 3.0),
            star(3, 180.0, 0.0, 1.0),
        ]);
        let neighbors = galaxy.ensure_neighbors(0).to_vec();
        assert_eq!(neighbors.len(), 3);
        let order: Vec<usize> = neighbors.iter().map(|(idx, _)| *idx).collect();
        assert_eq!(order, vec![3, 2, 1]);
        let dists: Vec<f64> = neighbors.iter().map(|(_, d)| *d).collect();
        assert!(dists.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn neighbor_ties_break_on_catalog_id() {
        // Two stars at identical distance from the origin star.
        let mut galaxy = Galaxy::new(vec![
            star(0, 0.0, 0.0, 0.0),
            star(42, 0.0, 0.0, 5.0),
            star(7, 180.0, 0.0, 5.0),
        ]);
        let order: Vec<usize> = galaxy
            .ensure_neighbors(0)
            .iter()
            .map(|(idx, _)| *idx)
            .collect();
        // Same distance, so the lower catalog id (7, index 2) comes first.
        assert_eq!(order, vec![2, 1]);
    }

    #[test]
    fn neighbors_within_is_a_prefix_take() {
        let mut galaxy = Galaxy::new(vec![
            star(0, 0.0, 0.0, 0.0),
            star(1, 0.0, 0.0, 4.0),
            star(2, 0.0, 0.0, 20.0),
            star(3, 0.0, 0.0, 100.0),
        ]);
        let within = galaxy.neighbors_within(0, 20.0);
        assert_eq!(within, vec![1, 2]); // 20.0 is inclusive
        assert_eq!(galaxy.neighbors_within(0, 1.0), Vec::<usize>::new());
    }
}
