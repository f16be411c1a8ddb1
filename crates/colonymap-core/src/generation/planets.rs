//! Procedural planet placement around a star.
//!
//! Orbits are laid out in fixed swathes either side of the frost line:
//! rocky worlds pack the inner system, volatile-rich worlds spread from
//! the frost line out to the system edge. Each planet jitters uniformly
//! within its own swathe, so orbits always come out in increasing order.

use rand::Rng;

use crate::galaxy::{Planet, Star};

/// Planet count bounds; the count is drawn once per star.
const MIN_PLANETS: usize = 5;
const MAX_PLANETS: usize = 12;

/// Internal distance units per AU.
const UNITS_PER_AU: f64 = 215.0;

/// Innermost stable orbit, in internal units.
const INNER_EDGE: f64 = 50.0;

/// System edge, in internal units.
const OUTER_EDGE: f64 = 4100.0;

/// Generate the full planet list for `star`, in increasing orbital
/// order. The minimum count of 5 splits into at least 2 inner and 3
/// outer planets, so neither swathe divides by zero.
pub fn generate_planets(star: &Star, rng: &mut impl Rng) -> Vec<Planet> {
    let count = rng.gen_range(MIN_PLANETS..=MAX_PLANETS);
    let inner = count / 2;
    let outer = count - inner;

    // Dim M dwarfs put the frost line inside the inner edge, and hot B/O
    // stars put it beyond the system edge; pin it just inside the span so
    // both swathes keep width.
    let boundary = (star.frost_line() * UNITS_PER_AU)
        .clamp(INNER_EDGE * 2.0, OUTER_EDGE - INNER_EDGE * 2.0);
    let inner_swathe = (boundary - INNER_EDGE) / inner as f64;
    let outer_swathe = (OUTER_EDGE - boundary) / outer as f64;

    let mut planets = Vec::with_capacity(count);
    for n in 0..inner {
        let units = inner_swathe * rng.gen::<f64>() + inner_swathe * n as f64 + INNER_EDGE;
        planets.push(Planet::new(star, units / UNITS_PER_AU));
    }
    for n in 0..outer {
        let units =
            outer_swathe * rng.gen::<f64>() + outer_swathe * n as f64 + boundary + INNER_EDGE;
        planets.push(Planet::new(star, units / UNITS_PER_AU));
    }
    planets
}

#[cfg(test)]
mod tests {
    use super::*;
    use colonymap_logic::spectral::SpectralClass;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn star(class: &str) -> Star {
        Star::new(1, None, 15.0, 30.0, 12.0, SpectralClass::parse(class))
    }

    #[test]
    fn count_always_in_bounds() {
        let s = star("G2");
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let planets = generate_planets(&s, &mut rng);
            assert!(planets.len() >= MIN_PLANETS && planets.len() <= MAX_PLANETS);
        }
    }

    #[test]
    fn orbits_strictly_increasing() {
        let mut rng = StdRng::seed_from_u64(23);
        for class in ["O5", "B0", "A3", "F7", "G2", "K9", "M0", "M9"] {
            let s = star(class);
            for _ in 0..50 {
                let planets = generate_planets(&s, &mut rng);
                let orbits: Vec<f64> = planets.iter().map(|p| p.orbital_distance).collect();
                assert!(
                    orbits.windows(2).all(|w| w[0] < w[1]),
                    "{}: {:?}",
                    class,
                    orbits
                );
            }
        }
    }

    #[test]
    fn orbits_stay_inside_the_generation_span() {
        let s = star("G5");
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..100 {
            for planet in generate_planets(&s, &mut rng) {
                assert!(planet.orbital_distance >= INNER_EDGE / UNITS_PER_AU);
                assert!(planet.orbital_distance <= (OUTER_EDGE + INNER_EDGE) / UNITS_PER_AU);
            }
        }
    }

    #[test]
    fn rocky_flag_agrees_with_frost_line() {
        let s = star("K4");
        let frost = s.frost_line();
        let mut rng = StdRng::seed_from_u64(47);
        for _ in 0..100 {
            for planet in generate_planets(&s, &mut rng) {
                assert_eq!(planet.rocky, planet.orbital_distance < frost);
            }
        }
    }

    #[test]
    fn habitable_flag_agrees_with_zone() {
        let s = star("G2");
        let (hz_min, hz_max) = s.habitable_zone();
        let mut rng = StdRng::seed_from_u64(53);
        for _ in 0..100 {
            for planet in generate_planets(&s, &mut rng) {
                let expected =
                    planet.orbital_distance >= hz_min && planet.orbital_distance <= hz_max;
                assert_eq!(planet.habitable, expected);
            }
        }
    }

    #[test]
    fn degenerate_frost_lines_still_generate() {
        // M0 has zero luminosity (frost line 0); O9 has a frost line far
        // beyond the system edge. Both must still produce ordered orbits.
        let mut rng = StdRng::seed_from_u64(61);
        for class in ["M0", "O9"] {
            let planets = generate_planets(&star(class), &mut rng);
            assert!(planets.len() >= MIN_PLANETS);
            let orbits: Vec<f64> = planets.iter().map(|p| p.orbital_distance).collect();
            assert!(orbits.windows(2).all(|w| w[0] < w[1]), "{:?}", orbits);
        }
    }
}
