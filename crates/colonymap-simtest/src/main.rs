//! ColonyMap Headless Simulation Harness
//!
//! Validates classification, generation and full colonization runs
//! without a renderer. Runs entirely in-process — no I/O beyond stdout.
//!
//! Usage:
//!   cargo run -p colonymap-simtest
//!   cargo run -p colonymap-simtest -- --verbose

use std::collections::HashMap;

use colonymap_core::catalog::{build_galaxy, sol, special_names, CatalogOptions, CatalogRecord};
use colonymap_core::engine::{ColonizationEngine, SimConfig};
use colonymap_core::galaxy::Star;
use colonymap_core::generation::generate_planets;
use colonymap_core::snapshot::{read_snapshot, snapshot_to_vec};
use colonymap_logic::geometry;
use colonymap_logic::growth::{growth_rate, GROWTH_FLOOR};
use colonymap_logic::spectral::SpectralClass;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== ColonyMap Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Spectral classification sweep
    results.extend(validate_classification(verbose));

    // 2. Derived star properties
    results.extend(validate_star_derivation(verbose));

    // 3. Procedural planet generation
    results.extend(validate_planet_generation(verbose));

    // 4. Growth model
    results.extend(validate_growth(verbose));

    // 5. Full colonization run
    results.extend(validate_colonization_run(verbose));

    // 6. Seeded determinism
    results.extend(validate_determinism(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Spectral classification ──────────────────────────────────────────

fn validate_classification(_verbose: bool) -> Vec<TestResult> {
    println!("--- Spectral Classification ---");
    let mut results = Vec::new();

    // Every letter/digit combination classifies and round-trips through
    // its display form.
    let mut total = true;
    for letter in ['O', 'B', 'A', 'F', 'G', 'K', 'M'] {
        for digit in 0..=9u8 {
            let code = format!("{}{}", letter, digit);
            let class = SpectralClass::parse(&code);
            if class.to_string() != code {
                total = false;
            }
            if class.mass() <= 0.0 || class.temperature() <= 0.0 {
                total = false;
            }
        }
    }
    results.push(TestResult {
        name: "classification_total".into(),
        passed: total,
        detail: "all 70 letter/digit codes classify with positive mass".into(),
    });

    // Malformed codes fall back instead of failing.
    let fallback_ok = SpectralClass::parse("") == SpectralClass::FALLBACK
        && SpectralClass::parse("X7") == SpectralClass::FALLBACK
        && SpectralClass::parse("G") == SpectralClass::FALLBACK
        && SpectralClass::parse("K?").subclass == 5;
    results.push(TestResult {
        name: "malformed_codes_fall_back".into(),
        passed: fallback_ok,
        detail: "unreadable codes become G2, unreadable digits become 5".into(),
    });

    // Interpolation is monotonic in subclass for an ascending band.
    let masses: Vec<f64> = (0..=9u8)
        .map(|d| SpectralClass::parse(&format!("G{}", d)).mass())
        .collect();
    let monotonic = masses.windows(2).all(|w| w[0] < w[1]);
    results.push(TestResult {
        name: "interpolation_monotonic".into(),
        passed: monotonic,
        detail: format!("G0..G9 mass {:.2}..{:.2} solar", masses[0], masses[9]),
    });

    results
}

// ── 2. Derived star properties ──────────────────────────────────────────

fn validate_star_derivation(_verbose: bool) -> Vec<TestResult> {
    println!("--- Star Derivation ---");
    let mut results = Vec::new();

    let star = Star::new(71683, None, 30.0, 60.0, 4.4, SpectralClass::parse("G2"));

    // Cartesian position sits on a sphere of the catalog distance.
    let pos = star.position();
    let radius = (pos[0] * pos[0] + pos[1] * pos[1] + pos[2] * pos[2]).sqrt();
    results.push(TestResult {
        name: "position_preserves_distance".into(),
        passed: (radius - 4.4).abs() < 1e-9,
        detail: format!("|position| = {:.6}", radius),
    });

    let origin = [0.0, 0.0, 0.0];
    results.push(TestResult {
        name: "distance_matches_catalog".into(),
        passed: (geometry::distance(origin, pos) - 4.4).abs() < 1e-9,
        detail: "euclidean distance from origin equals catalog distance".into(),
    });

    // The frost line always sits beyond the habitable zone.
    let mut ordered = true;
    for class in ["B5", "A0", "F3", "G2", "K7", "M5"] {
        let s = Star::new(1, None, 0.0, 0.0, 1.0, SpectralClass::parse(class));
        let (hz_min, hz_max) = s.habitable_zone();
        if !(hz_min < hz_max && s.frost_line() > hz_max) {
            ordered = false;
        }
    }
    results.push(TestResult {
        name: "zone_ordering".into(),
        passed: ordered,
        detail: "hz_min < hz_max < frost line for B through M".into(),
    });

    // Sol's third rock orbits in roughly an Earth year.
    let home = sol();
    let period = home.planets()[1].orbital_period_days(&home);
    results.push(TestResult {
        name: "earth_year".into(),
        passed: (period - 365.25).abs() < 20.0,
        detail: format!("Earth analogue period {:.1} days", period),
    });

    results
}

// ── 3. Planet generation ────────────────────────────────────────────────

fn validate_planet_generation(_verbose: bool) -> Vec<TestResult> {
    println!("--- Planet Generation ---");
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(99);

    let mut count_ok = true;
    let mut ordered = true;
    let mut flags_ok = true;
    for class in ["O5", "B2", "A7", "F0", "G2", "K4", "M0", "M9"] {
        let star = Star::new(7, None, 10.0, 20.0, 30.0, SpectralClass::parse(class));
        let (hz_min, hz_max) = star.habitable_zone();
        let frost = star.frost_line();
        for _ in 0..50 {
            let planets = generate_planets(&star, &mut rng);
            if !(5..=12).contains(&planets.len()) {
                count_ok = false;
            }
            if !planets
                .windows(2)
                .all(|w| w[0].orbital_distance < w[1].orbital_distance)
            {
                ordered = false;
            }
            for p in &planets {
                if p.rocky != (p.orbital_distance < frost) {
                    flags_ok = false;
                }
                let in_zone = p.orbital_distance >= hz_min && p.orbital_distance <= hz_max;
                if p.habitable != in_zone {
                    flags_ok = false;
                }
            }
        }
    }
    results.push(TestResult {
        name: "planet_count_bounds".into(),
        passed: count_ok,
        detail: "5 to 12 planets per star across all classes".into(),
    });
    results.push(TestResult {
        name: "orbits_increasing".into(),
        passed: ordered,
        detail: "orbits strictly increasing, degenerate frost lines included".into(),
    });
    results.push(TestResult {
        name: "rocky_and_habitable_flags".into(),
        passed: flags_ok,
        detail: "flags agree with frost line and habitable zone".into(),
    });

    results
}

// ── 4. Growth model ─────────────────────────────────────────────────────

fn validate_growth(_verbose: bool) -> Vec<TestResult> {
    println!("--- Growth Model ---");
    let mut results = Vec::new();

    let floored = (0..=500).all(|age| growth_rate(Some(0), age) >= GROWTH_FLOOR);
    results.push(TestResult {
        name: "growth_floor_holds".into(),
        passed: floored,
        detail: format!("rate >= {} for ages 0..=500", GROWTH_FLOOR),
    });

    let boom = growth_rate(Some(130), 135);
    let settled = growth_rate(Some(130), 260);
    results.push(TestResult {
        name: "young_colonies_boom".into(),
        passed: boom > settled && settled == GROWTH_FLOOR,
        detail: format!("age 5 rate {:.6}, age 130 rate {:.6}", boom, settled),
    });

    results.push(TestResult {
        name: "unfounded_planets_are_inert".into(),
        passed: growth_rate(None, 9999) == 1.0,
        detail: "no founding year means unit growth".into(),
    });

    results
}

// ── 5. Colonization run ─────────────────────────────────────────────────

fn harness_catalog() -> (Vec<CatalogRecord>, HashMap<u32, String>) {
    let mut records = Vec::new();
    let mut classes = HashMap::new();
    for n in 0..10u32 {
        let hip = 3000 + n;
        records.push(CatalogRecord {
            hip,
            rectascension: 36.0 * n as f64,
            declination: 15.0 * (n % 3) as f64,
            distance: 4.0 + n as f64,
        });
        classes.insert(hip, ["G2", "K3", "F8"][(n % 3) as usize].to_string());
    }
    (records, classes)
}

fn harness_config() -> SimConfig {
    SimConfig {
        steps: 80,
        population_threshold: 1.0e7,
        emigration_fraction: 0.1,
        seed: 7,
        ..SimConfig::default()
    }
}

fn validate_colonization_run(verbose: bool) -> Vec<TestResult> {
    println!("--- Colonization Run ---");
    let mut results = Vec::new();

    let (records, classes) = harness_catalog();
    let galaxy = build_galaxy(&records, &classes, &special_names(), &CatalogOptions::default());
    let mut engine = ColonizationEngine::new(galaxy, harness_config());
    if let Err(e) = engine.run() {
        results.push(TestResult {
            name: "run_completes".into(),
            passed: false,
            detail: format!("run failed: {}", e),
        });
        return results;
    }

    let snapshot = match snapshot_to_vec(engine.galaxy())
        .map_err(|e| e.to_string())
        .and_then(|bytes| read_snapshot(bytes.as_slice()).map_err(|e| e.to_string()))
    {
        Ok(s) => s,
        Err(e) => {
            results.push(TestResult {
                name: "snapshot_roundtrip".into(),
                passed: false,
                detail: e,
            });
            return results;
        }
    };

    let colonized: Vec<_> = snapshot
        .stars
        .iter()
        .skip(1)
        .filter(|s| s.planets.iter().any(|p| p.population > 0))
        .collect();
    results.push(TestResult {
        name: "colonies_spread".into(),
        passed: !colonized.is_empty(),
        detail: format!("{} systems colonized beyond Sol", colonized.len()),
    });

    let founded_ok = colonized.iter().all(|s| {
        s.planets
            .iter()
            .filter(|p| p.population > 0)
            .all(|p| p.habitable && p.founding_year.is_some())
    });
    results.push(TestResult {
        name: "colonies_founded_on_habitable_worlds".into(),
        passed: founded_ok,
        detail: "every populated planet is habitable with a founding year".into(),
    });

    let renamed_ok = colonized.iter().all(|s| !s.name.starts_with("HIP "));
    results.push(TestResult {
        name: "colonized_stars_renamed".into(),
        passed: renamed_ok,
        detail: "no colonized star keeps its catalog default name".into(),
    });

    let total: u64 = snapshot
        .stars
        .iter()
        .flat_map(|s| &s.planets)
        .map(|p| p.population)
        .sum();
    results.push(TestResult {
        name: "population_never_destroyed".into(),
        passed: total > 17_000_000_000,
        detail: format!("total population {}", total),
    });

    if verbose {
        for s in &colonized {
            println!("    colonized: {} ({} planets)", s.name, s.planets.len());
        }
    }

    results
}

// ── 6. Determinism ──────────────────────────────────────────────────────

fn validate_determinism(_verbose: bool) -> Vec<TestResult> {
    println!("--- Determinism ---");
    let mut results = Vec::new();

    let run = |seed: u64| -> Result<Vec<u8>, String> {
        let (records, classes) = harness_catalog();
        let galaxy =
            build_galaxy(&records, &classes, &special_names(), &CatalogOptions::default());
        let mut engine =
            ColonizationEngine::new(galaxy, SimConfig { seed, ..harness_config() });
        engine.run().map_err(|e| e.to_string())?;
        snapshot_to_vec(engine.galaxy()).map_err(|e| e.to_string())
    };

    match (run(7), run(7), run(8)) {
        (Ok(a), Ok(b), Ok(c)) => {
            results.push(TestResult {
                name: "fixed_seed_identical".into(),
                passed: a == b,
                detail: format!("{} snapshot bytes", a.len()),
            });
            results.push(TestResult {
                name: "seeds_diverge".into(),
                passed: a != c,
                detail: "seed 7 and seed 8 produce different snapshots".into(),
            });
        }
        _ => results.push(TestResult {
            name: "determinism_runs".into(),
            passed: false,
            detail: "a determinism run failed".into(),
        }),
    }

    results
}
