//! Colonization engine — the time-stepped simulation loop.
//!
//! A single global clock advances one year per step for a fixed number of
//! steps. Each step walks every star's planets in catalog order: grow
//! first, then any planet over the population threshold sheds a fraction
//! of its people to habitable worlds around nearby stars. Population and
//! founding years are the only state the engine ever mutates.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::galaxy::Galaxy;
use crate::generation::{NameError, NameSource, SyllableNamer, UniqueNames};

/// Simulation parameters. Defaults run 170 one-year steps starting at
/// year 130.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Calendar year of the first step.
    pub start_year: i64,
    /// Number of one-year steps to run.
    pub steps: u32,
    /// Population above which a planet emits colonists.
    pub population_threshold: f64,
    /// Fraction of population that leaves in one emigration event.
    pub emigration_fraction: f64,
    /// Largest population transfer to a single destination planet.
    pub chunk: u64,
    /// Stars farther than this from the source are not candidate
    /// destinations.
    pub neighbor_cutoff: f64,
    /// Uniqueness retry budget for the star name source.
    pub name_retry_limit: u32,
    /// Random seed; a fixed seed and catalog reproduce a run exactly.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start_year: 130,
            steps: 170,
            population_threshold: 5.0e7,
            emigration_fraction: 0.05,
            chunk: 1_000_000,
            neighbor_cutoff: 20.0,
            name_retry_limit: 1000,
            seed: 42,
        }
    }
}

/// Fatal simulation error.
#[derive(Debug)]
pub enum SimError {
    /// The star name source ran out of unique names.
    NameExhausted(NameError),
}

impl From<NameError> for SimError {
    fn from(e: NameError) -> Self {
        SimError::NameExhausted(e)
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::NameExhausted(e) => write!(f, "star name source exhausted: {}", e),
        }
    }
}

impl std::error::Error for SimError {}

/// The colonization simulation. Owns the galaxy and advances it over the
/// configured timeline.
pub struct ColonizationEngine<S: NameSource = SyllableNamer> {
    galaxy: Galaxy,
    config: SimConfig,
    rng: StdRng,
    names: UniqueNames<S>,
    current_year: i64,
}

impl ColonizationEngine<SyllableNamer> {
    pub fn new(galaxy: Galaxy, config: SimConfig) -> Self {
        Self::with_names(galaxy, config, SyllableNamer)
    }
}

impl<S: NameSource> ColonizationEngine<S> {
    /// Build an engine with a custom name source. Names already present
    /// in the catalog are reserved so the source never duplicates them.
    pub fn with_names(galaxy: Galaxy, config: SimConfig, source: S) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        let mut names = UniqueNames::new(source, config.name_retry_limit);
        for star in &galaxy.stars {
            if let Some(name) = &star.name {
                names.reserve(name);
            }
        }
        let current_year = config.start_year;
        Self {
            galaxy,
            config,
            rng,
            names,
            current_year,
        }
    }

    pub fn galaxy(&self) -> &Galaxy {
        &self.galaxy
    }

    pub fn into_galaxy(self) -> Galaxy {
        self.galaxy
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn current_year(&self) -> i64 {
        self.current_year
    }

    /// Run the configured number of steps to completion. There is no
    /// early termination; the timeline always runs out the clock.
    pub fn run(&mut self) -> Result<(), SimError> {
        for _ in 0..self.config.steps {
            self.step()?;
        }
        Ok(())
    }

    /// Advance the clock by one year: grow every colonized planet, then
    /// emigrate from any planet over the population threshold.
    pub fn step(&mut self) -> Result<(), SimError> {
        let year = self.current_year;
        for star_idx in 0..self.galaxy.stars.len() {
            self.galaxy.ensure_planets(star_idx, &mut self.rng);
            for planet_idx in 0..self.galaxy.stars[star_idx].planets().len() {
                self.galaxy.stars[star_idx].planets_mut()[planet_idx].grow(year);
                let population = self.galaxy.stars[star_idx].planets()[planet_idx].population;
                if population > self.config.population_threshold {
                    self.emigrate(star_idx, planet_idx, year)?;
                }
            }
        }
        self.current_year += 1;
        Ok(())
    }

    /// One emigration event: debit the source, then place colonists in
    /// fixed chunks on habitable planets of nearby stars. The transfer
    /// conserves population exactly; only growth creates people.
    fn emigrate(&mut self, star_idx: usize, planet_idx: usize, year: i64) -> Result<(), SimError> {
        let population = self.galaxy.stars[star_idx].planets()[planet_idx].population;
        let mut colonists = (population * self.config.emigration_fraction).floor() as u64;
        if colonists == 0 {
            return Ok(());
        }

        let candidates = self.candidate_stars(star_idx);
        if candidates.is_empty() {
            // Nowhere to go: hold everyone back and retry next step.
            log::warn!(
                "{} is over the emigration threshold with no habitable neighbors in range",
                self.galaxy.stars[star_idx].planet_name(planet_idx)
            );
            return Ok(());
        }

        self.galaxy.stars[star_idx].planets_mut()[planet_idx].population -= colonists as f64;
        log::info!(
            "year {}: {} colonists leaving {}",
            year,
            colonists,
            self.galaxy.stars[star_idx].planet_name(planet_idx)
        );

        while colonists > 0 {
            let (dest_star, habitable) = &candidates[self.rng.gen_range(0..candidates.len())];
            let dest_planet = habitable[self.rng.gen_range(0..habitable.len())];
            self.found_planet(*dest_star, dest_planet, year)?;
            let amount = self.config.chunk.min(colonists);
            self.galaxy.stars[*dest_star].planets_mut()[dest_planet].population += amount as f64;
            colonists -= amount;
        }
        Ok(())
    }

    /// Stars within the cutoff of `star_idx` that have at least one
    /// habitable planet, paired with their habitable planet indices.
    fn candidate_stars(&mut self, star_idx: usize) -> Vec<(usize, Vec<usize>)> {
        let in_range = self
            .galaxy
            .neighbors_within(star_idx, self.config.neighbor_cutoff);
        let mut candidates = Vec::new();
        for neighbor_idx in in_range {
            self.galaxy.ensure_planets(neighbor_idx, &mut self.rng);
            let habitable: Vec<usize> = self.galaxy.stars[neighbor_idx]
                .planets()
                .iter()
                .enumerate()
                .filter(|(_, planet)| planet.habitable)
                .map(|(idx, _)| idx)
                .collect();
            if !habitable.is_empty() {
                candidates.push((neighbor_idx, habitable));
            }
        }
        candidates
    }

    /// Mark a destination planet as founded this year if it was not
    /// already (re-founding is a no-op), and name its star if it still
    /// carries the catalog default.
    fn found_planet(
        &mut self,
        star_idx: usize,
        planet_idx: usize,
        year: i64,
    ) -> Result<(), SimError> {
        if self.galaxy.stars[star_idx].planets()[planet_idx]
            .founding_year
            .is_some()
        {
            return Ok(());
        }
        self.galaxy.stars[star_idx].planets_mut()[planet_idx].founding_year = Some(year);
        if self.galaxy.stars[star_idx].has_default_name() {
            let name = self.names.next_name(&mut self.rng)?;
            log::info!(
                "year {}: {} renamed {}",
                year,
                self.galaxy.stars[star_idx].display_name(),
                name
            );
            self.galaxy.stars[star_idx].rename(name);
        }
        Ok(())
    }
}
