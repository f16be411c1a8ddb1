//! Colonymap Core - Galaxy Colonization Simulation
//!
//! Builds a galaxy of stars from an astronomical catalog, procedurally
//! fills in planetary systems, and runs a multi-century colonization
//! simulation: colonized planets grow year over year, and overcrowded
//! planets shed colonists to habitable worlds around nearby stars.
//!
//! # Example
//!
//! ```rust,no_run
//! use colonymap_core::catalog::{build_galaxy, special_names, CatalogOptions};
//! use colonymap_core::engine::{ColonizationEngine, SimConfig};
//! use colonymap_core::snapshot::write_snapshot;
//! use std::collections::HashMap;
//!
//! let records = Vec::new(); // deserialized catalog records
//! let classes = HashMap::new(); // per-HIP spectral class lookup
//! let galaxy = build_galaxy(&records, &classes, &special_names(), &CatalogOptions::default());
//!
//! let mut engine = ColonizationEngine::new(galaxy, SimConfig::default());
//! engine.run().expect("simulation failed");
//! write_snapshot(std::io::stdout(), engine.galaxy()).expect("snapshot failed");
//! ```

pub mod catalog;
pub mod engine;
pub mod galaxy;
pub mod generation;
pub mod snapshot;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::engine::{ColonizationEngine, SimConfig};
    pub use crate::galaxy::{Galaxy, Planet, Star};
}
