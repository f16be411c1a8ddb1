//! Pure stellar and population logic for Colonymap.
//!
//! Everything here is a deterministic function of its arguments: no
//! randomness, no I/O, no galaxy-wide state. The `colonymap-core` crate
//! layers entities, procedural generation and the colonization engine on
//! top of these primitives.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`geometry`] | Catalog angles → Cartesian position, 3D distance |
//! | [`growth`] | Population growth multiplier (quartic with floor) |
//! | [`orbit`] | Keplerian orbital period approximation |
//! | [`spectral`] | Spectral class parsing and physical property bands |

pub mod geometry;
pub mod growth;
pub mod orbit;
pub mod spectral;
