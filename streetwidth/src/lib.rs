//! Estimates the physical width of street corridors in a road network by
//! measuring distances from road centerlines to nearby building footprints,
//! and derives band polygons for visual QA of the estimates.
//!
//! The crate is a library: it consumes already-materialized [`model::network::RoadNetwork`]
//! and footprint collections and produces a width map plus optional band
//! polygons. File formats and command-line handling are left to callers.

pub mod algorithm;
pub mod config;
pub mod model;
