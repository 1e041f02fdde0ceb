//!
//! A fast and predictable engine for building pallets out of cartons.
//!
//! Cartons of one or more items are assigned to pallets under two joint constraints:
//! a per-item limit on the number of cartons stacked on a single pallet and an overall
//! percentage budget of the pallet's capacity.
//!
//! This crate contains the data model ([`entities`]), the dynamic problem state with snapshot
//! support and the external (JSON) representation used to move instances and solutions in and out
//! of the library ([`io`]). Packing heuristics are built on top of it.
//!

/// Entities to model pallet building problems
pub mod entities;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
