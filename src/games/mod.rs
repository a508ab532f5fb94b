//! Game implementations.

pub mod tri_tactics;
