//! Evaluation module for Nine Men's Morris positions
//!
//! This module provides the static scoring used at search leaves.
//! The evaluation considers:
//! - Material, weighted up as the opponent nears three pieces
//! - Formed mills, near-mills and double-mill points
//! - Mobility and immobilization
//! - Positional bonuses (midpoints, ring clustering)

pub mod heuristic;
pub mod weights;

pub use heuristic::evaluate;
pub use weights::Weight;
