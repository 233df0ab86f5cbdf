//! Game rules for Nine Men's Morris
//!
//! This module implements the rule set:
//! - Mill detection and the mill-protection removal rule
//! - Phase-dependent move generation (placing, moving, flying)
//! - Move validation and application

pub mod mill;
pub mod moves;

// Re-exports for convenient access
pub use mill::{
    completable_lines, count_mills, count_near_mills, forms_mill, has_removable_pieces,
    is_in_any_mill, is_removable, line_counts, removable_positions,
};
pub use moves::{
    apply_move, has_any_legal_move, legal_moves, mobility, moves_for, validate_move, Move,
};

pub(crate) use moves::play;
