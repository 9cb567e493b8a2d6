//! Per-variant evaluators.
//!
//! Each evaluator is a pure function of its inputs: it borrows the profile,
//! variant, and catalog read-only and returns a fresh derived value.
//!
//! - [`feasibility`]: readiness status and blocking reasons
//! - [`legal`]: gate, checklist, compliance kits, staleness note
//! - [`economics`]: optional earnings snapshot

mod economics;
mod feasibility;
mod legal;

pub use economics::evaluate_economics;
pub use feasibility::{evaluate_feasibility, MAX_BLOCKERS};
pub use legal::{evaluate_legal, STALE_DATASET_NOTE};
