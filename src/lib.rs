//! Side-income recommender.
//!
//! A static catalog of income variants is filtered and ranked against a user
//! profile, and a fixed-shape action plan is built for the chosen variant.
//!
//! ```text
//! catalog::load_catalog ──► validate::validate_catalog
//!          │
//!          └──► recommend::recommend ──► plan::build_plan ──► render / export
//!                    │
//!                    └── evaluate::{feasibility, legal, economics}
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod export;
pub mod plan;
pub mod profile;
pub mod profile_io;
pub mod recommend;
pub mod render;
pub mod schema;
pub mod session;
pub mod validate;

mod util;

pub use error::{Error, Result};
