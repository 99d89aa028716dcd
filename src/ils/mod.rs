//! Iterated Local Search (ILS).
//!
//! A single-solution metaheuristic. Each outer iteration perturbs the
//! incumbent by moving one course to a random slot, improves the result
//! with randomized swap descent, and keeps it only if it beats the
//! incumbent. The incumbent's fitness therefore never increases.

mod config;
pub mod neighborhood;
mod runner;

pub use config::IlsConfig;
pub use runner::{IlsResult, IlsRunner};
