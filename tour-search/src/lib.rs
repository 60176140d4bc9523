pub mod algs;
pub mod cost;
pub mod dist;
mod error;
pub mod graph;
pub mod progress;
pub mod two_opt;

pub use algs::{Algorithm, Strategy};
pub use cost::Cost;
pub use error::{Result, SolveError};
