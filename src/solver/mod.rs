mod assignment_set;
mod dfs_path;
mod formula;
mod heuristic;
mod unit_propagator;

mod dfs;
pub use crate::solver::assignment_set::{EvaluationResult, LiteralSet};
pub use crate::solver::dfs::*;
pub use crate::solver::formula::Formula;
pub use crate::solver::heuristic::{BranchingHeuristic, FirstUnassigned, Heuristic, Mom};
