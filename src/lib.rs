//! A DPLL SAT solver for DIMACS CNF problems.
//!
//! The search walks the tree of partial assignments depth first. Each node
//! is simplified by unit propagation, and branching picks the literal with
//! the most occurrences among the shortest open clauses (MOM).
//!
//! ```
//! let instance = dpllsat::dimacs::parse_str("p cnf 2 2\n1 2 0\n-1 0\n").unwrap();
//! let solution = instance.solve();
//! assert!(solution.is_satisfiable());
//! ```
pub mod dimacs;
pub mod instance;
pub mod metrics;
pub mod solver;

pub use instance::*;
