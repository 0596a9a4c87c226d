use std::fmt;

use log::{debug, error, info, trace};
use thiserror::Error;

use crate::instance::*;
use crate::metrics;

use super::assignment_set::{EvaluationResult, LiteralSet};
use super::dfs_path::DFSPath;
use super::formula::Formula;
use super::heuristic::Heuristic;
use super::unit_propagator::{PropagationResult, UnitPropagator};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("model does not satisfy clause {clause:?}")]
    InvalidModel { clause: Clause },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverConfig {
    pub heuristic: Heuristic,
    /// Check a found model against every input clause before returning it
    pub verify_model: bool,
}

#[derive(Clone)]
pub struct Instance {
    pub(crate) clauses: Vec<Clause>,
    pub(crate) variable_count: u64,
}

impl Instance {
    pub fn new(clauses: Vec<Clause>, variable_count: u64) -> Instance {
        Instance {
            clauses,
            variable_count,
        }
    }

    /// Builds an instance from clauses written as DIMACS integers. Zeros are
    /// ignored; the variable count is the largest variable used.
    pub fn from_dimacs_clauses(clauses: &[Vec<i64>]) -> Instance {
        let clauses: Vec<Clause> = clauses
            .iter()
            .map(|cl| {
                Clause::from_literals(cl.iter().filter_map(|&v| Literal::from_dimacs(v)).collect())
            })
            .collect();
        let variable_count = clauses
            .iter()
            .flat_map(|cl| cl.literals().iter().map(|l| l.var().index()))
            .max()
            .unwrap_or(0);
        Instance::new(clauses, variable_count)
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn variable_count(&self) -> u64 {
        self.variable_count
    }

    pub fn solve(&self) -> Solution {
        self.search(&SolverConfig::default())
    }

    pub fn solve_with(&self, config: &SolverConfig) -> Result<Solution, SolveError> {
        let solution = self.search(config);
        if config.verify_model {
            if let Some(model) = &solution.model {
                self.verify(model)?;
                debug!("model verified against {} clauses", self.clauses.len());
            }
        }
        Ok(solution)
    }

    /// Checks that `model` makes every clause true. Tautologies hold under any
    /// assignment, even one that leaves their variable open.
    pub fn verify(&self, model: &[Literal]) -> Result<(), SolveError> {
        let assignment = LiteralSet::from_assignment_vec(model);
        for clause in &self.clauses {
            if clause.is_tautology() {
                continue;
            }
            if assignment.evaluate(clause) != EvaluationResult::True {
                error!("model leaves clause {:?} unsatisfied", clause);
                return Err(SolveError::InvalidModel {
                    clause: clause.clone(),
                });
            }
        }
        Ok(())
    }

    fn search(&self, config: &SolverConfig) -> Solution {
        let mut stats = EvaluationStats::default();
        let heuristic = config.heuristic.strategy();
        metrics::SOLVES.inc();
        info!(
            "solving {} clauses over {} variables with {} heuristic",
            self.clauses.len(),
            self.variable_count,
            config.heuristic
        );

        let mut node = Formula::new(&self.clauses);
        let mut path = DFSPath::new();

        let model = loop {
            stats.nodes_visited += 1;
            metrics::NODES_VISITED.inc();

            let propagation = UnitPropagator::new(&mut stats).propagate_units(&mut node);
            trace!("node {}: {:?}", stats.nodes_visited, propagation);

            let decision = match propagation {
                PropagationResult::Consistent if node.is_satisfied() => {
                    break Some(node.into_assignments());
                }
                PropagationResult::Consistent => heuristic.choose(&node),
                PropagationResult::Conflicted => None,
            };

            match decision {
                Some(literal) => {
                    stats.decisions += 1;
                    metrics::DECISIONS.inc();
                    debug!(
                        "decision at depth {} (after {:?}): {:?}",
                        path.depth(),
                        path.last_decision(),
                        literal
                    );
                    path.add_decision(node.clone(), literal);
                    node.assign_true(literal);
                }
                None => {
                    let backtracked = path.backtrack();
                    match backtracked.pivot {
                        // Every branch has been refuted
                        None => break None,
                        Some((mut resumed, pivot)) => {
                            stats.backtracks += 1;
                            metrics::BACKTRACKS.inc();
                            debug!(
                                "backtracked {} levels, pivot: {:?}",
                                backtracked.dropped, pivot
                            );
                            resumed.assign_true(pivot);
                            node = resumed;
                        }
                    }
                }
            }
        };

        match &model {
            Some(model) => info!("satisfiable, {} variables assigned", model.len()),
            None => info!("unsatisfiable"),
        }
        info!("{:?}", stats);

        Solution { model, stats }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvaluationStats {
    /// Literals assigned because they were the last one left in a clause
    pub unit_propagations: usize,
    /// Search tree nodes entered, the root included
    pub nodes_visited: usize,
    pub decisions: usize,
    pub backtracks: usize,
}

#[derive(Clone)]
pub struct Solution {
    pub(crate) model: Option<Vec<Literal>>,
    pub stats: EvaluationStats,
}

impl Solution {
    pub fn is_satisfiable(&self) -> bool {
        self.model.is_some()
    }

    /// The satisfying assignment in the order it was made. Variables that no
    /// clause needed are left out.
    pub fn model(&self) -> Option<&[Literal]> {
        self.model.as_deref()
    }
}

impl fmt::Debug for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(model) = &self.model {
            let mut sorted = model.clone();
            sorted.sort_by_key(|l| l.var());
            write!(f, "{:?}", LiteralSet::from_assignment_vec(&sorted))?;
        } else {
            write!(f, "no solution found")?;
        }
        write!(f, "; stats={:?}", self.stats)?;
        Ok(())
    }
}
