use std::fmt;

use fnv::FnvHashMap;

use crate::instance::Literal;

use super::formula::Formula;

/// Picks the literal to branch on. The literal is explored as true first and
/// as false on backtrack.
pub trait BranchingHeuristic {
    /// `None` only once no clauses are left to satisfy.
    fn choose(&self, formula: &Formula) -> Option<Literal>;
}

/// Most Occurrences in clauses of Minimum length.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mom;

impl BranchingHeuristic for Mom {
    fn choose(&self, formula: &Formula) -> Option<Literal> {
        let min_len = formula.clauses().iter().map(|clause| clause.len()).min()?;

        let mut counts: FnvHashMap<Literal, usize> = FnvHashMap::default();
        for shortest_clause in formula
            .clauses()
            .iter()
            .filter(|clause| clause.len() == min_len)
        {
            for &literal in shortest_clause.literals() {
                *counts.entry(literal).or_insert(0) += 1;
            }
        }

        // Ties go to the lower variable, then to the positive literal
        counts
            .into_iter()
            .max_by(|(a, a_count), (b, b_count)| {
                a_count
                    .cmp(b_count)
                    .then_with(|| b.var().cmp(&a.var()))
                    .then_with(|| a.polarity().cmp(&b.polarity()))
            })
            .map(|(literal, _)| literal)
    }
}

/// Branches on the first literal of the first open clause.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstUnassigned;

impl BranchingHeuristic for FirstUnassigned {
    fn choose(&self, formula: &Formula) -> Option<Literal> {
        formula
            .clauses()
            .iter()
            .find_map(|clause| clause.literals().first().copied())
    }
}

/// The heuristics selectable through [`SolverConfig`](super::SolverConfig).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    #[default]
    Mom,
    FirstUnassigned,
}

impl Heuristic {
    pub(crate) fn strategy(&self) -> Box<dyn BranchingHeuristic> {
        match self {
            Heuristic::Mom => Box::new(Mom),
            Heuristic::FirstUnassigned => Box::new(FirstUnassigned),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Heuristic::Mom => write!(f, "mom"),
            Heuristic::FirstUnassigned => write!(f, "first"),
        }
    }
}
