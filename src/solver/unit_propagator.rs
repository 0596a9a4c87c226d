use log::trace;

use crate::metrics;

use super::dfs::EvaluationStats;
use super::formula::Formula;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PropagationResult {
    /// Some clause lost all of its literals
    Conflicted,
    /// No clause is empty; unit clauses created by this round may remain
    Consistent,
}

pub(crate) struct UnitPropagator<'a> {
    stats: &'a mut EvaluationStats,
}

impl<'a> UnitPropagator<'a> {
    pub(crate) fn new(stats: &'a mut EvaluationStats) -> UnitPropagator<'a> {
        UnitPropagator { stats }
    }

    /// Assigns the literal of every unit clause present on entry. This is a
    /// single round: clauses that become units here are left for the search
    /// to branch on.
    pub(crate) fn propagate_units(&mut self, formula: &mut Formula) -> PropagationResult {
        let mut units = formula.unit_literals();
        units.sort_unstable();
        units.dedup();

        if !units.is_empty() {
            trace!("units: {:?}", units);
            self.stats.unit_propagations += units.len();
            metrics::UNIT_PROPAGATIONS.inc_by(units.len() as u64);
        }

        // Residual clauses only hold unassigned variables, so the only clash
        // possible is `x` and `!x` in this round, which sort next to each other.
        // Assigning the first already empties the other's unit clause.
        units.dedup_by_key(|l| l.var());
        for literal in units {
            formula.assign_true(literal);
        }

        if formula.has_conflict() {
            PropagationResult::Conflicted
        } else {
            PropagationResult::Consistent
        }
    }
}
