use crate::instance::*;
use core::fmt;

use super::formula::Formula;

/// Stores the traversal path of the DFS. Should be the source of truth for what needs to be reverted upon backtrack.
/// Note: we do not have a root node. An untraversed path is empty.
#[derive(Default)]
pub(crate) struct DFSPath {
    path: Vec<DFSPathEntry>,
}

impl DFSPath {
    pub(crate) fn new() -> DFSPath {
        DFSPath::default()
    }

    /// The number of decisions taken, minus decisions backtracked
    pub(crate) fn depth(&self) -> usize {
        self.path.len()
    }

    pub(crate) fn last_decision(&self) -> Option<Literal> {
        self.path.last().map(|entry| entry.chosen)
    }

    /// Records a step in the DFS search. `node` is the formula as it was
    /// before `literal` was decided, so the other branch can be taken later.
    pub(crate) fn add_decision(&mut self, node: Formula, literal: Literal) {
        self.path.push(DFSPathEntry {
            chosen: literal,
            snapshot: Some(node),
        });
    }

    /// Drops every decision after the last one whose second branch is still
    /// open, and flips that decision. The returned node is the formula the
    /// flipped decision must be applied to.
    pub(crate) fn backtrack(&mut self) -> BacktrackResult {
        let backtrack_point = self.find_backtrack_point();

        let ix = match backtrack_point {
            None => {
                let dropped = self.path.len();
                self.path.clear();
                return BacktrackResult {
                    dropped,
                    pivot: None,
                };
            }
            Some(ix) => ix,
        };

        let dropped = self.path.len() - ix;
        self.path.truncate(ix + 1);
        let entry = &mut self.path[ix];
        entry.chosen = entry.chosen.invert();
        let pivot = entry.snapshot.take().map(|node| (node, entry.chosen));

        BacktrackResult { dropped, pivot }
    }

    // The last entry where we have not yet gone down the other branch
    fn find_backtrack_point(&self) -> Option<usize> {
        self.path.iter().rposition(|entry| entry.snapshot.is_some())
    }
}

impl fmt::Debug for DFSPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DFSPath {{ depth={:?}, decisions=[", self.depth())?;
        let mut fst = true;
        for entry in &self.path {
            if !fst {
                write!(f, ", ")?;
            }
            fst = false;
            let flipped = if entry.snapshot.is_none() { "'" } else { "" };
            write!(f, "{:?}{}", entry.chosen, flipped)?;
        }
        write!(f, "] }}")
    }
}

#[derive(Debug)]
struct DFSPathEntry {
    chosen: Literal,
    // None once both branches of this decision have been taken
    snapshot: Option<Formula>,
}

#[derive(Debug)]
pub(crate) struct BacktrackResult {
    /// Number of decision levels undone, the flipped one included
    pub(crate) dropped: usize,
    /// The node to resume from and the literal to assign there. None once the tree is exhausted
    pub(crate) pivot: Option<(Formula, Literal)>,
}
