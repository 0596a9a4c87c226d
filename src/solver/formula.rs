use log::trace;

use crate::instance::*;

/// A node of the search tree: the assignments that lead here from the
/// original problem, and the clauses that are not yet satisfied, each reduced
/// to its still undecided literals.
#[derive(Debug, Default, Clone)]
pub struct Formula {
    assignments: Vec<Literal>,
    clauses: Vec<Clause>,
}

impl Formula {
    /// Builds the root node. Tautologies can never be falsified and are dropped.
    pub fn new(clauses: &[Clause]) -> Formula {
        let clauses = clauses
            .iter()
            .filter(|cl| {
                let tautology = cl.is_tautology();
                if tautology {
                    trace!("dropping tautology: {:?}", cl);
                }
                !tautology
            })
            .cloned()
            .collect();
        Formula {
            assignments: vec![],
            clauses,
        }
    }

    pub fn assignments(&self) -> &[Literal] {
        &self.assignments
    }

    pub fn into_assignments(self) -> Vec<Literal> {
        self.assignments
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// A copy of this node where `literal` is true.
    pub fn with_true(&self, literal: Literal) -> Self {
        let mut new = self.clone();
        new.assign_true(literal);
        new
    }

    /// Makes `literal` true: satisfied clauses go away, and its negation is
    /// struck from the rest.
    pub fn assign_true(&mut self, literal: Literal) {
        trace!("assign: {:?}", literal);
        self.assignments.push(literal);
        self.clauses.retain(|clause| !clause.contains(literal));

        let inverse = literal.invert();
        for clause in &mut self.clauses {
            clause.remove(inverse);
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn has_conflict(&self) -> bool {
        self.clauses.iter().any(|clause| clause.is_empty())
    }

    pub(crate) fn unit_literals(&self) -> Vec<Literal> {
        self.clauses
            .iter()
            .filter(|clause| clause.is_unit())
            .map(|unit| unit.literals()[0])
            .collect()
    }
}

#[cfg(test)]
mod test {
    use crate::instance::*;

    use super::Formula;

    fn lit(v: i64) -> Literal {
        Literal::from_dimacs(v).unwrap()
    }

    fn clause(values: &[i64]) -> Clause {
        Clause::from_literals(values.iter().map(|&v| lit(v)).collect())
    }

    #[test]
    fn test_assign_true() {
        // (1 | 2) & (-1 | 3) & (2 | 3)
        let mut formula = Formula::new(&[clause(&[1, 2]), clause(&[-1, 3]), clause(&[2, 3])]);
        formula.assign_true(lit(1));

        assert_eq!(formula.assignments(), &[lit(1)]);
        assert_eq!(formula.clauses(), &[clause(&[3]), clause(&[2, 3])]);
        assert!(!formula.is_satisfied());
        assert_eq!(formula.unit_literals(), vec![lit(3)]);

        formula.assign_true(lit(3));
        assert!(formula.is_satisfied());
        assert!(!formula.has_conflict());
    }

    #[test]
    fn test_with_true_leaves_original() {
        let formula = Formula::new(&[clause(&[1]), clause(&[-1, 2])]);
        let child = formula.with_true(lit(-1));

        assert_eq!(formula.clauses().len(), 2);
        assert!(formula.assignments().is_empty());
        assert!(child.has_conflict());
        assert_eq!(child.assignments(), &[lit(-1)]);
    }

    #[test]
    fn test_tautologies_are_dropped() {
        let formula = Formula::new(&[clause(&[1, -1, 2]), clause(&[2, 3])]);
        assert_eq!(formula.clauses(), &[clause(&[2, 3])]);
    }
}
