use core::fmt;

use super::Literal;

/// A disjunction of literals. Literals are kept sorted and free of duplicates.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(lits: &[Literal]) -> Clause {
        Self::from_literals(lits.to_vec())
    }

    pub fn from_literals(mut literals: Vec<Literal>) -> Clause {
        literals.sort_unstable();
        literals.dedup();
        Clause { literals }
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn is_unit(&self) -> bool {
        self.len() == 1
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn contains(&self, literal: Literal) -> bool {
        self.literals.binary_search(&literal).is_ok()
    }

    /// Whether the clause holds both a literal and its negation. Since `x` and
    /// `!x` pack to neighbouring values, they sit next to each other once sorted.
    pub fn is_tautology(&self) -> bool {
        self.literals
            .windows(2)
            .any(|pair| pair[0].var() == pair[1].var())
    }

    /// Drops `literal` from the clause, returning whether it was present.
    pub(crate) fn remove(&mut self, literal: Literal) -> bool {
        match self.literals.binary_search(&literal) {
            Ok(ix) => {
                self.literals.remove(ix);
                true
            }
            Err(_) => false,
        }
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut fst = true;
        for &lit in &self.literals {
            if !fst {
                write!(f, ", ")?;
            }
            fst = false;
            write!(f, "{:?}", lit)?;
        }
        Ok(())
    }
}
