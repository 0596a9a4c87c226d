use crate::instance::*;
use core::fmt;

use fnv::FnvHashMap;

/// A (partial) assignment of truth values to variables.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LiteralSet {
    values: FnvHashMap<Variable, bool>,
}

impl LiteralSet {
    pub fn new() -> LiteralSet {
        LiteralSet::default()
    }

    pub fn add(&mut self, lit: Literal) {
        self.values.insert(lit.var(), lit.polarity());
    }

    pub fn get(&self, var: Variable) -> Option<bool> {
        self.values.get(&var).copied()
    }

    pub fn from_assignment_vec(asses: &[Literal]) -> LiteralSet {
        let mut set = LiteralSet::new();
        for ass in asses {
            set.add(*ass);
        }
        set
    }

    pub fn evaluate(&self, clause: &Clause) -> EvaluationResult {
        let mut result = EvaluationResult::False;
        for literal in clause.literals() {
            match self.get(literal.var()) {
                Some(sign) if sign == literal.polarity() => return EvaluationResult::True,
                Some(_) => {}
                None => result = EvaluationResult::Unknown,
            }
        }
        result
    }
}

impl fmt::Debug for LiteralSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut keys = self.values.keys().collect::<Vec<_>>();
        keys.sort();
        let mut fst = true;
        for key in keys {
            if !fst {
                write!(f, ", ")?;
            }
            fst = false;
            write!(f, "{:?}={:?}", key, self.values[key])?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EvaluationResult {
    True,
    False,
    Unknown,
}
