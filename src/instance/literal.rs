use std::fmt;

use super::Variable;

/// A variable together with a polarity, packed as `var << 1 | polarity`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal(u64);

pub const MAX_VARIABLE: u64 = (1 << 63) - 1;

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.polarity() {
            write!(f, "{:?}", self.var())
        } else {
            write!(f, "!{:?}", self.var())
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_dimacs())
    }
}

impl Literal {
    pub fn new(var: Variable, polarity: bool) -> Literal {
        if var.0 > MAX_VARIABLE {
            panic!("variable too large - must be < 2^63");
        }
        Literal((var.0 << 1) | (polarity as u64))
    }

    /// Reads a DIMACS literal: `5` is x5, `-3` is !x3. Zero is the clause
    /// terminator and has no literal.
    pub fn from_dimacs(value: i64) -> Option<Literal> {
        match value {
            0 => None,
            v => Some(Literal::new(Variable(v.unsigned_abs()), v > 0)),
        }
    }

    pub fn to_dimacs(&self) -> i64 {
        let var = self.var().0 as i64;
        if self.polarity() {
            var
        } else {
            -var
        }
    }

    pub fn var(&self) -> Variable {
        Variable(self.0 >> 1)
    }

    pub fn polarity(&self) -> bool {
        (self.0 & 1) != 0
    }

    pub fn invert(&self) -> Literal {
        Literal(self.0 ^ 1)
    }
}
