// The problem as read from the input: variables, literals and clauses. Clauses are only
// changed by the solver's own copies.
mod variable;
pub use crate::instance::variable::Variable;

mod literal;
pub use crate::instance::literal::Literal;

mod clause;
pub use crate::instance::clause::Clause;
