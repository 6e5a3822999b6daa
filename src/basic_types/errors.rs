use thiserror::Error;

use crate::engine::ConstraintId;
use crate::engine::Literal;

/// Errors related to adding constraints to a problem under construction.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConstraintOperationError {
    #[error("a constraint needs at least one literal")]
    EmptyConstraint,
    #[error("the range [{min}, {max}] is empty")]
    InvalidRange { min: u32, max: u32 },
}

/// A constraint expression which could not be turned into literals.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("the expression contains no literals")]
    EmptyExpression,
    #[error("expected a literal before or after '|' at position {position}")]
    MissingLiteral { position: usize },
    #[error("negation without a proposition at position {position}")]
    DanglingNegation { position: usize },
    #[error("'{name}' is not a valid proposition name")]
    InvalidName { name: String },
    #[error("malformed cardinality range '{range}', expected '[min,max]'")]
    MalformedRange { range: String },
    #[error(transparent)]
    Constraint(#[from] ConstraintOperationError),
}

/// A [`FormatError`] in a problem file, together with the line it occurred on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line_number}: {source}")]
pub struct ProblemFormatError {
    /// The line number, starting at 1.
    pub line_number: usize,
    #[source]
    pub source: FormatError,
}

/// The cached satisfaction state disagrees with the truth assignment. This is always a bug in the
/// solver and never a problem with the input.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum InternalConsistencyError {
    #[error(
        "constraint {constraint} caches {cached} true literals but has {actual} (last flip: {})",
        display_last_flip(.last_flip)
    )]
    CountMismatch {
        constraint: ConstraintId,
        cached: u32,
        actual: u32,
        last_flip: Option<Literal>,
    },
    #[error(
        "constraint {constraint} has the wrong membership in the unsatisfied set (member: {is_member}, last flip: {})",
        display_last_flip(.last_flip)
    )]
    MembershipMismatch {
        constraint: ConstraintId,
        is_member: bool,
        last_flip: Option<Literal>,
    },
}

fn display_last_flip(last_flip: &Option<Literal>) -> String {
    last_flip.map_or_else(|| "none".to_owned(), |literal| literal.to_string())
}
