use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::Not;

use crate::basic_types::StorageKey;

/// A boolean proposition of a [`Problem`](crate::Problem). Propositions are numbered densely, in
/// the order in which they were first mentioned.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropositionalVariable {
    index: u32,
}

impl PropositionalVariable {
    pub(crate) fn new(index: u32) -> PropositionalVariable {
        PropositionalVariable { index }
    }

    pub fn index(&self) -> u32 {
        self.index
    }
}

impl StorageKey for PropositionalVariable {
    fn to_index(&self) -> usize {
        self.index as usize
    }

    fn create_from_index(index: usize) -> Self {
        PropositionalVariable::new(index as u32)
    }
}

impl Display for PropositionalVariable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{}", self.index)
    }
}

/// A [`PropositionalVariable`] together with a polarity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    propositional_variable: PropositionalVariable,
    is_positive: bool,
}

impl Literal {
    pub fn new(propositional_variable: PropositionalVariable, is_positive: bool) -> Literal {
        Literal {
            propositional_variable,
            is_positive,
        }
    }

    pub fn get_propositional_variable(&self) -> PropositionalVariable {
        self.propositional_variable
    }

    pub fn is_positive(&self) -> bool {
        self.is_positive
    }

    pub fn is_negative(&self) -> bool {
        !self.is_positive
    }

    /// The truth value of this literal if its proposition has the given value.
    pub fn evaluate(&self, value: bool) -> bool {
        value == self.is_positive
    }
}

impl Not for Literal {
    type Output = Literal;

    fn not(self) -> Self::Output {
        Literal {
            propositional_variable: self.propositional_variable,
            is_positive: !self.is_positive,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_positive {
            write!(f, "{}", self.propositional_variable)
        } else {
            write!(f, "!{}", self.propositional_variable)
        }
    }
}
