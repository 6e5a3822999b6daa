//! The immutable part of a search: the propositions, their names, the constraints and the
//! occurrence lists which link the two.

use log::warn;

use super::VariableNames;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::KeyedVec;
use crate::basic_types::StorageKey;
use crate::cardwalk_assert_simple;
use crate::engine::CardinalityConstraint;
use crate::engine::ConstraintId;
use crate::engine::Literal;
use crate::engine::PropositionalVariable;

/// Collects propositions and constraints, and turns them into a [`Problem`].
#[derive(Debug, Default, Clone)]
pub struct ProblemBuilder {
    variable_names: VariableNames,
    constraints: KeyedVec<ConstraintId, CardinalityConstraint>,
}

impl ProblemBuilder {
    /// Returns the proposition with the given name, creating it if it does not exist yet.
    pub fn propositional_variable(&mut self, name: &str) -> PropositionalVariable {
        self.variable_names.intern(name)
    }

    pub fn get_propositional_variable(&self, name: &str) -> Option<PropositionalVariable> {
        self.variable_names.get_propositional_by_name(name)
    }

    /// Adds the clause `\/ literals`, i.e. the range `[1, literals.len()]`.
    pub fn add_clause(
        &mut self,
        literals: impl IntoIterator<Item = Literal>,
    ) -> Result<ConstraintId, ConstraintOperationError> {
        let literals: Vec<Literal> = literals.into_iter().collect();
        let max_true_literals = literals.len() as u32;
        self.add_cardinality_constraint(literals, 1, max_true_literals)
    }

    /// Adds a constraint which requires between `min_true_literals` and `max_true_literals`
    /// (inclusive) of `literals` to be true.
    pub fn add_cardinality_constraint(
        &mut self,
        literals: impl IntoIterator<Item = Literal>,
        min_true_literals: u32,
        max_true_literals: u32,
    ) -> Result<ConstraintId, ConstraintOperationError> {
        let literals: Vec<Literal> = literals.into_iter().collect();

        if literals.is_empty() {
            return Err(ConstraintOperationError::EmptyConstraint);
        }
        if min_true_literals > max_true_literals {
            return Err(ConstraintOperationError::InvalidRange {
                min: min_true_literals,
                max: max_true_literals,
            });
        }
        cardwalk_assert_simple!(
            literals.iter().all(|literal| {
                (literal.get_propositional_variable().index() as usize) < self.variable_names.len()
            }),
            "literals must use propositions created by this builder"
        );

        let id = ConstraintId::create_from_index(self.constraints.len());
        let _ = self.constraints.push(CardinalityConstraint::new(
            id,
            literals,
            min_true_literals,
            max_true_literals,
        ));
        Ok(id)
    }

    pub fn build(self) -> Problem {
        let mut occurrences: KeyedVec<PropositionalVariable, Occurrences> =
            KeyedVec::new(vec![Occurrences::default(); self.variable_names.len()]);

        for constraint in self.constraints.iter() {
            if !constraint.is_range_reachable() {
                warn!(
                    "Constraint {} requires at least {} true literals but only has {}",
                    constraint.id(),
                    constraint.min_true_literals(),
                    constraint.len()
                );
            }

            for literal in constraint.literals() {
                occurrences[literal.get_propositional_variable()].add(constraint.id(), *literal);
            }
        }

        if self.constraints.is_empty() {
            warn!("The problem does not contain any constraints");
        }

        Problem {
            variable_names: self.variable_names,
            constraints: self.constraints,
            occurrences,
        }
    }
}

/// Where a single proposition occurs.
#[derive(Debug, Default, Clone)]
struct Occurrences {
    /// The constraints in which the proposition occurs as a positive literal.
    positive: Vec<ConstraintId>,
    /// The constraints in which the proposition occurs as a negative literal.
    negative: Vec<ConstraintId>,
    /// Every touched constraint once, with the change in its true-literal count when the
    /// proposition goes from false to true. Constraints where the change is zero are left out.
    weighted: Vec<WeightedOccurrence>,
}

impl Occurrences {
    fn add(&mut self, constraint: ConstraintId, literal: Literal) {
        let (occurrences, weight) = if literal.is_positive() {
            (&mut self.positive, 1)
        } else {
            (&mut self.negative, -1)
        };

        // Literals of a constraint are added consecutively, so a repeated proposition can only
        // be a repeat of the last entry.
        if occurrences.last() != Some(&constraint) {
            occurrences.push(constraint);
        }

        match self.weighted.last_mut() {
            Some(last) if last.constraint == constraint => {
                last.weight += weight;
                if last.weight == 0 {
                    let _ = self.weighted.pop();
                }
            }
            _ => self
                .weighted
                .push(WeightedOccurrence { constraint, weight }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WeightedOccurrence {
    pub(crate) constraint: ConstraintId,
    pub(crate) weight: i32,
}

/// A set of propositions and constraints over them. Once built, a problem never changes; all
/// search state lives in the [`LocalSearchSolver`](crate::LocalSearchSolver).
#[derive(Debug, Clone)]
pub struct Problem {
    variable_names: VariableNames,
    constraints: KeyedVec<ConstraintId, CardinalityConstraint>,
    occurrences: KeyedVec<PropositionalVariable, Occurrences>,
}

impl Problem {
    pub fn num_propositions(&self) -> usize {
        self.variable_names.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn propositions(&self) -> impl Iterator<Item = PropositionalVariable> {
        self.occurrences.keys()
    }

    pub fn get_name(&self, propositional_variable: PropositionalVariable) -> &str {
        self.variable_names
            .get_propositional_name(propositional_variable)
    }

    pub fn get_propositional_variable(&self, name: &str) -> Option<PropositionalVariable> {
        self.variable_names.get_propositional_by_name(name)
    }

    pub fn constraints(&self) -> impl Iterator<Item = &CardinalityConstraint> {
        self.constraints.iter()
    }

    pub fn get_constraint(&self, constraint: ConstraintId) -> &CardinalityConstraint {
        &self.constraints[constraint]
    }

    /// The constraints in which the proposition occurs positively, in constraint order.
    pub fn positive_occurrences(
        &self,
        propositional_variable: PropositionalVariable,
    ) -> &[ConstraintId] {
        &self.occurrences[propositional_variable].positive
    }

    /// The constraints in which the proposition occurs negated, in constraint order.
    pub fn negative_occurrences(
        &self,
        propositional_variable: PropositionalVariable,
    ) -> &[ConstraintId] {
        &self.occurrences[propositional_variable].negative
    }

    pub(crate) fn weighted_occurrences(
        &self,
        propositional_variable: PropositionalVariable,
    ) -> &[WeightedOccurrence] {
        &self.occurrences[propositional_variable].weighted
    }
}

#[cfg(test)]
mod tests {
    use super::ProblemBuilder;
    use super::WeightedOccurrence;
    use crate::basic_types::ConstraintOperationError;
    use crate::engine::Literal;

    #[test]
    fn occurrence_lists_follow_polarity() {
        let mut builder = ProblemBuilder::default();
        let a = builder.propositional_variable("a");
        let b = builder.propositional_variable("b");

        let c0 = builder
            .add_clause([Literal::new(a, true), Literal::new(b, false)])
            .expect("valid clause");
        let c1 = builder
            .add_clause([Literal::new(a, false)])
            .expect("valid clause");

        let problem = builder.build();

        assert_eq!(problem.positive_occurrences(a), &[c0]);
        assert_eq!(problem.negative_occurrences(a), &[c1]);
        assert!(problem.positive_occurrences(b).is_empty());
        assert_eq!(problem.negative_occurrences(b), &[c0]);
    }

    #[test]
    fn repeated_propositions_are_weighted() {
        let mut builder = ProblemBuilder::default();
        let a = builder.propositional_variable("a");
        let b = builder.propositional_variable("b");

        let twice = builder
            .add_cardinality_constraint([Literal::new(a, true), Literal::new(a, true)], 2, 2)
            .expect("valid constraint");
        let tautology = builder
            .add_clause([
                Literal::new(a, true),
                Literal::new(b, true),
                Literal::new(a, false),
            ])
            .expect("valid clause");

        let problem = builder.build();

        assert_eq!(problem.positive_occurrences(a), &[twice, tautology]);
        assert_eq!(problem.negative_occurrences(a), &[tautology]);
        assert_eq!(
            problem.weighted_occurrences(a),
            &[WeightedOccurrence {
                constraint: twice,
                weight: 2
            }]
        );
    }

    #[test]
    fn invalid_constraints_are_rejected() {
        let mut builder = ProblemBuilder::default();
        let a = builder.propositional_variable("a");

        assert_eq!(
            builder.add_clause(Vec::<Literal>::new()),
            Err(ConstraintOperationError::EmptyConstraint)
        );
        assert_eq!(
            builder.add_cardinality_constraint([Literal::new(a, true)], 1, 0),
            Err(ConstraintOperationError::InvalidRange { min: 1, max: 0 })
        );
    }
}
