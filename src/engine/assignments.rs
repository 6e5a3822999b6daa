use crate::basic_types::KeyedVec;
use crate::basic_types::Random;
use crate::engine::Literal;
use crate::engine::PropositionalVariable;

/// A total truth assignment over the propositions of a problem. The only way to change it after
/// creation is [`TruthAssignment::flip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthAssignment {
    values: KeyedVec<PropositionalVariable, bool>,
}

impl TruthAssignment {
    pub(crate) fn random(num_propositions: usize, random: &mut dyn Random) -> TruthAssignment {
        TruthAssignment {
            values: KeyedVec::new(
                (0..num_propositions)
                    .map(|_| random.generate_bool(0.5))
                    .collect(),
            ),
        }
    }

    pub(crate) fn from_values(values: Vec<bool>) -> TruthAssignment {
        TruthAssignment {
            values: KeyedVec::new(values),
        }
    }

    pub fn num_propositions(&self) -> usize {
        self.values.len()
    }

    pub fn get_value(&self, propositional_variable: PropositionalVariable) -> bool {
        self.values[propositional_variable]
    }

    pub fn is_literal_true(&self, literal: Literal) -> bool {
        literal.evaluate(self.get_value(literal.get_propositional_variable()))
    }

    /// Toggles the value of the proposition and returns its new value.
    pub(crate) fn flip(&mut self, propositional_variable: PropositionalVariable) -> bool {
        let value = &mut self.values[propositional_variable];
        *value = !*value;
        *value
    }

    pub(crate) fn values(&self) -> &[bool] {
        self.values.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::TruthAssignment;
    use crate::basic_types::tests::TestRandom;
    use crate::engine::Literal;
    use crate::engine::PropositionalVariable;

    #[test]
    fn flip_toggles_a_single_proposition() {
        let mut assignment = TruthAssignment::from_values(vec![false, true]);
        let p0 = PropositionalVariable::new(0);
        let p1 = PropositionalVariable::new(1);

        assert!(assignment.flip(p0));
        assert!(assignment.get_value(p0));
        assert!(assignment.get_value(p1));

        assert!(!assignment.flip(p0));
        assert!(!assignment.get_value(p0));
    }

    #[test]
    fn random_assignment_draws_one_value_per_proposition() {
        let mut random = TestRandom::default();
        random.bools.extend([true, false, true]);

        let assignment = TruthAssignment::random(3, &mut random);

        assert_eq!(assignment.values(), &[true, false, true]);
        assert!(!assignment.is_literal_true(Literal::new(PropositionalVariable::new(0), false)));
    }
}
