use crate::basic_types::HashMap;
use crate::basic_types::KeyedVec;
use crate::engine::PropositionalVariable;

/// Interns proposition names. The first time a name is seen it receives the next free
/// [`PropositionalVariable`], so identities are dense and follow first-seen order.
#[derive(Debug, Default, Clone)]
pub(crate) struct VariableNames {
    names: KeyedVec<PropositionalVariable, String>,
    propositionals_by_name: HashMap<String, PropositionalVariable>,
}

impl VariableNames {
    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }

    /// Get the propositional variable with the given name, if it has been interned.
    pub(crate) fn get_propositional_by_name(&self, name: &str) -> Option<PropositionalVariable> {
        self.propositionals_by_name.get(name).copied()
    }

    /// Get the name associated with a propositional variable.
    pub(crate) fn get_propositional_name(&self, propositional: PropositionalVariable) -> &str {
        &self.names[propositional]
    }

    /// Get the propositional variable for `name`, creating a new one if the name was not seen
    /// before.
    pub(crate) fn intern(&mut self, name: &str) -> PropositionalVariable {
        if let Some(propositional) = self.get_propositional_by_name(name) {
            return propositional;
        }

        let propositional = self.names.push(name.to_owned());
        let _ = self
            .propositionals_by_name
            .insert(name.to_owned(), propositional);
        propositional
    }
}
