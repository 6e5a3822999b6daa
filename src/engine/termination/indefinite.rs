use super::TerminationCondition;

/// A [`TerminationCondition`] which never triggers. On an unsatisfiable problem the search will
/// then run forever.
#[derive(Clone, Copy, Debug)]
pub struct Indefinite;

impl TerminationCondition for Indefinite {
    fn should_stop(&mut self) -> bool {
        false
    }
}
