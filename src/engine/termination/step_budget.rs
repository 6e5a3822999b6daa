use super::TerminationCondition;

/// A [`TerminationCondition`] which allows a fixed number of search steps.
#[derive(Clone, Copy, Debug)]
pub struct StepBudget {
    remaining_steps: u64,
}

impl StepBudget {
    pub fn new(max_steps: u64) -> StepBudget {
        StepBudget {
            remaining_steps: max_steps,
        }
    }
}

impl TerminationCondition for StepBudget {
    fn should_stop(&mut self) -> bool {
        if self.remaining_steps == 0 {
            return true;
        }

        self.remaining_steps -= 1;
        false
    }
}
