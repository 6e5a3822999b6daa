use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers as soon as either of its two conditions does. Both
/// conditions are queried every time, so budgets which count steps stay in sync.
#[derive(Clone, Copy, Debug)]
pub struct Combinator<T1, T2> {
    t1: T1,
    t2: T2,
}

impl<T1, T2> Combinator<T1, T2> {
    pub fn new(t1: T1, t2: T2) -> Self {
        Combinator { t1, t2 }
    }
}

impl<T1: TerminationCondition, T2: TerminationCondition> TerminationCondition
    for Combinator<T1, T2>
{
    fn should_stop(&mut self) -> bool {
        let t1_stop = self.t1.should_stop();
        let t2_stop = self.t2.should_stop();

        t1_stop || t2_stop
    }
}

#[cfg(test)]
mod tests {
    use super::Combinator;
    use crate::engine::termination::Indefinite;
    use crate::engine::termination::StepBudget;
    use crate::engine::termination::TerminationCondition;

    #[test]
    fn stops_when_either_condition_stops() {
        let mut combined = Combinator::new(Indefinite, Some(StepBudget::new(1)));

        assert!(!combined.should_stop());
        assert!(combined.should_stop());
    }

    #[test]
    fn absent_condition_never_stops() {
        let mut combined = Combinator::new(Indefinite, None::<StepBudget>);

        for _ in 0..100 {
            assert!(!combined.should_stop());
        }
    }
}
