use log::warn;

use crate::basic_types::InternalConsistencyError;
use crate::basic_types::KeyedVec;
use crate::engine::satisfaction_tracker::count_true_literals;
use crate::engine::ConstraintId;
use crate::engine::Literal;
use crate::engine::Problem;
use crate::engine::TruthAssignment;

#[derive(Debug, Copy, Clone)]
pub(crate) struct DebugHelper {}

impl DebugHelper {
    // recounts every constraint from the assignment, so this is linear in the size of the
    // problem and must stay off the hot path unless the assert level asks for it
    //  the counts are checked before the memberships, since a wrong count usually explains a
    // wrong membership and is the more useful report
    pub(crate) fn debug_satisfaction_state(
        problem: &Problem,
        assignment: &TruthAssignment,
        true_literal_counts: &KeyedVec<ConstraintId, u32>,
        is_member_of_unsatisfied: impl Fn(ConstraintId) -> bool,
        last_flip: Option<Literal>,
    ) -> Result<(), InternalConsistencyError> {
        for constraint in problem.constraints() {
            let actual = count_true_literals(constraint.literals(), assignment);
            let cached = true_literal_counts[constraint.id()];

            if actual != cached {
                warn!(
                    "Constraint {} has a stale true literal count: cached {cached}, actual {actual}",
                    constraint.id()
                );
                return Err(InternalConsistencyError::CountMismatch {
                    constraint: constraint.id(),
                    cached,
                    actual,
                    last_flip,
                });
            }
        }

        for constraint in problem.constraints() {
            let is_member = is_member_of_unsatisfied(constraint.id());
            let should_be_member =
                !constraint.is_satisfied_by_count(true_literal_counts[constraint.id()]);

            if is_member != should_be_member {
                warn!(
                    "Constraint {} has the wrong membership in the unsatisfied set",
                    constraint.id()
                );
                return Err(InternalConsistencyError::MembershipMismatch {
                    constraint: constraint.id(),
                    is_member,
                    last_flip,
                });
            }
        }

        Ok(())
    }
}
