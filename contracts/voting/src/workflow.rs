//! Forward-only workflow state machine.

use soroban_sdk::{log, Env};

use crate::errors::VotingError;
use crate::events;
use crate::storage;
use crate::types::WorkflowStatus;

/// The only legal transitions. Anything not listed here is rejected.
const TRANSITIONS: [(WorkflowStatus, WorkflowStatus); 5] = [
    (
        WorkflowStatus::RegisteringVoters,
        WorkflowStatus::ProposalsRegistrationStarted,
    ),
    (
        WorkflowStatus::ProposalsRegistrationStarted,
        WorkflowStatus::ProposalsRegistrationEnded,
    ),
    (
        WorkflowStatus::ProposalsRegistrationEnded,
        WorkflowStatus::VotingSessionStarted,
    ),
    (
        WorkflowStatus::VotingSessionStarted,
        WorkflowStatus::VotingSessionEnded,
    ),
    (
        WorkflowStatus::VotingSessionEnded,
        WorkflowStatus::VotesTallied,
    ),
];

pub fn is_allowed(from: WorkflowStatus, to: WorkflowStatus) -> bool {
    TRANSITIONS.iter().any(|&(f, t)| f == from && t == to)
}

/// Fail with `InvalidPhase` unless the stored status is `expected`.
pub fn require_status(env: &Env, expected: WorkflowStatus) -> Result<(), VotingError> {
    if storage::get_status(env) != expected {
        return Err(VotingError::InvalidPhase);
    }
    Ok(())
}

/// Validate that the ballot is in `from` and that `from -> to` is in the
/// transition table. Writes nothing; pair with [`commit`] once the
/// transition's own effects are in place.
pub fn check_transition(
    env: &Env,
    from: WorkflowStatus,
    to: WorkflowStatus,
) -> Result<(), VotingError> {
    require_status(env, from)?;
    if !is_allowed(from, to) {
        return Err(VotingError::InvalidPhase);
    }
    Ok(())
}

/// Store the new status and notify observers.
pub fn commit(env: &Env, from: WorkflowStatus, to: WorkflowStatus) {
    storage::set_status(env, to);
    log!(env, "workflow status changed", from as u32, to as u32);
    events::workflow_status_change(env, from, to);
}
