//! Caller guards.
//!
//! Both guards authenticate the caller with `require_auth` and then check
//! its role. They run before any storage write, so a rejected call has no
//! effect.

use soroban_sdk::{Address, Env};

use crate::errors::VotingError;
use crate::storage;
use crate::types::Voter;

/// Require that `caller` is the administrator fixed at initialization.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), VotingError> {
    caller.require_auth();

    let admin = storage::get_admin(env).ok_or(VotingError::NotInitialized)?;
    if *caller != admin {
        return Err(VotingError::NotAuthorized);
    }
    Ok(())
}

/// Require that `caller` is a registered voter and return its record.
pub fn require_voter(env: &Env, caller: &Address) -> Result<Voter, VotingError> {
    caller.require_auth();

    if !storage::has_admin(env) {
        return Err(VotingError::NotInitialized);
    }
    match storage::get_voter(env, caller) {
        Some(voter) if voter.is_registered => Ok(voter),
        _ => Err(VotingError::NotAuthorized),
    }
}
