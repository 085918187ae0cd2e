use soroban_sdk::{Address, Env};

use crate::constants::{INSTANCE_TTL_LEDGERS, RECORD_TTL_LEDGERS};
use crate::errors::VotingError;
use crate::types::{DataKey, Proposal, Voter, WorkflowStatus};

/// Bump the contract instance back to its full TTL. Called on every entry
/// point so a ballot in active use is never archived.
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_LEDGERS, INSTANCE_TTL_LEDGERS);
}

fn extend_record(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_TTL_LEDGERS, RECORD_TTL_LEDGERS);
}

// ── Admin ────────────────────────────────────────────────────────────────────

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

// ── Workflow ─────────────────────────────────────────────────────────────────

pub fn set_status(env: &Env, status: WorkflowStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
}

pub fn get_status(env: &Env) -> WorkflowStatus {
    env.storage()
        .instance()
        .get(&DataKey::Status)
        .unwrap_or(WorkflowStatus::RegisteringVoters)
}

pub fn set_winning_proposal_id(env: &Env, proposal_id: u32) {
    env.storage()
        .instance()
        .set(&DataKey::WinningProposalId, &proposal_id);
}

pub fn get_winning_proposal_id(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::WinningProposalId)
        .unwrap_or(0)
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn save_voter(env: &Env, address: &Address, voter: &Voter) {
    let key = DataKey::Voter(address.clone());
    env.storage().persistent().set(&key, voter);
    extend_record(env, &key);
}

/// Read a voter record, bumping its TTL when present.
pub fn get_voter(env: &Env, address: &Address) -> Option<Voter> {
    let key = DataKey::Voter(address.clone());
    let voter = env.storage().persistent().get(&key);
    if voter.is_some() {
        extend_record(env, &key);
    }
    voter
}

pub fn has_voter(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Voter(address.clone()))
}

pub fn get_voted_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::VotedCount)
        .unwrap_or(0)
}

pub fn set_voted_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::VotedCount, &count);
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

/// Appends a proposal at the next index and returns that index.
pub fn push_proposal(env: &Env, proposal: &Proposal) -> Result<u32, VotingError> {
    let proposal_id = get_proposal_count(env);
    let next_count = proposal_id.checked_add(1).ok_or(VotingError::Overflow)?;

    save_proposal(env, proposal_id, proposal);
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &next_count);
    Ok(proposal_id)
}

pub fn save_proposal(env: &Env, proposal_id: u32, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal_id);
    env.storage().persistent().set(&key, proposal);
    extend_record(env, &key);
}

/// Read a proposal within the current bounds, bumping its TTL when present.
pub fn get_proposal(env: &Env, proposal_id: u32) -> Option<Proposal> {
    if proposal_id >= get_proposal_count(env) {
        return None;
    }
    let key = DataKey::Proposal(proposal_id);
    let proposal = env.storage().persistent().get(&key);
    if proposal.is_some() {
        extend_record(env, &key);
    }
    proposal
}
