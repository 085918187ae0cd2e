//! Notifications published after a mutation has been written.

use soroban_sdk::{symbol_short, Address, Env};

use crate::types::WorkflowStatus;

pub fn initialized(env: &Env, admin: &Address) {
    env.events()
        .publish((symbol_short!("init"),), admin.clone());
}

pub fn voter_registered(env: &Env, voter: &Address) {
    env.events()
        .publish((symbol_short!("voter_reg"), voter.clone()), ());
}

pub fn proposal_registered(env: &Env, proposal_id: u32) {
    env.events()
        .publish((symbol_short!("proposal"),), proposal_id);
}

pub fn voted(env: &Env, voter: &Address, proposal_id: u32) {
    env.events()
        .publish((symbol_short!("voted"), voter.clone()), proposal_id);
}

pub fn workflow_status_change(env: &Env, previous: WorkflowStatus, new: WorkflowStatus) {
    env.events()
        .publish((symbol_short!("workflow"),), (previous, new));
}

pub fn tallied(env: &Env, winning_proposal_id: u32, vote_count: u32) {
    env.events()
        .publish((symbol_short!("tallied"),), (winning_proposal_id, vote_count));
}
