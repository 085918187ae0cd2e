use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

use crate::{
    access,
    constants::GENESIS_DESCRIPTION,
    errors::VotingError,
    events, storage, tally,
    types::{Proposal, Voter, WorkflowStatus},
    validation, workflow,
};

#[contract]
pub struct VotingContract;

/// Admin-only single step of the workflow that carries no extra effects.
fn advance(
    env: &Env,
    caller: &Address,
    from: WorkflowStatus,
    to: WorkflowStatus,
) -> Result<(), VotingError> {
    storage::extend_instance(env);
    access::require_admin(env, caller)?;
    workflow::check_transition(env, from, to)?;
    workflow::commit(env, from, to);
    Ok(())
}

#[contractimpl]
impl VotingContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Fix the administrator and open voter registration.
    /// Can only be called once.
    pub fn initialize(env: Env, admin: Address) -> Result<(), VotingError> {
        storage::extend_instance(&env);
        if storage::has_admin(&env) {
            return Err(VotingError::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_status(&env, WorkflowStatus::RegisteringVoters);
        storage::set_winning_proposal_id(&env, 0);

        events::initialized(&env, &admin);
        Ok(())
    }

    // ── Voter Registry ───────────────────────────────────────────────────────

    /// Register `voter`. Admin only, while registering voters.
    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        storage::extend_instance(&env);
        access::require_admin(&env, &caller)?;
        workflow::require_status(&env, WorkflowStatus::RegisteringVoters)?;

        if storage::has_voter(&env, &voter) {
            return Err(VotingError::AlreadyRegistered);
        }

        let record = Voter {
            is_registered: true,
            has_voted: false,
            voted_proposal_id: 0,
        };
        storage::save_voter(&env, &voter, &record);

        log!(&env, "voter registered", voter);
        events::voter_registered(&env, &voter);
        Ok(())
    }

    /// Look up any voter's record. The caller must itself be a registered
    /// voter. An unknown address yields an unregistered, empty record.
    pub fn get_voter(env: Env, caller: Address, voter: Address) -> Result<Voter, VotingError> {
        storage::extend_instance(&env);
        access::require_voter(&env, &caller)?;

        Ok(storage::get_voter(&env, &voter).unwrap_or(Voter {
            is_registered: false,
            has_voted: false,
            voted_proposal_id: 0,
        }))
    }

    // ── Proposal Registry ────────────────────────────────────────────────────

    /// Submit a proposal and return its id. Voters only, while proposal
    /// registration is open.
    pub fn add_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<u32, VotingError> {
        storage::extend_instance(&env);
        access::require_voter(&env, &caller)?;
        workflow::require_status(&env, WorkflowStatus::ProposalsRegistrationStarted)?;
        validation::validate_description(&description)?;

        let proposal_id = storage::push_proposal(
            &env,
            &Proposal {
                description,
                vote_count: 0,
            },
        )?;

        log!(&env, "proposal registered", proposal_id, caller);
        events::proposal_registered(&env, proposal_id);
        Ok(proposal_id)
    }

    pub fn get_proposal(
        env: Env,
        caller: Address,
        proposal_id: u32,
    ) -> Result<Proposal, VotingError> {
        storage::extend_instance(&env);
        access::require_voter(&env, &caller)?;
        storage::get_proposal(&env, proposal_id).ok_or(VotingError::ProposalNotFound)
    }

    pub fn proposal_count(env: Env) -> u32 {
        storage::extend_instance(&env);
        storage::get_proposal_count(&env)
    }

    // ── Workflow ─────────────────────────────────────────────────────────────

    /// Open proposal registration. Seeds the GENESIS proposal at id 0.
    pub fn start_proposals_registration(env: Env, caller: Address) -> Result<(), VotingError> {
        storage::extend_instance(&env);
        access::require_admin(&env, &caller)?;
        let from = WorkflowStatus::RegisteringVoters;
        let to = WorkflowStatus::ProposalsRegistrationStarted;
        workflow::check_transition(&env, from, to)?;

        storage::push_proposal(
            &env,
            &Proposal {
                description: String::from_str(&env, GENESIS_DESCRIPTION),
                vote_count: 0,
            },
        )?;

        workflow::commit(&env, from, to);
        Ok(())
    }

    pub fn end_proposals_registration(env: Env, caller: Address) -> Result<(), VotingError> {
        advance(
            &env,
            &caller,
            WorkflowStatus::ProposalsRegistrationStarted,
            WorkflowStatus::ProposalsRegistrationEnded,
        )
    }

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        advance(
            &env,
            &caller,
            WorkflowStatus::ProposalsRegistrationEnded,
            WorkflowStatus::VotingSessionStarted,
        )
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        advance(
            &env,
            &caller,
            WorkflowStatus::VotingSessionStarted,
            WorkflowStatus::VotingSessionEnded,
        )
    }

    /// Close the ballot: pick the winner and move to `VotesTallied`.
    /// Returns the winning proposal id.
    pub fn tally_votes(env: Env, caller: Address) -> Result<u32, VotingError> {
        storage::extend_instance(&env);
        access::require_admin(&env, &caller)?;
        let from = WorkflowStatus::VotingSessionEnded;
        let to = WorkflowStatus::VotesTallied;
        workflow::check_transition(&env, from, to)?;

        let (winning_proposal_id, vote_count) = tally::compute_winner(&env)?;
        storage::set_winning_proposal_id(&env, winning_proposal_id);

        workflow::commit(&env, from, to);
        log!(&env, "votes tallied", winning_proposal_id, vote_count);
        events::tallied(&env, winning_proposal_id, vote_count);
        Ok(winning_proposal_id)
    }

    pub fn get_workflow_status(env: Env) -> WorkflowStatus {
        storage::extend_instance(&env);
        storage::get_status(&env)
    }

    /// Zero until the votes have been tallied.
    pub fn get_winning_proposal_id(env: Env) -> u32 {
        storage::extend_instance(&env);
        storage::get_winning_proposal_id(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, VotingError> {
        storage::extend_instance(&env);
        storage::get_admin(&env).ok_or(VotingError::NotInitialized)
    }

    // ── Vote Ledger ──────────────────────────────────────────────────────────

    /// Record the caller's single vote for `proposal_id`.
    pub fn cast_vote(env: Env, caller: Address, proposal_id: u32) -> Result<(), VotingError> {
        storage::extend_instance(&env);
        let mut voter = access::require_voter(&env, &caller)?;
        workflow::require_status(&env, WorkflowStatus::VotingSessionStarted)?;

        if voter.has_voted {
            return Err(VotingError::AlreadyVoted);
        }
        let mut proposal =
            storage::get_proposal(&env, proposal_id).ok_or(VotingError::ProposalNotFound)?;

        let vote_count = proposal
            .vote_count
            .checked_add(1)
            .ok_or(VotingError::Overflow)?;
        let voted_count = storage::get_voted_count(&env)
            .checked_add(1)
            .ok_or(VotingError::Overflow)?;

        voter.has_voted = true;
        voter.voted_proposal_id = proposal_id;
        proposal.vote_count = vote_count;

        storage::save_voter(&env, &caller, &voter);
        storage::save_proposal(&env, proposal_id, &proposal);
        storage::set_voted_count(&env, voted_count);

        log!(&env, "vote cast", caller, proposal_id);
        events::voted(&env, &caller, proposal_id);
        Ok(())
    }

    /// Number of voters who have cast their vote.
    pub fn voted_count(env: Env) -> u32 {
        storage::extend_instance(&env);
        storage::get_voted_count(&env)
    }
}
