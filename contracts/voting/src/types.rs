use soroban_sdk::{contracttype, Address, String};

/// Phase of the ballot. Discriminants follow the order in which the
/// administrator walks through them, so `Ord` reflects progress.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum WorkflowStatus {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

/// Registry record for one voter.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    /// Meaningful only once `has_voted` is true
    pub voted_proposal_id: u32,
}

/// A proposal and its running tally.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u32,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // Instance storage
    Admin,
    Status,
    WinningProposalId,
    ProposalCount,
    VotedCount,
    // Persistent storage
    Voter(Address),
    Proposal(u32),
}
