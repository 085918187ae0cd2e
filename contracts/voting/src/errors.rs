//! Error codes returned by the voting contract.

use soroban_sdk::contracterror;

/// Every rejected precondition maps to exactly one of these codes.
///
/// A call that returns an error leaves contract storage untouched and
/// publishes no event.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    /// Caller lacks the role required by the operation
    NotAuthorized = 1,

    /// Operation attempted outside its workflow phase
    InvalidPhase = 2,

    /// Voter already has a record
    AlreadyRegistered = 3,

    /// Voter already cast a vote
    AlreadyVoted = 4,

    /// Proposal description is empty or blank
    EmptyProposal = 5,

    /// Proposal id is outside the proposal sequence
    ProposalNotFound = 6,

    /// `initialize` was already called
    AlreadyInitialized = 7,

    /// Contract has no administrator yet
    NotInitialized = 8,

    /// Proposal description exceeds `MAX_DESCRIPTION_LENGTH`
    DescriptionTooLong = 9,

    /// Checked arithmetic overflowed
    Overflow = 10,
}
