#![no_std]
//! # Voting Contract
//!
//! A single-administrator ballot. The administrator registers voters and
//! walks the ballot through six phases; registered voters submit text
//! proposals and cast one vote each; tallying picks the proposal with the
//! most votes, the lowest id winning a tie.
//!
//! ## Workflow
//!
//! 1. `RegisteringVoters` - admin calls `add_voter`
//! 2. `ProposalsRegistrationStarted` - voters call `add_proposal`
//! 3. `ProposalsRegistrationEnded`
//! 4. `VotingSessionStarted` - voters call `cast_vote`
//! 5. `VotingSessionEnded`
//! 6. `VotesTallied` - `get_winning_proposal_id` is final
//!
//! Every caller-scoped function takes the caller's `Address` explicitly and
//! authenticates it with `require_auth` before any check or write.

mod access;
mod constants;
mod contract;
mod errors;
mod events;
mod storage;
mod tally;
mod types;
mod validation;
mod workflow;

pub use constants::{GENESIS_DESCRIPTION, MAX_DESCRIPTION_LENGTH};
pub use contract::{VotingContract, VotingContractClient};
pub use errors::VotingError;
pub use types::{Proposal, Voter, WorkflowStatus};
