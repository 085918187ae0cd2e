use soroban_sdk::{Env, Vec};

use crate::errors::VotingError;
use crate::storage;

/// Pick the `(proposal_id, vote_count)` with the highest count, scanning
/// ids in ascending order. On a tie the lowest id wins.
pub fn select_winner<I>(vote_counts: I) -> Option<(u32, u32)>
where
    I: IntoIterator<Item = u32>,
{
    let mut best: Option<(u32, u32)> = None;
    for (proposal_id, vote_count) in (0u32..).zip(vote_counts) {
        match best {
            Some((_, top)) if vote_count <= top => {}
            _ => best = Some((proposal_id, vote_count)),
        }
    }
    best
}

/// Scan every stored proposal and return the winner. Read-only apart
/// from TTL bumps. A gap in the proposal sequence is reported, not scored.
pub fn compute_winner(env: &Env) -> Result<(u32, u32), VotingError> {
    let mut vote_counts = Vec::new(env);
    for proposal_id in 0..storage::get_proposal_count(env) {
        let proposal =
            storage::get_proposal(env, proposal_id).ok_or(VotingError::ProposalNotFound)?;
        vote_counts.push_back(proposal.vote_count);
    }
    select_winner(vote_counts.iter()).ok_or(VotingError::ProposalNotFound)
}
