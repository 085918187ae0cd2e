//! Input validation for proposal submissions.

use soroban_sdk::String;

use crate::constants::MAX_DESCRIPTION_LENGTH;
use crate::errors::VotingError;

/// Validate a proposal description.
///
/// # Returns
/// `Err(VotingError::DescriptionTooLong)` above `MAX_DESCRIPTION_LENGTH` bytes,
/// `Err(VotingError::EmptyProposal)` when empty or only ASCII whitespace.
pub fn validate_description(description: &String) -> Result<(), VotingError> {
    let len = description.len();
    if len > MAX_DESCRIPTION_LENGTH {
        return Err(VotingError::DescriptionTooLong);
    }

    let mut buf = [0u8; MAX_DESCRIPTION_LENGTH as usize];
    let bytes = &mut buf[..len as usize];
    description.copy_into_slice(bytes);

    if is_blank(bytes) {
        return Err(VotingError::EmptyProposal);
    }
    Ok(())
}

pub fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(b""));
        assert!(is_blank(b"   "));
        assert!(is_blank(b"\t\n "));
        assert!(!is_blank(b" a "));
        assert!(!is_blank(b"First Proposal"));
    }

    #[test]
    fn test_validate_description() {
        let env = Env::default();

        assert_eq!(
            validate_description(&String::from_str(&env, "")),
            Err(VotingError::EmptyProposal)
        );
        assert_eq!(
            validate_description(&String::from_str(&env, "  \t")),
            Err(VotingError::EmptyProposal)
        );
        assert_eq!(
            validate_description(&String::from_str(&env, "Build a bike lane")),
            Ok(())
        );
    }

    #[test]
    fn test_description_length_limit() {
        let env = Env::default();
        let at_limit = [b'x'; MAX_DESCRIPTION_LENGTH as usize];
        let over_limit = [b'x'; MAX_DESCRIPTION_LENGTH as usize + 1];
        let at_limit = core::str::from_utf8(&at_limit).unwrap();
        let over_limit = core::str::from_utf8(&over_limit).unwrap();

        assert_eq!(
            validate_description(&String::from_str(&env, at_limit)),
            Ok(())
        );
        assert_eq!(
            validate_description(&String::from_str(&env, over_limit)),
            Err(VotingError::DescriptionTooLong)
        );
    }
}
