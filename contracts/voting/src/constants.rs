//! Configuration constants for the voting contract.

// ===== Proposals =====

/// Description of the sentinel proposal stored at index 0.
pub const GENESIS_DESCRIPTION: &str = "GENESIS";

/// Maximum proposal description length in bytes.
pub const MAX_DESCRIPTION_LENGTH: u32 = 1024;

// ===== Storage TTL =====
// At ~5s per ledger, 3_110_400 ledgers is roughly 180 days. Entries are
// bumped back to the full TTL every time they are touched, reads included.

/// TTL applied to instance storage (admin, phase, counters).
pub const INSTANCE_TTL_LEDGERS: u32 = 3_110_400;

/// TTL applied to voter and proposal records.
pub const RECORD_TTL_LEDGERS: u32 = 3_110_400;
