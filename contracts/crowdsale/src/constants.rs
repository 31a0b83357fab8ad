// Beneficiary allocations, as percent of the tokens issued to contributors.
pub const ECOSYSTEM_SHARE_PCT: i128 = 20;
pub const TEAM_SHARE_PCT: i128 = 20;
pub const BOUNTY_SHARE_PCT: i128 = 5;

/// Denominator for both wave bonuses and beneficiary shares.
pub const PERCENT_DENOMINATOR: i128 = 100;

// Instance storage TTL, in ledgers (~5s each).
pub const INSTANCE_BUMP_AMOUNT: u32 = 518_400; // ~30 days
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - 17_280;
