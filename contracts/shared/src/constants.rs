/// Fee rates are expressed in basis points; 10_000 bps = 100%.
pub const MAX_BASIS_POINTS: u32 = 10_000;

/// Allocation percentages must sum to exactly this value before a pool
/// can settle as funded.
pub const PERCENT_TOTAL: u32 = 100;

/// Default ballot weight when a vote carries no explicit weight.
pub const DEFAULT_VOTE_WEIGHT: u32 = 1;
