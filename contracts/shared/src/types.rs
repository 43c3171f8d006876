use soroban_sdk::{contracttype, Address, String};

/// Monetary amounts are fixed-point integers in the accepted token's
/// smallest unit. Floating point is never used for settlement math.
pub type Amount = i128;

/// Lifecycle status of a pool. `Funded` and `Closed` are terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PoolStatus {
    /// Accepting contributions, allocations and votes.
    Active,
    /// Goal reached by the deadline; fee collected, net available for
    /// allocation-based distribution.
    Funded,
    /// Deadline passed below goal; contributions eligible for refund.
    Closed,
}

/// Descriptive campaign tags. No invariant is attached to any field.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolMetadata {
    pub risk_level: String,
    pub industry: String,
    pub stage: String,
}

/// One row of a pool's allocation table.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllocationEntry {
    pub recipient: Address,
    pub name: String,
    /// Whole-percent share of the net proceeds, 0..=100.
    pub percentage: u32,
}

/// One row of a pool's voting table.
///
/// `total_votes` is frozen when the proposal is created so that vote
/// weight stays deterministic; it is never recomputed per vote.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalInfo {
    pub id: u32,
    pub title: String,
    pub votes: u32,
    pub total_votes: u32,
}

/// Immutable deployment parameters shared by every pool a factory
/// creates. Copied by value into each pool at creation time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeploymentConfig {
    pub treasury: Address,
    pub token: Address,
    pub fee_basis_points: u32,
}

/// Full state of one funding campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolInfo {
    pub id: u64,
    /// Display identity of the pool's creator; not a capability.
    pub manager: Address,
    pub goal: Amount,
    pub current_size: Amount,
    pub min_ticket: Amount,
    /// Distinct contributor identities, not transactions.
    pub contributors_count: u32,
    /// Ledger timestamp after which the pool can be finalized.
    pub deadline: u64,
    pub status: PoolStatus,
    /// Deployment parameters snapshotted at creation.
    pub fee_basis_points: u32,
    pub treasury: Address,
    pub token: Address,
    pub metadata: PoolMetadata,
}

/// Append-only treasury ledger row recording fee provenance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeEntry {
    pub pool_id: u64,
    pub amount: Amount,
    pub collected_at: u64,
}
