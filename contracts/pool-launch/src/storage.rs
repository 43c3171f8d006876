use shared::errors::Error;
use shared::types::{AllocationEntry, Amount, DeploymentConfig, PoolInfo, ProposalInfo};
use soroban_sdk::{contracttype, Address, Env, Vec};

/// Storage keys for the pool registry and per-pool tables
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Shared deployment parameters, set once at initialization
    Config,
    /// Monotonic pool id counter
    PoolCount,
    /// Pool state keyed by pool id
    Pool(u64),
    /// Cumulative contribution per (pool, contributor)
    Contribution(u64, Address),
    /// Allocation table per pool
    Allocation(u64),
    /// Proposal counter per pool
    ProposalCount(u64),
    /// Proposal keyed by (pool, proposal id)
    Proposal(u64, u32),
    /// Vote marker keyed by (pool, proposal, voter)
    Voted(u64, u32, Address),
}

/// Store the deployment configuration
pub fn set_config(env: &Env, config: &DeploymentConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

/// Retrieve the deployment configuration
pub fn get_config(env: &Env) -> Result<DeploymentConfig, Error> {
    env.storage()
        .instance()
        .get::<DataKey, DeploymentConfig>(&DataKey::Config)
        .ok_or(Error::NotInit)
}

/// Check if the factory has been initialized
pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

/// Retrieve the next pool id, defaults to 1
pub fn get_pool_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get::<DataKey, u64>(&DataKey::PoolCount)
        .unwrap_or(1)
}

/// Store the next pool id
pub fn set_pool_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::PoolCount, &count);
}

/// Store pool state
pub fn set_pool(env: &Env, pool_id: u64, pool: &PoolInfo) {
    env.storage().persistent().set(&DataKey::Pool(pool_id), pool);
}

/// Retrieve pool state
pub fn get_pool(env: &Env, pool_id: u64) -> Result<PoolInfo, Error> {
    env.storage()
        .persistent()
        .get::<DataKey, PoolInfo>(&DataKey::Pool(pool_id))
        .ok_or(Error::NotFound)
}

/// Retrieve a contributor's cumulative amount, defaults to 0
pub fn get_contribution(env: &Env, pool_id: u64, contributor: &Address) -> Amount {
    env.storage()
        .persistent()
        .get::<DataKey, Amount>(&DataKey::Contribution(pool_id, contributor.clone()))
        .unwrap_or(0)
}

/// Store a contributor's cumulative amount
pub fn set_contribution(env: &Env, pool_id: u64, contributor: &Address, amount: Amount) {
    env.storage().persistent().set(
        &DataKey::Contribution(pool_id, contributor.clone()),
        &amount,
    );
}

/// Store the allocation table for a pool (wholesale replace)
pub fn set_allocation(env: &Env, pool_id: u64, entries: &Vec<AllocationEntry>) {
    env.storage()
        .persistent()
        .set(&DataKey::Allocation(pool_id), entries);
}

/// Retrieve the allocation table for a pool, defaults to empty
pub fn get_allocation(env: &Env, pool_id: u64) -> Vec<AllocationEntry> {
    env.storage()
        .persistent()
        .get::<DataKey, Vec<AllocationEntry>>(&DataKey::Allocation(pool_id))
        .unwrap_or(Vec::new(env))
}

/// Retrieve the proposal counter for a pool, defaults to 0
pub fn get_proposal_count(env: &Env, pool_id: u64) -> u32 {
    env.storage()
        .persistent()
        .get::<DataKey, u32>(&DataKey::ProposalCount(pool_id))
        .unwrap_or(0)
}

/// Store the proposal counter for a pool
pub fn set_proposal_count(env: &Env, pool_id: u64, count: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::ProposalCount(pool_id), &count);
}

/// Store a proposal
pub fn set_proposal(env: &Env, pool_id: u64, proposal_id: u32, proposal: &ProposalInfo) {
    env.storage()
        .persistent()
        .set(&DataKey::Proposal(pool_id, proposal_id), proposal);
}

/// Retrieve a proposal
pub fn get_proposal(env: &Env, pool_id: u64, proposal_id: u32) -> Result<ProposalInfo, Error> {
    env.storage()
        .persistent()
        .get::<DataKey, ProposalInfo>(&DataKey::Proposal(pool_id, proposal_id))
        .ok_or(Error::UnknownProp)
}

/// Record that an identity voted on a proposal
pub fn set_voted(env: &Env, pool_id: u64, proposal_id: u32, voter: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Voted(pool_id, proposal_id, voter.clone()), &true);
}

/// Check if an identity already voted on a proposal
pub fn has_voted(env: &Env, pool_id: u64, proposal_id: u32, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Voted(pool_id, proposal_id, voter.clone()))
}
