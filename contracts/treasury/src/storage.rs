use shared::errors::Error;
use shared::types::{Amount, FeeEntry};
use soroban_sdk::{contracttype, Address, Env};

/// Storage keys for the treasury ledger
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Holder of the withdrawal capability
    Admin,
    /// Only address allowed to record fees (the pool factory contract)
    Recorder,
    /// Sum of all recorded fees
    Collected,
    /// Sum of all withdrawals; entries are never deleted
    Withdrawn,
    /// Number of ledger entries
    EntryCount,
    /// Append-only fee ledger entry by index
    Entry(u64),
}

/// Store the admin address
pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

/// Retrieve the admin address
pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get::<DataKey, Address>(&DataKey::Admin)
        .ok_or(Error::NotInit)
}

/// Check if the treasury has been initialized
pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

/// Store the authorized fee recorder
pub fn set_recorder(env: &Env, recorder: &Address) {
    env.storage().instance().set(&DataKey::Recorder, recorder);
}

/// Retrieve the authorized fee recorder
pub fn get_recorder(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get::<DataKey, Address>(&DataKey::Recorder)
        .ok_or(Error::NotInit)
}

/// Retrieve the total collected amount, defaults to 0
pub fn get_collected(env: &Env) -> Amount {
    env.storage()
        .persistent()
        .get::<DataKey, Amount>(&DataKey::Collected)
        .unwrap_or(0)
}

/// Store the total collected amount
pub fn set_collected(env: &Env, amount: Amount) {
    env.storage().persistent().set(&DataKey::Collected, &amount);
}

/// Retrieve the total withdrawn amount, defaults to 0
pub fn get_withdrawn(env: &Env) -> Amount {
    env.storage()
        .persistent()
        .get::<DataKey, Amount>(&DataKey::Withdrawn)
        .unwrap_or(0)
}

/// Store the total withdrawn amount
pub fn set_withdrawn(env: &Env, amount: Amount) {
    env.storage().persistent().set(&DataKey::Withdrawn, &amount);
}

/// Retrieve the ledger entry count, defaults to 0
pub fn get_entry_count(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get::<DataKey, u64>(&DataKey::EntryCount)
        .unwrap_or(0)
}

/// Store the ledger entry count
pub fn set_entry_count(env: &Env, count: u64) {
    env.storage().persistent().set(&DataKey::EntryCount, &count);
}

/// Store a ledger entry at an index
pub fn set_entry(env: &Env, index: u64, entry: &FeeEntry) {
    env.storage().persistent().set(&DataKey::Entry(index), entry);
}

/// Retrieve a ledger entry by index
pub fn get_entry(env: &Env, index: u64) -> Result<FeeEntry, Error> {
    env.storage()
        .persistent()
        .get::<DataKey, FeeEntry>(&DataKey::Entry(index))
        .ok_or(Error::NotFound)
}
