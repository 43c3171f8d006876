#![no_std]

use shared::{
    errors::Error,
    events::{ADMIN_CHANGED, FEE_RECORDED, WITHDRAWN},
    types::{Amount, FeeEntry},
};
use soroban_sdk::{contract, contractimpl, Address, Env};

mod storage;

#[cfg(test)]
mod tests;

use storage::*;

#[contract]
pub struct TreasuryContract;

#[contractimpl]
impl TreasuryContract {
    /// Initialize the treasury with an admin and the single address
    /// allowed to record fees (the pool factory contract).
    pub fn initialize(env: Env, admin: Address, recorder: Address) -> Result<(), Error> {
        if has_admin(&env) {
            return Err(Error::AlreadyInit);
        }
        admin.require_auth();

        set_admin(&env, &admin);
        set_recorder(&env, &recorder);

        Ok(())
    }

    /// Record a fee collected from a funded pool.
    ///
    /// Called by the pool finalize path only. Appends a ledger entry
    /// stamped with the current ledger time; entries are never deleted,
    /// so the ledger doubles as the audit trail.
    ///
    /// # Errors
    /// * `InvalidAmount` - Negative amount
    pub fn record_fee(env: Env, pool_id: u64, amount: Amount) -> Result<(), Error> {
        let recorder = get_recorder(&env)?;
        recorder.require_auth();

        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let entry = FeeEntry {
            pool_id,
            amount,
            collected_at: env.ledger().timestamp(),
        };

        let index = get_entry_count(&env);
        set_entry(&env, index, &entry);
        set_entry_count(&env, index + 1);

        let collected = get_collected(&env)
            .checked_add(amount)
            .ok_or(Error::InvalidAmount)?;
        set_collected(&env, collected);

        env.events().publish((FEE_RECORDED,), (pool_id, amount));

        Ok(())
    }

    /// Withdraw accumulated fees. Admin capability only.
    ///
    /// Withdrawals increment a running total rather than deleting
    /// ledger entries. Returns the updated available balance.
    ///
    /// # Errors
    /// * `Unauthorized` - Caller does not hold the admin capability
    /// * `InvalidAmount` - Zero or negative amount
    /// * `InsufficientBalance` - Amount exceeds the available balance
    pub fn withdraw(env: Env, caller: Address, amount: Amount) -> Result<Amount, Error> {
        let admin = get_admin(&env)?;
        if admin != caller {
            return Err(Error::Unauthorized);
        }
        caller.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let withdrawn = get_withdrawn(&env);
        let available = get_collected(&env) - withdrawn;
        if amount > available {
            return Err(Error::InsufBalance);
        }

        set_withdrawn(&env, withdrawn + amount);

        let remaining = available - amount;
        env.events().publish((WITHDRAWN,), (caller, amount, remaining));

        Ok(remaining)
    }

    /// Hand the admin capability to a new address. Admin only.
    pub fn transfer_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), Error> {
        let admin = get_admin(&env)?;
        if admin != caller {
            return Err(Error::Unauthorized);
        }
        caller.require_auth();

        set_admin(&env, &new_admin);

        env.events().publish((ADMIN_CHANGED,), (caller, new_admin));

        Ok(())
    }

    /// Available balance: total collected minus total withdrawn
    pub fn balance(env: Env) -> Amount {
        get_collected(&env) - get_withdrawn(&env)
    }

    /// Total fees ever collected
    pub fn total_collected(env: Env) -> Amount {
        get_collected(&env)
    }

    /// Total amount ever withdrawn
    pub fn total_withdrawn(env: Env) -> Amount {
        get_withdrawn(&env)
    }

    /// Number of ledger entries
    pub fn entry_count(env: Env) -> u64 {
        get_entry_count(&env)
    }

    /// Get a ledger entry by index
    pub fn get_entry(env: Env, index: u64) -> Result<FeeEntry, Error> {
        get_entry(&env, index)
    }
}
