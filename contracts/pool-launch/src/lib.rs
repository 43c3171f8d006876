#![no_std]

use shared::{
    constants::{DEFAULT_VOTE_WEIGHT, MAX_BASIS_POINTS, PERCENT_TOTAL},
    errors::Error,
    events::*,
    fees::compute_fee,
    types::{
        AllocationEntry, Amount, DeploymentConfig, PoolInfo, PoolMetadata, PoolStatus,
        ProposalInfo,
    },
};
use soroban_sdk::{contract, contractimpl, vec, Address, Env, IntoVal, String, Symbol, Val, Vec};

mod storage;
mod validation;


use storage::*;

#[contract]
pub struct PoolLaunchContract;

#[contractimpl]
impl PoolLaunchContract {
    /// Initialize the factory with its shared deployment parameters.
    /// Every pool created afterwards carries an immutable copy of them.
    ///
    /// # Arguments
    /// * `admin` - Deployer authorizing the configuration
    /// * `treasury` - Treasury contract receiving platform fees
    /// * `token` - Accepted token identifier for contributions
    /// * `fee_basis_points` - Platform fee rate, 0..=10_000
    pub fn initialize(
        env: Env,
        admin: Address,
        treasury: Address,
        token: Address,
        fee_basis_points: u32,
    ) -> Result<(), Error> {
        admin.require_auth();

        if has_config(&env) {
            return Err(Error::AlreadyInit);
        }
        if fee_basis_points > MAX_BASIS_POINTS {
            return Err(Error::InvalidRate);
        }

        let config = DeploymentConfig {
            treasury,
            token,
            fee_basis_points,
        };
        set_config(&env, &config);

        Ok(())
    }

    /// Create a new pool and register it under a fresh id.
    ///
    /// The factory never mutates a pool after creation; all further
    /// interaction goes through the pool's own operations keyed by id.
    ///
    /// # Arguments
    /// * `manager` - Display identity of the pool's creator
    /// * `goal` - Target amount, must be positive
    /// * `min_ticket` - Smallest accepted contribution, 0 < min_ticket <= goal
    /// * `deadline` - Ledger timestamp, strictly in the future
    /// * `metadata` - Descriptive risk/industry/stage tags
    pub fn create_pool(
        env: Env,
        manager: Address,
        goal: Amount,
        min_ticket: Amount,
        deadline: u64,
        metadata: PoolMetadata,
    ) -> Result<u64, Error> {
        manager.require_auth();

        let config = get_config(&env)?;
        validation::validate_pool_params(goal, min_ticket, deadline, env.ledger().timestamp())?;

        let pool_id = get_pool_count(&env);
        let pool = PoolInfo {
            id: pool_id,
            manager: manager.clone(),
            goal,
            current_size: 0,
            min_ticket,
            contributors_count: 0,
            deadline,
            status: PoolStatus::Active,
            fee_basis_points: config.fee_basis_points,
            treasury: config.treasury,
            token: config.token,
            metadata,
        };

        set_pool(&env, pool_id, &pool);
        set_pool_count(&env, pool_id + 1);

        env.events()
            .publish((POOL_CREATED,), (pool_id, manager, goal, deadline));

        Ok(pool_id)
    }

    /// Contribute to an active pool.
    ///
    /// Rejects the whole amount when it would overshoot the goal; the
    /// caller may retry with a smaller amount. `contributors_count`
    /// tracks distinct identities, not transactions.
    ///
    /// # Errors
    /// * `PoolClosed` - Pool is terminal or past its deadline
    /// * `BelowMin` - Amount under the pool's minimum ticket
    /// * `GoalExceeded` - Amount would push the pool above its goal
    pub fn contribute(
        env: Env,
        pool_id: u64,
        contributor: Address,
        amount: Amount,
    ) -> Result<(), Error> {
        contributor.require_auth();

        let mut pool = get_pool(&env, pool_id)?;

        if pool.status != PoolStatus::Active {
            return Err(Error::PoolClosed);
        }
        if env.ledger().timestamp() >= pool.deadline {
            return Err(Error::PoolClosed);
        }
        if amount < pool.min_ticket {
            return Err(Error::BelowMin);
        }

        let new_size = pool
            .current_size
            .checked_add(amount)
            .ok_or(Error::InvInput)?;
        if new_size > pool.goal {
            return Err(Error::GoalExceeded);
        }

        // First contribution from this identity grows the distinct count
        let previous = get_contribution(&env, pool_id, &contributor);
        if previous == 0 {
            pool.contributors_count += 1;
        }

        set_contribution(&env, pool_id, &contributor, previous + amount);
        pool.current_size = new_size;
        set_pool(&env, pool_id, &pool);

        env.events()
            .publish((CONTRIBUTED,), (pool_id, contributor, amount, new_size));

        Ok(())
    }

    /// Replace a pool's allocation table wholesale.
    ///
    /// Callers resubmit the full table; entries are not additive. A
    /// partial sum is accepted while active but blocks the funded
    /// transition until it reaches exactly 100.
    pub fn set_allocation(
        env: Env,
        pool_id: u64,
        entries: Vec<AllocationEntry>,
    ) -> Result<(), Error> {
        let pool = get_pool(&env, pool_id)?;
        pool.manager.require_auth();

        if pool.status != PoolStatus::Active {
            return Err(Error::PoolClosed);
        }

        let sum = validation::validate_allocation(&entries)?;
        set_allocation(&env, pool_id, &entries);

        env.events().publish((ALLOC_SET,), (pool_id, sum));

        Ok(())
    }

    /// Create an allocation proposal on an active pool. Manager only.
    ///
    /// `total_votes` is frozen at the pool's current distinct
    /// contributor count so vote weight stays deterministic.
    pub fn create_proposal(env: Env, pool_id: u64, title: String) -> Result<u32, Error> {
        let pool = get_pool(&env, pool_id)?;
        pool.manager.require_auth();

        if pool.status != PoolStatus::Active {
            return Err(Error::PoolClosed);
        }

        let proposal_id = get_proposal_count(&env, pool_id);
        let proposal = ProposalInfo {
            id: proposal_id,
            title,
            votes: 0,
            total_votes: pool.contributors_count,
        };

        set_proposal(&env, pool_id, proposal_id, &proposal);
        set_proposal_count(&env, pool_id, proposal_id + 1);

        env.events()
            .publish((PROP_CREATED,), (pool_id, proposal_id, pool.contributors_count));

        Ok(proposal_id)
    }

    /// Cast a vote on a proposal. One ballot per identity.
    ///
    /// Unweighted voting (weight 1) is the default; a `weight` override
    /// enables weighted deployments. A supporting vote adds the weight
    /// to the proposal's tally; a non-supporting vote only consumes the
    /// identity's ballot.
    ///
    /// # Errors
    /// * `UnknownProp` - No such proposal on this pool
    /// * `AlreadyVoted` - Identity already voted on this proposal
    /// * `InvInput` - Weighted vote would push the tally past `total_votes`
    pub fn cast_vote(
        env: Env,
        pool_id: u64,
        proposal_id: u32,
        voter: Address,
        support: bool,
        weight: Option<u32>,
    ) -> Result<(), Error> {
        voter.require_auth();

        let pool = get_pool(&env, pool_id)?;
        if pool.status != PoolStatus::Active {
            return Err(Error::PoolClosed);
        }

        let mut proposal = get_proposal(&env, pool_id, proposal_id)?;

        if has_voted(&env, pool_id, proposal_id, &voter) {
            return Err(Error::AlreadyVoted);
        }

        if support {
            let w = weight.unwrap_or(DEFAULT_VOTE_WEIGHT);
            let tally = proposal.votes.checked_add(w).ok_or(Error::InvInput)?;
            if tally > proposal.total_votes {
                return Err(Error::InvInput);
            }
            proposal.votes = tally;
        }

        set_voted(&env, pool_id, proposal_id, &voter);
        set_proposal(&env, pool_id, proposal_id, &proposal);

        env.events()
            .publish((VOTE_CAST,), (pool_id, proposal_id, voter, support));

        Ok(())
    }

    /// Resolve a pool's terminal status once its deadline has passed.
    ///
    /// Funded when the goal was reached, closed otherwise. Funding
    /// requires the allocation table to sum to exactly 100; a rejected
    /// finalize is retryable after a corrective `set_allocation`. On
    /// the funded transition the platform fee is computed against the
    /// raised amount and recorded in the treasury; the net amount is
    /// handed off through the `POOL_FUNDED` event. Calling again on a
    /// terminal pool is a no-op success returning the settled status,
    /// so retries never double-charge the fee.
    pub fn finalize(env: Env, pool_id: u64) -> Result<PoolStatus, Error> {
        let mut pool = get_pool(&env, pool_id)?;

        // Idempotent on terminal pools
        if pool.status != PoolStatus::Active {
            return Ok(pool.status);
        }

        if env.ledger().timestamp() < pool.deadline {
            return Err(Error::DeadlineNotRch);
        }

        if pool.current_size >= pool.goal {
            let entries = get_allocation(&env, pool_id);
            let sum = validation::validate_allocation(&entries)?;
            if sum != PERCENT_TOTAL {
                return Err(Error::AllocInvalid);
            }

            let (fee, net) = compute_fee(pool.current_size, pool.fee_basis_points)?;

            let args: Vec<Val> = vec![&env, pool.id.into_val(&env), fee.into_val(&env)];
            env.invoke_contract::<()>(&pool.treasury, &Symbol::new(&env, "record_fee"), args);

            pool.status = PoolStatus::Funded;
            set_pool(&env, pool_id, &pool);

            env.events().publish((POOL_FUNDED,), (pool_id, fee, net));
        } else {
            pool.status = PoolStatus::Closed;
            set_pool(&env, pool_id, &pool);

            // Per-contributor amounts stay queryable for the refund executor
            env.events()
                .publish((POOL_CLOSED,), (pool_id, pool.current_size));
        }

        Ok(pool.status)
    }

    /// Get pool state
    pub fn get_pool(env: Env, pool_id: u64) -> Result<PoolInfo, Error> {
        get_pool(&env, pool_id)
    }

    /// Get a contributor's cumulative amount in a pool (0 when none)
    pub fn get_contribution(env: Env, pool_id: u64, contributor: Address) -> Amount {
        get_contribution(&env, pool_id, &contributor)
    }

    /// Get a pool's allocation table
    pub fn get_allocation(env: Env, pool_id: u64) -> Vec<AllocationEntry> {
        get_allocation(&env, pool_id)
    }

    /// Get a proposal on a pool
    pub fn get_proposal(env: Env, pool_id: u64, proposal_id: u32) -> Result<ProposalInfo, Error> {
        get_proposal(&env, pool_id, proposal_id)
    }

    /// Get the number of proposals created on a pool
    pub fn get_proposal_count(env: Env, pool_id: u64) -> u32 {
        get_proposal_count(&env, pool_id)
    }
}
