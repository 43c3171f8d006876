use shared::constants::PERCENT_TOTAL;
use shared::errors::Error;
use shared::types::{AllocationEntry, Amount};
use soroban_sdk::Vec;

/// Validate pool creation parameters against the current ledger time
pub fn validate_pool_params(
    goal: Amount,
    min_ticket: Amount,
    deadline: u64,
    now: u64,
) -> Result<(), Error> {
    if goal <= 0 || min_ticket <= 0 || min_ticket > goal {
        return Err(Error::InvInput);
    }
    if deadline <= now {
        return Err(Error::InvInput);
    }
    Ok(())
}

/// Validate an allocation table and return its percentage sum.
///
/// Percentages are whole percents; any entry above 100 or a sum above
/// 100 is rejected. A sum below 100 is allowed while the pool is
/// active and only blocks the funded transition.
pub fn validate_allocation(entries: &Vec<AllocationEntry>) -> Result<u32, Error> {
    let mut sum: u32 = 0;
    for entry in entries.iter() {
        if entry.percentage > PERCENT_TOTAL {
            return Err(Error::AllocInvalid);
        }
        sum = sum.checked_add(entry.percentage).ok_or(Error::AllocInvalid)?;
        if sum > PERCENT_TOTAL {
            return Err(Error::AllocInvalid);
        }
    }
    Ok(sum)
}
