use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    NotInit = 1,
    AlreadyInit = 2,
    Unauthorized = 3,
    InvInput = 4,
    NotFound = 5,

    // Pool errors
    PoolClosed = 6,
    BelowMin = 7,
    GoalExceeded = 8,
    DeadlineNotRch = 9,
    AllocInvalid = 10,

    // Voting errors
    UnknownProp = 11,
    AlreadyVoted = 12,

    // Fee / treasury errors
    InvalidRate = 13,
    InvalidAmount = 14,
    InsufBalance = 15,
}
