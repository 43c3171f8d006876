use soroban_sdk::{symbol_short, Symbol};

// pool-launch
pub const POOL_CREATED: Symbol = symbol_short!("p_create");
pub const CONTRIBUTED: Symbol = symbol_short!("contrib");
pub const ALLOC_SET: Symbol = symbol_short!("alloc_set");
pub const PROP_CREATED: Symbol = symbol_short!("p_propose");
pub const VOTE_CAST: Symbol = symbol_short!("vote_cast");
pub const POOL_FUNDED: Symbol = symbol_short!("p_funded");
pub const POOL_CLOSED: Symbol = symbol_short!("p_closed");

// treasury
pub const FEE_RECORDED: Symbol = symbol_short!("fee_rec");
pub const WITHDRAWN: Symbol = symbol_short!("withdrawn");
pub const ADMIN_CHANGED: Symbol = symbol_short!("adm_chg");
