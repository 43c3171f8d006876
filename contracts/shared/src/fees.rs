use crate::constants::MAX_BASIS_POINTS;
use crate::errors::Error;
use crate::types::Amount;

/// Split a contribution total into `(fee, net)` at the given rate.
///
/// The fee is `amount * fee_basis_points / 10_000` using integer
/// division rounded down; the division remainder stays with `net`, so
/// `fee + net == amount` always holds. Pure function, no shared state.
///
/// # Errors
/// * `InvalidRate` - rate above 10_000 bps (deployment bug)
/// * `InvalidAmount` - negative amount or multiply overflow
pub fn compute_fee(amount: Amount, fee_basis_points: u32) -> Result<(Amount, Amount), Error> {
    if fee_basis_points > MAX_BASIS_POINTS {
        return Err(Error::InvalidRate);
    }
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }

    let fee = amount
        .checked_mul(fee_basis_points as Amount)
        .ok_or(Error::InvalidAmount)?
        / MAX_BASIS_POINTS as Amount;

    Ok((fee, amount - fee))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_and_net_conserve_amount() {
        for bps in [0u32, 1, 250, 500, 9_999, 10_000] {
            for amount in [0i128, 1, 10, 999, 1_000, 123_456_789] {
                let (fee, net) = compute_fee(amount, bps).unwrap();
                assert_eq!(fee + net, amount);
                assert!(fee <= amount);
                assert!(fee >= 0);
            }
        }
    }

    #[test]
    fn fee_rounds_down_remainder_stays_with_net() {
        // 999 * 500 / 10_000 = 49.95 -> 49
        let (fee, net) = compute_fee(999, 500).unwrap();
        assert_eq!(fee, 49);
        assert_eq!(net, 950);
    }

    #[test]
    fn zero_rate_takes_no_fee() {
        let (fee, net) = compute_fee(1_000, 0).unwrap();
        assert_eq!(fee, 0);
        assert_eq!(net, 1_000);
    }

    #[test]
    fn full_rate_takes_everything() {
        let (fee, net) = compute_fee(1_000, 10_000).unwrap();
        assert_eq!(fee, 1_000);
        assert_eq!(net, 0);
    }

    #[test]
    fn rate_above_max_rejected() {
        assert_eq!(compute_fee(1_000, 10_001), Err(Error::InvalidRate));
    }

    #[test]
    fn negative_amount_rejected() {
        assert_eq!(compute_fee(-1, 500), Err(Error::InvalidAmount));
    }

    #[test]
    fn five_percent_of_round_goal() {
        let (fee, net) = compute_fee(1_000, 500).unwrap();
        assert_eq!(fee, 50);
        assert_eq!(net, 950);
    }
}
