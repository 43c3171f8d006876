#![cfg(test)]

mod tests {
    use crate::{TreasuryContract, TreasuryContractClient};
    use shared::errors::Error;
    use soroban_sdk::{
        testutils::{Address as _, Ledger},
        Address, Env,
    };

    fn create_test_env() -> (Env, Address, Address) {
        let env = Env::default();
        env.ledger().set_timestamp(1000);

        let admin = Address::generate(&env);
        let recorder = Address::generate(&env);

        (env, admin, recorder)
    }

    fn create_client(env: &Env) -> TreasuryContractClient {
        TreasuryContractClient::new(env, &env.register_contract(None, TreasuryContract))
    }

    #[test]
    fn test_initialize() {
        let (env, admin, recorder) = create_test_env();
        let client = create_client(&env);
        env.mock_all_auths();

        client.initialize(&admin, &recorder);

        assert_eq!(client.balance(), 0);
        assert_eq!(client.entry_count(), 0);
    }

    #[test]
    fn test_initialize_twice_fails() {
        let (env, admin, recorder) = create_test_env();
        let client = create_client(&env);
        env.mock_all_auths();

        client.initialize(&admin, &recorder);

        let result = client.try_initialize(&admin, &recorder);
        assert_eq!(result, Err(Ok(Error::AlreadyInit)));
    }

    #[test]
    fn test_record_fee_appends_entry() {
        let (env, admin, recorder) = create_test_env();
        let client = create_client(&env);
        env.mock_all_auths();

        client.initialize(&admin, &recorder);
        env.ledger().set_timestamp(5000);

        client.record_fee(&7, &50);

        assert_eq!(client.balance(), 50);
        assert_eq!(client.total_collected(), 50);
        assert_eq!(client.entry_count(), 1);

        let entry = client.get_entry(&0);
        assert_eq!(entry.pool_id, 7);
        assert_eq!(entry.amount, 50);
        assert_eq!(entry.collected_at, 5000);
    }

    #[test]
    fn test_record_fee_negative_amount_rejected() {
        let (env, admin, recorder) = create_test_env();
        let client = create_client(&env);
        env.mock_all_auths();

        client.initialize(&admin, &recorder);

        let result = client.try_record_fee(&1, &-10);
        assert_eq!(result, Err(Ok(Error::InvalidAmount)));
        assert_eq!(client.entry_count(), 0);
    }

    #[test]
    fn test_record_zero_fee_keeps_provenance() {
        let (env, admin, recorder) = create_test_env();
        let client = create_client(&env);
        env.mock_all_auths();

        client.initialize(&admin, &recorder);
        client.record_fee(&3, &0);

        // A zero-rate deployment still leaves an audit row per funded pool
        assert_eq!(client.balance(), 0);
        assert_eq!(client.entry_count(), 1);
        assert_eq!(client.get_entry(&0).pool_id, 3);
    }

    #[test]
    fn test_withdraw_returns_updated_balance() {
        let (env, admin, recorder) = create_test_env();
        let client = create_client(&env);
        env.mock_all_auths();

        client.initialize(&admin, &recorder);
        client.record_fee(&1, &100);

        let remaining = client.withdraw(&admin, &60);
        assert_eq!(remaining, 40);
        assert_eq!(client.balance(), 40);
        assert_eq!(client.total_withdrawn(), 60);
        assert_eq!(client.total_collected(), 100);
    }

    #[test]
    fn test_withdraw_insufficient_balance() {
        let (env, admin, recorder) = create_test_env();
        let client = create_client(&env);
        env.mock_all_auths();

        client.initialize(&admin, &recorder);
        client.record_fee(&1, &50);

        let result = client.try_withdraw(&admin, &60);
        assert_eq!(result, Err(Ok(Error::InsufBalance)));
        assert_eq!(client.balance(), 50);
    }

    #[test]
    fn test_withdraw_non_admin_unauthorized() {
        let (env, admin, recorder) = create_test_env();
        let client = create_client(&env);
        env.mock_all_auths();

        client.initialize(&admin, &recorder);
        client.record_fee(&1, &100);

        let rando = Address::generate(&env);
        let result = client.try_withdraw(&rando, &10);
        assert_eq!(result, Err(Ok(Error::Unauthorized)));
        assert_eq!(client.balance(), 100);
    }

    #[test]
    fn test_withdraw_invalid_amount() {
        let (env, admin, recorder) = create_test_env();
        let client = create_client(&env);
        env.mock_all_auths();

        client.initialize(&admin, &recorder);
        client.record_fee(&1, &100);

        assert!(client.try_withdraw(&admin, &0).is_err());
        assert!(client.try_withdraw(&admin, &-5).is_err());
        assert_eq!(client.balance(), 100);
    }

    #[test]
    fn test_withdraw_before_initialize() {
        let (env, admin, _) = create_test_env();
        let client = create_client(&env);
        env.mock_all_auths();

        let result = client.try_withdraw(&admin, &10);
        assert_eq!(result, Err(Ok(Error::NotInit)));
    }

    #[test]
    fn test_ledger_entries_survive_withdraw() {
        let (env, admin, recorder) = create_test_env();
        let client = create_client(&env);
        env.mock_all_auths();

        client.initialize(&admin, &recorder);
        client.record_fee(&1, &30);
        client.record_fee(&2, &70);

        client.withdraw(&admin, &100);

        // Withdrawals never delete ledger rows
        assert_eq!(client.balance(), 0);
        assert_eq!(client.entry_count(), 2);
        assert_eq!(client.get_entry(&0).pool_id, 1);
        assert_eq!(client.get_entry(&1).pool_id, 2);
    }

    #[test]
    fn test_transfer_admin_moves_capability() {
        let (env, admin, recorder) = create_test_env();
        let client = create_client(&env);
        env.mock_all_auths();

        client.initialize(&admin, &recorder);
        client.record_fee(&1, &100);

        let new_admin = Address::generate(&env);
        client.transfer_admin(&admin, &new_admin);

        let result = client.try_withdraw(&admin, &10);
        assert_eq!(result, Err(Ok(Error::Unauthorized)));

        let remaining = client.withdraw(&new_admin, &10);
        assert_eq!(remaining, 90);
    }

    #[test]
    fn test_transfer_admin_non_admin_rejected() {
        let (env, admin, recorder) = create_test_env();
        let client = create_client(&env);
        env.mock_all_auths();

        client.initialize(&admin, &recorder);

        let rando = Address::generate(&env);
        let result = client.try_transfer_admin(&rando, &rando);
        assert_eq!(result, Err(Ok(Error::Unauthorized)));
    }
}
