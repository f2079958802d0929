//! Scenario tests for the account ledger
//! Walks an account through the documented buy/sell/report flows

#[cfg(test)]
mod account_scenario_tests {
    use crate::domain::entities::Account;
    use crate::domain::errors::{LedgerError, LedgerErrorKind};
    use crate::infrastructure::FixedPriceOracle;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    fn alice_with_aapl_at(price: f64) -> (Account, Arc<FixedPriceOracle>) {
        let oracle = Arc::new(FixedPriceOracle::new());
        oracle.set_price("AAPL", price).unwrap();
        let account = Account::open("alice", 1000.0, oracle.clone()).unwrap();
        (account, oracle)
    }

    // ============================================================================
    // TRADING SCENARIOS
    // ============================================================================

    /// Buy 5 AAPL at 150.0 from a 1000.0 account
    #[test]
    fn test_buy_scenario() {
        // Given: alice with 1000.0 and AAPL quoted at 150.0
        let (mut account, _oracle) = alice_with_aapl_at(150.0);

        // When: buying 5 shares
        account.buy_shares("AAPL", 5).unwrap();

        // Then: 750.0 spent, 5 shares held, one record
        assert_eq!(account.cash_balance(), 250.0);
        assert_eq!(
            account.get_holdings(),
            BTreeMap::from([("AAPL".to_string(), 5)])
        );
        assert_eq!(
            account.get_transactions(),
            vec!["Bought 5 shares of AAPL at 150.0 each"]
        );
    }

    /// Continue the buy scenario with a partial sale
    #[test]
    fn test_sell_scenario() {
        // Given: alice holds 5 AAPL with 250.0 cash
        let (mut account, _oracle) = alice_with_aapl_at(150.0);
        account.buy_shares("AAPL", 5).unwrap();

        // When: selling 3 at an unchanged price
        account.sell_shares("AAPL", 3).unwrap();

        // Then: 450.0 credited, 2 shares left, two records
        assert_eq!(account.cash_balance(), 700.0);
        assert_eq!(
            account.get_holdings(),
            BTreeMap::from([("AAPL".to_string(), 2)])
        );
        assert_eq!(account.get_transactions().len(), 2);
    }

    /// Buying more than cash allows is rejected
    #[test]
    fn test_buy_over_balance_scenario() {
        // Given: alice holds 5 AAPL with 250.0 cash
        let (mut account, _oracle) = alice_with_aapl_at(150.0);
        account.buy_shares("AAPL", 5).unwrap();

        // When: trying to buy 10 more (cost 1500.0)
        let result = account.buy_shares("AAPL", 10);

        // Then: rejected, nothing changed
        assert_eq!(
            result,
            Err(LedgerError::InsufficientFunds {
                required: 1500.0,
                available: 250.0
            })
        );
        assert_eq!(account.cash_balance(), 250.0);
        assert_eq!(account.get_holdings().get("AAPL"), Some(&5));
        assert_eq!(account.get_transactions().len(), 1);
    }

    /// Buy then sell the same quantity at an unchanged price
    #[test]
    fn test_round_trip_restores_cash_and_clears_holding() {
        for quantity in [1, 3, 6] {
            let (mut account, _oracle) = alice_with_aapl_at(150.0);
            let before = account.cash_balance();

            account.buy_shares("AAPL", quantity).unwrap();
            account.sell_shares("AAPL", quantity).unwrap();

            assert_eq!(account.cash_balance(), before);
            assert!(account.get_holdings().is_empty());
            assert_eq!(account.get_transactions().len(), 2);
        }
    }

    /// A sale is priced at the quote current at sale time
    #[test]
    fn test_sale_uses_current_quote() {
        // Given: 5 AAPL bought at 150.0
        let (mut account, oracle) = alice_with_aapl_at(150.0);
        account.buy_shares("AAPL", 5).unwrap();

        // When: the quote moves to 200.0 and all shares are sold
        oracle.set_price("AAPL", 200.0).unwrap();
        account.sell_shares("AAPL", 5).unwrap();

        // Then: proceeds use the new price
        assert_eq!(account.cash_balance(), 1250.0);
        assert_eq!(
            account.get_transactions()[1],
            "Sold 5 shares of AAPL at 200.0 each"
        );
        assert_eq!(account.get_profit_or_loss().unwrap().value(), 250.0);
    }

    /// Holdings are marked to market in the portfolio value
    #[test]
    fn test_portfolio_value_tracks_quotes() {
        let (mut account, oracle) = alice_with_aapl_at(150.0);
        oracle.set_price("TSLA", 100.0).unwrap();
        account.buy_shares("AAPL", 2).unwrap();
        account.buy_shares("TSLA", 3).unwrap();
        assert_eq!(account.get_portfolio_value().unwrap(), 1000.0);

        oracle.set_price("AAPL", 100.0).unwrap();
        assert_eq!(account.get_portfolio_value().unwrap(), 900.0);
        assert!(account.get_profit_or_loss().unwrap().is_loss());
    }

    /// A held symbol losing its quote makes valuation fail
    #[test]
    fn test_portfolio_value_propagates_missing_quote() {
        let (mut account, oracle) = alice_with_aapl_at(150.0);
        account.buy_shares("AAPL", 1).unwrap();

        oracle.remove_price("AAPL");

        let err = account.get_portfolio_value().unwrap_err();
        assert_eq!(err.kind(), LedgerErrorKind::PriceUnavailable);
        assert_eq!(
            account.get_profit_or_loss().unwrap_err().kind(),
            LedgerErrorKind::PriceUnavailable
        );
    }

    /// Selling an unheld symbol fails before any price lookup
    #[test]
    fn test_sell_unheld_symbol_skips_oracle() {
        // Given: no quote exists for MSFT
        let (mut account, _oracle) = alice_with_aapl_at(150.0);

        // When: selling MSFT
        let err = account.sell_shares("MSFT", 1).unwrap_err();

        // Then: the share check fires, not the price lookup
        assert_eq!(err.kind(), LedgerErrorKind::InsufficientShares);
    }

    // ============================================================================
    // PROFIT / LOSS BASELINE
    // ============================================================================

    /// Fresh account breaks even; a deposit shows up as profit
    ///
    /// Documented behavior, not necessarily desired: the baseline is the
    /// creation-time deposit only, so cash added later counts as profit.
    #[test]
    fn test_profit_or_loss_baseline_is_initial_deposit_only() {
        let (mut account, _oracle) = alice_with_aapl_at(150.0);
        assert_eq!(account.get_profit_or_loss().unwrap().value(), 0.0);

        account.deposit(500.0).unwrap();

        assert_eq!(account.get_profit_or_loss().unwrap().value(), 500.0);
        assert_eq!(account.initial_deposit(), 1000.0);
    }

    /// Documented behavior, not necessarily desired: withdrawals show as loss
    #[test]
    fn test_withdrawal_counts_as_loss() {
        let (mut account, _oracle) = alice_with_aapl_at(150.0);
        account.withdraw(400.0).unwrap();
        assert_eq!(account.get_profit_or_loss().unwrap().value(), -400.0);
    }

    // ============================================================================
    // SNAPSHOT ISOLATION
    // ============================================================================

    /// Returned holdings are copies
    #[test]
    fn test_holdings_snapshot_not_aliased() {
        let (mut account, _oracle) = alice_with_aapl_at(150.0);
        account.buy_shares("AAPL", 2).unwrap();

        let mut snapshot = account.get_holdings();
        account.buy_shares("AAPL", 1).unwrap();
        snapshot.insert("FAKE".to_string(), 99);

        assert_eq!(snapshot.get("AAPL"), Some(&2));
        assert_eq!(account.get_holdings().get("AAPL"), Some(&3));
        assert!(!account.get_holdings().contains_key("FAKE"));
    }

    /// Returned transaction lists are copies
    #[test]
    fn test_transactions_snapshot_not_aliased() {
        let (mut account, _oracle) = alice_with_aapl_at(150.0);
        account.deposit(10.0).unwrap();

        let mut snapshot = account.get_transactions();
        account.deposit(20.0).unwrap();
        snapshot.clear();

        assert_eq!(account.get_transactions(), vec!["Deposited: 10.0", "Deposited: 20.0"]);
        assert_eq!(account.ledger_entries().len(), 2);
    }

    /// Entries stay in chronological order
    #[test]
    fn test_ledger_entries_are_chronological() {
        let (mut account, _oracle) = alice_with_aapl_at(150.0);
        account.deposit(100.0).unwrap();
        account.buy_shares("AAPL", 1).unwrap();
        account.withdraw(50.0).unwrap();
        account.sell_shares("AAPL", 1).unwrap();

        let entries = account.ledger_entries();
        assert!(entries
            .windows(2)
            .all(|pair| pair[0].recorded_at <= pair[1].recorded_at));
        assert_eq!(
            account.get_transactions(),
            vec![
                "Deposited: 100.0",
                "Bought 1 shares of AAPL at 150.0 each",
                "Withdrew: 50.0",
                "Sold 1 shares of AAPL at 150.0 each",
            ]
        );
    }
}
