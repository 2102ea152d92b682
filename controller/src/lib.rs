#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod config;
pub mod helpers;
pub mod oracle;
pub mod positions;
pub mod revenue;
pub mod storage;
pub mod validation;
pub mod views;

use cache::Cache;
pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

use common_constants::{
    DEFAULT_ACTIVATION_THRESHOLD_USD, DEFAULT_BASE_RATE_BPS, DEFAULT_MAX_LIQUIDATION_ATTEMPTS,
    DEFAULT_MAX_LTV_BPS, DEFAULT_MAX_PRICE_STALE_SECONDS, DEFAULT_MAX_RATE_BPS,
    DEFAULT_MIN_PRINCIPAL_USD, DEFAULT_MIN_RATE_BPS, DEFAULT_PER_USER_CAP_USD,
    DEFAULT_RISK_PREMIUM_BPS, WAD_PRECISION,
};

#[multiversx_sc::contract]
pub trait Controller:
    positions::ledger::PositionLedgerModule
    + positions::accrual::PositionAccrualModule
    + positions::health::PositionHealthModule
    + positions::liquidation::PositionLiquidationModule
    + revenue::RevenueModule
    + config::ConfigModule
    + common_events::EventsModule
    + storage::Storage
    + oracle::OracleModule
    + validation::ValidationModule
    + views::ViewsModule
    + helpers::MathsModule
    + helpers::sale::SaleModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + multiversx_sc_modules::pause::PauseModule
{
    /// Initializes the lending pool with its two assets and collaborators.
    ///
    /// # Arguments
    /// - `collateral_token`: Native asset accepted as collateral.
    /// - `collateral_decimals`: Decimals of `collateral_token`.
    /// - `stable_token`: USD stablecoin lent out.
    /// - `stable_decimals`: Decimals of `stable_token`.
    /// - `oracle_address`: Price aggregator quoting `collateral_ticker`/USD.
    /// - `collateral_ticker`: Ticker of the collateral on the aggregator.
    /// - `sale_venue`: Market used to sell seized collateral.
    /// - `reward_sink` / `buyback_sink`: Destinations of the revenue split.
    ///
    /// Lending parameters start at the protocol defaults (60% LTV, 8% base rate,
    /// 5% to 18% rate band, 50,000 USD activation threshold).
    #[init]
    fn init(
        &self,
        collateral_token: EgldOrEsdtTokenIdentifier,
        collateral_decimals: usize,
        stable_token: EgldOrEsdtTokenIdentifier,
        stable_decimals: usize,
        oracle_address: ManagedAddress,
        collateral_ticker: ManagedBuffer,
        sale_venue: ManagedAddress,
        reward_sink: ManagedAddress,
        buyback_sink: ManagedAddress,
    ) {
        require!(
            collateral_decimals <= WAD_PRECISION && stable_decimals <= WAD_PRECISION,
            ERROR_INVALID_DECIMALS
        );
        require!(collateral_token.is_valid(), ERROR_INVALID_PAYMENT_TOKEN);
        require!(stable_token.is_valid(), ERROR_INVALID_PAYMENT_TOKEN);
        require!(collateral_token != stable_token, ERROR_INVALID_PAYMENT_TOKEN);

        self.collateral_token().set(&collateral_token);
        self.collateral_decimals().set(collateral_decimals);
        self.stable_token().set(&stable_token);
        self.stable_decimals().set(stable_decimals);

        let stable_zero = self.to_decimal(BigUint::zero(), stable_decimals);
        self.liquid_balance().set(&stable_zero);
        self.total_principal_outstanding().set(&stable_zero);
        self.total_disbursed().set(&stable_zero);
        self.total_bad_debt().set(&stable_zero);
        self.total_revenue().set(&stable_zero);
        self.reward_dispatched().set(&stable_zero);
        self.buyback_dispatched().set(&stable_zero);
        self.total_collateral_locked()
            .set(self.to_decimal(BigUint::zero(), collateral_decimals));

        self.store_lending_params(&LendingParams {
            max_ltv_bps: self.to_decimal_bps(BigUint::from(DEFAULT_MAX_LTV_BPS)),
            base_rate_bps: self.to_decimal_bps(BigUint::from(DEFAULT_BASE_RATE_BPS)),
            risk_premium_bps: self.to_decimal_bps(BigUint::from(DEFAULT_RISK_PREMIUM_BPS)),
            min_rate_bps: self.to_decimal_bps(BigUint::from(DEFAULT_MIN_RATE_BPS)),
            max_rate_bps: self.to_decimal_bps(BigUint::from(DEFAULT_MAX_RATE_BPS)),
            per_user_cap: self.whole_units(DEFAULT_PER_USER_CAP_USD, stable_decimals),
            min_principal: self.whole_units(DEFAULT_MIN_PRINCIPAL_USD, stable_decimals),
            activation_threshold: self
                .whole_units(DEFAULT_ACTIVATION_THRESHOLD_USD, stable_decimals),
        });
        self.store_oracle(OracleConfig {
            address: oracle_address,
            ticker: collateral_ticker,
            max_price_stale_seconds: DEFAULT_MAX_PRICE_STALE_SECONDS,
        });
        self.store_sale_venue(&sale_venue);
        self.store_revenue_sinks(&reward_sink, &buyback_sink);
        self.max_liquidation_attempts()
            .set(DEFAULT_MAX_LIQUIDATION_ATTEMPTS);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Opens a loan against the collateral sent with the call.
    ///
    /// # Arguments
    /// - `requested_principal`: Stablecoins to borrow, in minor units.
    ///
    /// # Payment
    /// - Collateral token only.
    ///
    /// # Returns
    /// - The new `Position`; the principal is transferred to the caller.
    #[payable]
    #[endpoint(openPosition)]
    fn open_position_endpoint(&self, requested_principal: BigUint) -> Position<Self::Api> {
        self.require_not_paused();
        let payment = self.call_value().egld_or_single_esdt();
        let caller = self.blockchain().get_caller();

        let mut cache = Cache::new(self);
        self.require_unlocked(&cache);
        self.validate_collateral_payment(&cache, &payment);
        self.require_amount_greater_than_zero(&requested_principal);

        let collateral = cache.to_collateral(payment.amount.clone());
        let principal = cache.to_stable(requested_principal);
        let position = self.open_position(&mut cache, &caller, &collateral, &principal);

        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&cache.stable_token, 0, principal.into_raw_units())
            .transfer();

        position
    }

    /// Repays part or all of a loan; interest is settled before principal.
    ///
    /// # Payment
    /// - Stablecoin only, at most the total owed.
    #[payable]
    #[endpoint(repay)]
    fn repay(&self, position_id: u64) -> RepaymentResult<Self::Api> {
        let payment = self.call_value().egld_or_single_esdt();
        let caller = self.blockchain().get_caller();

        let mut cache = Cache::new(self);
        self.require_unlocked(&cache);
        self.validate_stable_payment(&cache, &payment);

        let amount = cache.to_stable(payment.amount.clone());
        self.repay_position(&mut cache, &caller, position_id, &amount)
    }

    /// Liquidates a position whose health factor is below 1.0. Open to anyone.
    #[endpoint(liquidate)]
    fn liquidate(&self, position_id: u64) -> LiquidationOutcome<Self::Api> {
        let mut cache = Cache::new(self);
        self.require_unlocked(&cache);

        self.liquidate_single(&mut cache, position_id)
    }

    /// Evaluates open positions at one oracle price and liquidates the unhealthy ones.
    ///
    /// With `opt_max_items` the pass covers that many positions, resuming where the
    /// previous bounded pass stopped; without it every open position is evaluated.
    /// When the oracle cannot be read the pass does nothing beyond an
    /// `oracle_unavailable` event.
    ///
    /// # Returns
    /// - `(position_id, outcome)` for each liquidation attempted.
    #[endpoint(checkAndLiquidateAll)]
    fn check_and_liquidate_all(
        &self,
        opt_max_items: OptionalValue<usize>,
    ) -> MultiValueEncoded<MultiValue2<u64, LiquidationOutcome<Self::Api>>> {
        let mut cache = Cache::new(self);
        self.require_unlocked(&cache);

        match self.try_get_collateral_price(&mut cache) {
            Ok(price) => self.liquidate_all(&mut cache, &price, opt_max_items.into_option()),
            Err(_) => {
                self.oracle_unavailable_event(&cache.oracle.address, cache.timestamp);
                MultiValueEncoded::new()
            },
        }
    }

    /// Resets the retry budget of an escalated liquidation and sells again.
    #[only_owner]
    #[endpoint(retryLiquidation)]
    fn retry_liquidation(&self, position_id: u64) -> LiquidationOutcome<Self::Api> {
        let mut cache = Cache::new(self);
        self.require_unlocked(&cache);

        self.retry_escalated(&mut cache, position_id)
    }

    /// Accrues interest on active positions, in round-robin batches of `opt_max_items`
    /// or all at once when no limit is given.
    #[endpoint(accrueAll)]
    fn accrue_all(&self, opt_max_items: OptionalValue<usize>) -> usize {
        let cache = Cache::new(self);
        self.require_unlocked(&cache);

        self.accrue_all_positions(cache.timestamp, opt_max_items.into_option())
    }

    /// Accrues interest on the given positions; non-active ones are skipped.
    #[endpoint(accruePositions)]
    fn accrue_positions(&self, position_ids: MultiValueEncoded<u64>) -> usize {
        let cache = Cache::new(self);
        self.require_unlocked(&cache);

        let mut processed = 0;
        for position_id in position_ids {
            if self.accrue_stored_position(position_id, cache.timestamp) {
                processed += 1;
            }
        }
        processed
    }

    /// Adds stablecoin liquidity to the pool.
    ///
    /// The pool activates, once and for good, when its total liquidity reaches the
    /// activation threshold.
    #[payable]
    #[endpoint(depositFees)]
    fn deposit_fees(&self) {
        let payment = self.call_value().egld_or_single_esdt();
        let caller = self.blockchain().get_caller();

        let mut cache = Cache::new(self);
        self.require_unlocked(&cache);
        self.validate_stable_payment(&cache, &payment);

        let amount = cache.to_stable(payment.amount.clone());
        cache.liquid_balance = cache.liquid_balance.clone() + amount.clone();
        self.fees_deposited_event(&caller, &amount, &cache.liquid_balance);

        let total_liquidity =
            cache.liquid_balance.clone() + cache.total_principal_outstanding.clone();
        if !cache.pool_active && total_liquidity >= cache.params.activation_threshold {
            cache.pool_active = true;
            self.pool_activated_event(&total_liquidity, cache.timestamp);
        }
    }

    /// Delivers up to `max_items` queued revenue payouts to the sinks.
    #[endpoint(dispatchRevenue)]
    fn dispatch_revenue(&self, max_items: usize) -> usize {
        let cache = Cache::new(self);
        self.require_unlocked(&cache);

        self.dispatch_pending(&cache.stable_token, max_items)
    }
}
