multiversx_sc::imports!();

use crate::storage;
use crate::validation;
use common_constants::SECONDS_PER_HOUR;
use common_errors::*;
use common_structs::{LendingParams, OracleConfig};

/// Configuration module for the Exen lending pool.
///
/// This module handles the operator-controlled settings of the pool:
/// - Risk and pricing parameters (LTV, issuance rate band, USD limits)
/// - The price oracle and its staleness bound
/// - The collateral sale venue and the two revenue sinks
/// - The retry budget of failed liquidation sales
///
/// # Security Considerations
/// All endpoints are restricted to the contract owner. Parameter changes only affect
/// positions opened afterwards; the rate of an open position is fixed at issuance.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + validation::ValidationModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Replaces the lending parameters.
    ///
    /// # Arguments
    /// - `max_ltv_bps`: Maximum loan-to-value, in basis points.
    /// - `base_rate_bps`: Issuance rate at zero utilization.
    /// - `risk_premium_bps`: Extra rate added at full utilization.
    /// - `min_rate_bps` / `max_rate_bps`: Clamp band of the issuance rate.
    /// - `per_user_cap`: Largest principal a single borrower can hold, in stablecoin units.
    /// - `min_principal`: Smallest loan, in stablecoin units.
    /// - `activation_threshold`: Liquidity needed before the first loan, in stablecoin units.
    ///
    /// # Errors
    /// - `ERROR_INVALID_LENDING_PARAMS`: See `validate_lending_params`.
    #[only_owner]
    #[endpoint(setLendingParams)]
    fn set_lending_params(
        &self,
        max_ltv_bps: BigUint,
        base_rate_bps: BigUint,
        risk_premium_bps: BigUint,
        min_rate_bps: BigUint,
        max_rate_bps: BigUint,
        per_user_cap: BigUint,
        min_principal: BigUint,
        activation_threshold: BigUint,
    ) {
        let stable_decimals = self.stable_decimals().get();
        let params = LendingParams {
            max_ltv_bps: self.to_decimal_bps(max_ltv_bps),
            base_rate_bps: self.to_decimal_bps(base_rate_bps),
            risk_premium_bps: self.to_decimal_bps(risk_premium_bps),
            min_rate_bps: self.to_decimal_bps(min_rate_bps),
            max_rate_bps: self.to_decimal_bps(max_rate_bps),
            per_user_cap: self.to_decimal(per_user_cap, stable_decimals),
            min_principal: self.to_decimal(min_principal, stable_decimals),
            activation_threshold: self.to_decimal(activation_threshold, stable_decimals),
        };

        self.store_lending_params(&params);
    }

    fn store_lending_params(&self, params: &LendingParams<Self::Api>) {
        self.validate_lending_params(params);

        self.lending_params().set(params);
        self.update_lending_params_event(
            &params.max_ltv_bps,
            &params.base_rate_bps,
            &params.risk_premium_bps,
            &params.min_rate_bps,
            &params.max_rate_bps,
            &params.per_user_cap,
            &params.min_principal,
            &params.activation_threshold,
        );
    }

    /// Points the pool at a price aggregator.
    ///
    /// # Arguments
    /// - `address`: Aggregator contract storing `rounds` per pair.
    /// - `ticker`: Collateral ticker quoted against USD.
    /// - `max_price_stale_seconds`: Rounds at least this old are rejected.
    ///
    /// # Errors
    /// - `ERROR_ORACLE_NOT_SET`: Zero address or not a smart contract.
    /// - `ERROR_INVALID_STALENESS`: Zero or longer than one hour.
    #[only_owner]
    #[endpoint(setOracle)]
    fn set_oracle(
        &self,
        address: ManagedAddress,
        ticker: ManagedBuffer,
        max_price_stale_seconds: u64,
    ) {
        self.store_oracle(OracleConfig {
            address,
            ticker,
            max_price_stale_seconds,
        });
    }

    fn store_oracle(&self, oracle: OracleConfig<Self::Api>) {
        self.require_contract_address(&oracle.address, ERROR_ORACLE_NOT_SET);
        require!(
            oracle.max_price_stale_seconds > 0 && oracle.max_price_stale_seconds <= SECONDS_PER_HOUR,
            ERROR_INVALID_STALENESS
        );

        self.update_oracle_event(
            &oracle.address,
            &oracle.ticker,
            oracle.max_price_stale_seconds,
        );
        self.oracle_config().set(oracle);
    }

    /// Sets the market contract that buys seized collateral.
    #[only_owner]
    #[endpoint(setSaleVenue)]
    fn set_sale_venue(&self, venue: ManagedAddress) {
        self.store_sale_venue(&venue);
    }

    fn store_sale_venue(&self, venue: &ManagedAddress) {
        self.require_contract_address(venue, ERROR_SALE_VENUE_NOT_SET);

        self.sale_venue().set(venue);
        self.update_sale_venue_event(venue);
    }

    /// Sets the destinations of the two revenue halves.
    ///
    /// Payouts already waiting in the outbox are delivered to the new addresses. The two
    /// sinks must be distinct contracts.
    #[only_owner]
    #[endpoint(setRevenueSinks)]
    fn set_revenue_sinks(&self, reward_sink: ManagedAddress, buyback_sink: ManagedAddress) {
        self.store_revenue_sinks(&reward_sink, &buyback_sink);
    }

    fn store_revenue_sinks(&self, reward_sink: &ManagedAddress, buyback_sink: &ManagedAddress) {
        self.require_contract_address(reward_sink, ERROR_REVENUE_SINK_NOT_SET);
        self.require_contract_address(buyback_sink, ERROR_REVENUE_SINK_NOT_SET);
        require!(reward_sink != buyback_sink, ERROR_IDENTICAL_REVENUE_SINKS);

        self.reward_sink().set(reward_sink);
        self.buyback_sink().set(buyback_sink);
        self.update_revenue_sinks_event(reward_sink, buyback_sink);
    }

    #[only_owner]
    #[endpoint(setMaxLiquidationAttempts)]
    fn set_max_liquidation_attempts(&self, attempts: u32) {
        require!(attempts > 0, ERROR_INVALID_ATTEMPTS);
        self.max_liquidation_attempts().set(attempts);
    }

    fn require_contract_address(&self, address: &ManagedAddress, err: &'static [u8]) {
        require!(!address.is_zero(), err);
        require!(self.blockchain().is_smart_contract(address), err);
    }
}
