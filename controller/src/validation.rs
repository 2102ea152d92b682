multiversx_sc::imports!();

use common_constants::{BPS, BPS_PRECISION};
use common_structs::{LendingParams, Position};

use crate::{
    cache::Cache, storage, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_CONCURRENT_MODIFICATION, ERROR_INVALID_LENDING_PARAMS,
    ERROR_INVALID_PAYMENT_TOKEN, ERROR_POOL_INACTIVE, ERROR_POSITION_NOT_FOUND,
    ERROR_POSITION_NOT_OWNED,
};

#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage + common_math::SharedMathModule {
    /// Validates the collateral sent with `openPosition`.
    ///
    /// # Errors
    /// - `ERROR_INVALID_PAYMENT_TOKEN`: Payment is not the collateral token.
    /// - `ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO`: If the amount is zero.
    fn validate_collateral_payment(
        &self,
        cache: &Cache<Self>,
        payment: &EgldOrEsdtTokenPayment<Self::Api>,
    ) {
        require!(
            cache.is_collateral(&payment.token_identifier),
            ERROR_INVALID_PAYMENT_TOKEN
        );
        self.require_amount_greater_than_zero(&payment.amount);
    }

    /// Validates stablecoin payments (repayments and fee deposits).
    fn validate_stable_payment(
        &self,
        cache: &Cache<Self>,
        payment: &EgldOrEsdtTokenPayment<Self::Api>,
    ) {
        require!(
            cache.is_stable(&payment.token_identifier),
            ERROR_INVALID_PAYMENT_TOKEN
        );
        self.require_amount_greater_than_zero(&payment.amount);
    }

    /// Ensures an amount is greater than zero.
    fn require_amount_greater_than_zero(&self, amount: &BigUint) {
        require!(
            amount > &BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );
    }

    /// Stops any state change while an external sale or delivery is in flight.
    fn require_unlocked(&self, cache: &Cache<Self>) {
        require!(!cache.is_locked(), ERROR_CONCURRENT_MODIFICATION);
    }

    fn require_pool_active(&self, cache: &Cache<Self>) {
        require!(cache.pool_active, ERROR_POOL_INACTIVE);
    }

    /// Loads a position or fails with `ERROR_POSITION_NOT_FOUND`.
    fn require_position(&self, position_id: u64) -> Position<Self::Api> {
        let mapper = self.positions(position_id);
        require!(!mapper.is_empty(), ERROR_POSITION_NOT_FOUND);
        mapper.get()
    }

    fn require_position_owner(&self, position: &Position<Self::Api>, caller: &ManagedAddress) {
        require!(position.borrower == *caller, ERROR_POSITION_NOT_OWNED);
    }

    /// Checks a full parameter set before it is stored.
    ///
    /// # Errors
    /// - `ERROR_INVALID_LENDING_PARAMS`: LTV outside `(0, 100%)`, an inverted rate band,
    ///   a base rate outside the band, a zero minimum loan or a cap below the minimum loan.
    fn validate_lending_params(&self, params: &LendingParams<Self::Api>) {
        let bps = BigUint::from(BPS);
        let ltv = params.max_ltv_bps.rescale(BPS_PRECISION);
        let min_rate = params.min_rate_bps.rescale(BPS_PRECISION);
        let max_rate = params.max_rate_bps.rescale(BPS_PRECISION);
        let base_rate = params.base_rate_bps.rescale(BPS_PRECISION);

        require!(
            ltv.into_raw_units() > &BigUint::zero() && ltv.into_raw_units() < &bps,
            ERROR_INVALID_LENDING_PARAMS
        );
        require!(
            min_rate.into_raw_units() <= max_rate.into_raw_units()
                && max_rate.into_raw_units() <= &bps,
            ERROR_INVALID_LENDING_PARAMS
        );
        require!(
            base_rate.into_raw_units() >= min_rate.into_raw_units()
                && base_rate.into_raw_units() <= max_rate.into_raw_units(),
            ERROR_INVALID_LENDING_PARAMS
        );
        require!(
            params.min_principal.into_raw_units() > &BigUint::zero()
                && params.per_user_cap.into_raw_units() >= params.min_principal.into_raw_units(),
            ERROR_INVALID_LENDING_PARAMS
        );
    }
}
