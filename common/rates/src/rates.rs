#![no_std]
use common_constants::{BPS, BPS_PRECISION, SECONDS_PER_YEAR};
use common_structs::{LendingParams, Position};

multiversx_sc::imports!();

/// The InterestRates module prices new loans and accrues simple interest on open ones.
///
/// **Scope**: Utilization snapshot, issuance rate curve and per-position accrual.
///
/// **Goal**: Deterministic integer interest that never depends on call ordering.
#[multiversx_sc::module]
pub trait InterestRates: common_math::SharedMathModule {
    /// Fraction of the pool currently lent out.
    ///
    /// **Formula**:
    /// - `utilization = outstanding * 10000 / (liquid + outstanding)`, truncated.
    /// - An empty pool has zero utilization.
    ///
    /// # Arguments
    /// - `liquid_balance`: Stablecoins available to lend.
    /// - `outstanding`: Sum of principal owed by open positions.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Utilization, BPS-scaled.
    fn get_utilization(
        &self,
        liquid_balance: &ManagedDecimal<Self::Api, NumDecimals>,
        outstanding: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let total = liquid_balance.into_raw_units() + outstanding.into_raw_units();
        if total == 0u64 {
            return self.bps_zero();
        }

        let utilization = outstanding.into_raw_units() * &BigUint::from(BPS) / &total;
        self.to_decimal_bps(utilization)
    }

    /// Annual rate a position is opened at; it stays fixed for the life of the loan.
    ///
    /// **Formula**:
    /// - `rate = base_rate + utilization * risk_premium / 10000`, truncated.
    /// - The result is clamped to `[min_rate, max_rate]`.
    ///
    /// # Arguments
    /// - `utilization`: Pool utilization including the loan being opened, BPS-scaled.
    /// - `params`: Current lending parameters.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Annual rate, BPS-scaled.
    fn calc_issuance_rate(
        &self,
        utilization: &ManagedDecimal<Self::Api, NumDecimals>,
        params: &LendingParams<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let premium = self.mul_div_floor(
            &params.risk_premium_bps,
            utilization.into_raw_units(),
            &BigUint::from(BPS),
        );
        let rate = params.base_rate_bps.clone() + premium;

        let floored = self.get_max(rate, params.min_rate_bps.clone());
        self.get_min(floored, params.max_rate_bps.clone())
    }

    /// Simple interest over `elapsed_seconds`.
    ///
    /// **Formula**:
    /// - `delta = principal * rate_bps * elapsed / (10000 * SECONDS_PER_YEAR)`, truncated.
    ///
    /// Rounding is in the borrower's favor; the pool absorbs the dust.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Interest at the scale of `principal`.
    fn calc_interest_delta(
        &self,
        principal: &ManagedDecimal<Self::Api, NumDecimals>,
        rate_bps: &ManagedDecimal<Self::Api, NumDecimals>,
        elapsed_seconds: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let rate = rate_bps.rescale(BPS_PRECISION);
        let numerator = rate.into_raw_units() * &BigUint::from(elapsed_seconds);
        let denominator = BigUint::from(BPS as u64) * BigUint::from(SECONDS_PER_YEAR);

        self.mul_div_floor(principal, &numerator, &denominator)
    }

    /// Brings a position's interest up to `now`.
    ///
    /// Calling with `now <= last_accrual_at` is a no-op, so replays and out-of-order
    /// triggers never double-charge. The interest owed is recomputed from the last
    /// checkpoint, so the truncation dust of one call is recovered by the next.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Interest added by this call.
    fn accrue_position(
        &self,
        position: &mut Position<Self::Api>,
        now: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let delta = self.pending_interest(position, now);
        if now <= position.last_accrual_at {
            return delta;
        }

        position.interest_accrued = position.interest_accrued.clone() + delta.clone();
        position.last_accrual_at = now;

        delta
    }

    /// Interest that `accrue_position` would add at `now`, without touching the position.
    ///
    /// **Formula**:
    /// - `earned = interest_checkpoint + principal * rate * (now - checkpoint_at) / (10000 * year)`
    /// - `pending = earned - interest_paid - interest_accrued`
    fn pending_interest(
        &self,
        position: &Position<Self::Api>,
        now: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scale = position.principal_owed.scale();
        if now <= position.last_accrual_at || now <= position.checkpoint_at {
            return self.to_decimal(BigUint::zero(), scale);
        }

        let since_checkpoint = self.calc_interest_delta(
            &position.principal_owed,
            &position.interest_rate_bps,
            now - position.checkpoint_at,
        );
        let earned = position.interest_checkpoint.clone() + since_checkpoint;

        self.sub_or_zero(&earned, &position.interest_earned())
    }

    /// Starts a new accrual segment at `now`; called whenever the principal changes.
    ///
    /// The position must already be accrued to `now`.
    fn checkpoint_interest(&self, position: &mut Position<Self::Api>, now: u64) {
        position.interest_checkpoint = position.interest_earned();
        position.checkpoint_at = now;
    }
}
