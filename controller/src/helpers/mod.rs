pub mod sale;

use common_constants::{BPS, HEALTH_SAFE_THRESHOLD_WAD, WAD_PRECISION};
use common_errors::ERROR_ZERO_DEBT;
use common_structs::{HealthStatus, LendingParams, Position};

multiversx_sc::imports!();

/// # Controller Math Helpers Module
///
/// Position-level valuation on top of the shared floor arithmetic.
///
/// ## Health Factor
/// - **Formula**: `health_factor = collateral_amount * price / total_owed`
/// - **Precision**: WAD (10^18) ratio, truncated
/// - **Zero debt**: undefined, callers must check `has_debt` first
///
/// ## Borrow Limit
/// - **Formula**: `max_borrow = collateral_value_usd * max_ltv_bps / 10000`
/// - Collateral value is taken at the stablecoin scale and truncated before the LTV is applied
///
/// ## Classification
/// - `Safe` above 1.5, `Warning` in `[1.0, 1.5]`, `Liquidatable` below 1.0
#[multiversx_sc::module]
pub trait MathsModule: common_math::SharedMathModule {
    /// USD value of `collateral_amount` at `price`, truncated to `precision`.
    ///
    /// # Arguments
    /// - `collateral_amount`: Collateral at the collateral token scale.
    /// - `price`: USD per whole collateral token, WAD-scaled.
    /// - `precision`: Scale of the result.
    fn get_collateral_usd_value(
        &self,
        collateral_amount: &ManagedDecimal<Self::Api, NumDecimals>,
        price: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.mul_floor(collateral_amount, price, precision)
    }

    /// Maximum principal `collateral_amount` can back at `price`.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Borrow limit at `stable_decimals`.
    fn compute_max_borrow(
        &self,
        collateral_amount: &ManagedDecimal<Self::Api, NumDecimals>,
        price: &ManagedDecimal<Self::Api, NumDecimals>,
        params: &LendingParams<Self::Api>,
        stable_decimals: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let collateral_value =
            self.get_collateral_usd_value(collateral_amount, price, stable_decimals);

        self.mul_div_floor(
            &collateral_value,
            params.max_ltv_bps.into_raw_units(),
            &BigUint::from(BPS),
        )
    }

    /// Health factor of a position with outstanding debt.
    ///
    /// # Arguments
    /// - `position`: Position whose interest is already accrued to now.
    /// - `price`: USD per whole collateral token, WAD-scaled.
    ///
    /// # Returns
    /// - Health factor in WAD precision.
    fn compute_health_factor(
        &self,
        position: &Position<Self::Api>,
        price: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        require!(position.has_debt(), ERROR_ZERO_DEBT);

        let collateral_value =
            self.get_collateral_usd_value(&position.collateral_amount, price, WAD_PRECISION);
        let debt = position.total_owed().rescale(WAD_PRECISION);

        self.div_floor(&collateral_value, &debt, WAD_PRECISION)
    }

    fn classify_health(
        &self,
        health_factor: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> HealthStatus {
        if self.is_liquidatable(health_factor) {
            HealthStatus::Liquidatable
        } else if *health_factor > self.to_decimal_wad(BigUint::from(HEALTH_SAFE_THRESHOLD_WAD)) {
            HealthStatus::Safe
        } else {
            HealthStatus::Warning
        }
    }

    /// A position can be liquidated once its health factor drops strictly below 1.0.
    fn is_liquidatable(&self, health_factor: &ManagedDecimal<Self::Api, NumDecimals>) -> bool {
        *health_factor < self.wad()
    }
}
