use common_structs::{HealthStatus, Position};

use crate::{cache::Cache, helpers, oracle, storage};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionHealthModule:
    storage::Storage
    + oracle::OracleModule
    + helpers::MathsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Health factor and classification of `position` at `price`.
    ///
    /// # Arguments
    /// - `position`: Position with interest accrued to now.
    /// - `price`: Collateral price, WAD-scaled.
    fn health_at_price(
        &self,
        position: &Position<Self::Api>,
        price: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> (ManagedDecimal<Self::Api, NumDecimals>, HealthStatus) {
        let health_factor = self.compute_health_factor(position, price);
        let status = self.classify_health(&health_factor);
        (health_factor, status)
    }

    /// Evaluates `position` at the transaction's oracle price and logs the result.
    fn check_health(
        &self,
        cache: &mut Cache<Self>,
        position: &Position<Self::Api>,
    ) -> (ManagedDecimal<Self::Api, NumDecimals>, HealthStatus) {
        let price = self.get_collateral_price(cache);
        let (health_factor, status) = self.health_at_price(position, &price);
        self.health_checked_event(position.position_id, &health_factor, status);

        (health_factor, status)
    }
}
