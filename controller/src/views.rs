use common_structs::{HealthStatus, PoolStatus, Position, RevenuePayout};

use crate::{helpers, oracle, positions, revenue, storage, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + oracle::OracleModule
    + validation::ValidationModule
    + revenue::RevenueModule
    + positions::health::PositionHealthModule
    + helpers::MathsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    #[view(getPosition)]
    fn get_position(&self, position_id: u64) -> Position<Self::Api> {
        self.require_position(position_id)
    }

    /// Open position of `borrower`, if any.
    #[view(getBorrowerPosition)]
    fn get_borrower_position(
        &self,
        borrower: ManagedAddress,
    ) -> OptionalValue<Position<Self::Api>> {
        let mapper = self.borrower_position(&borrower);
        if mapper.is_empty() {
            return OptionalValue::None;
        }

        OptionalValue::Some(self.positions(mapper.get()).get())
    }

    /// All `Active` and `Liquidating` positions, in no particular order.
    #[view(getActivePositions)]
    fn get_active_positions(&self) -> MultiValueEncoded<Position<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for position_id in self.open_positions().iter() {
            result.push(self.positions(position_id).get());
        }
        result
    }

    /// Principal plus interest accrued up to the current block, without writing it.
    #[view(getOwedAmount)]
    fn get_owed_amount(&self, position_id: u64) -> ManagedDecimal<Self::Api, NumDecimals> {
        let position = self.require_position(position_id);
        if !position.is_open() {
            return position.total_owed();
        }

        let pending =
            self.pending_interest(&position, self.blockchain().get_block_timestamp());
        position.total_owed() + pending
    }

    /// Largest principal `collateral_amount` could back at the current price.
    #[view(getMaxBorrow)]
    fn get_max_borrow(
        &self,
        collateral_amount: BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let price = self.get_collateral_price_now();
        let collateral = self.to_decimal(collateral_amount, self.collateral_decimals().get());

        self.compute_max_borrow(
            &collateral,
            &price,
            &self.lending_params().get(),
            self.stable_decimals().get(),
        )
    }

    /// Health factor in WAD precision, with interest accrued up to the current block.
    ///
    /// # Errors
    /// - `ERROR_ZERO_DEBT`: Position carries no debt.
    #[view(getHealthFactor)]
    fn get_health_factor(&self, position_id: u64) -> ManagedDecimal<Self::Api, NumDecimals> {
        let (health_factor, _) = self.health_view(position_id);
        health_factor
    }

    #[view(getHealthStatus)]
    fn get_health_status(&self, position_id: u64) -> HealthStatus {
        let (_, status) = self.health_view(position_id);
        status
    }

    /// Validated collateral/USD price, WAD-scaled.
    #[view(getCollateralPrice)]
    fn get_collateral_price_view(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.get_collateral_price_now()
    }

    #[view(getPoolStatus)]
    fn get_pool_status(&self) -> PoolStatus<Self::Api> {
        let liquid_balance = self.liquid_balance().get();
        let total_principal_outstanding = self.total_principal_outstanding().get();

        PoolStatus {
            utilization_bps: self.get_utilization(&liquid_balance, &total_principal_outstanding),
            liquid_balance,
            total_principal_outstanding,
            is_active: self.pool_active().get(),
            activation_threshold: self.lending_params().get().activation_threshold,
            total_disbursed: self.total_disbursed().get(),
            total_bad_debt: self.total_bad_debt().get(),
            total_revenue: self.total_revenue().get(),
            total_collateral_locked: self.total_collateral_locked().get(),
            open_positions: self.open_positions().len(),
            closed_positions: self.closed_positions_count().get(),
            defaulted_positions: self.defaulted_positions_count().get(),
        }
    }

    /// Revenue split but not yet delivered to a sink.
    #[view(getPendingRevenue)]
    fn get_pending_revenue(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let zero = self.to_decimal(BigUint::zero(), self.stable_decimals().get());
        self.pending_revenue(zero)
    }

    #[view(getPendingPayouts)]
    fn get_pending_payouts(&self) -> MultiValueEncoded<RevenuePayout<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for payout in self.revenue_outbox().iter() {
            result.push(payout);
        }
        result
    }

    /// Delivered totals as `(reward, buyback)`.
    #[view(getRevenueTotals)]
    fn get_revenue_totals(
        &self,
    ) -> MultiValue2<ManagedDecimal<Self::Api, NumDecimals>, ManagedDecimal<Self::Api, NumDecimals>>
    {
        (
            self.reward_dispatched().get(),
            self.buyback_dispatched().get(),
        )
            .into()
    }

    fn accrued_view(&self, position_id: u64) -> Position<Self::Api> {
        let mut position = self.require_position(position_id);
        if position.is_open() {
            self.accrue_position(&mut position, self.blockchain().get_block_timestamp());
        }
        position
    }

    fn health_view(
        &self,
        position_id: u64,
    ) -> (ManagedDecimal<Self::Api, NumDecimals>, HealthStatus) {
        let position = self.accrued_view(position_id);
        let price = self.get_collateral_price_now();

        self.health_at_price(&position, &price)
    }
}
