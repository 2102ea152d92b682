use common_structs::{HealthStatus, LiquidationOutcome, Position, PositionStatus, RevenueSource};

use crate::{
    cache::Cache,
    helpers::{self, sale::SaleResult},
    oracle, revenue, storage, validation, ERROR_LIQUIDATION_ESCALATED, ERROR_POSITION_HEALTHY,
    ERROR_POSITION_NOT_ACTIVE,
};

use super::{accrual, health, ledger};

multiversx_sc::imports!();

/// Liquidation engine.
///
/// An unhealthy position's entire collateral is offered to the configured venue and the
/// proceeds settle the debt, principal first:
/// - **Closed**: proceeds cover the debt, the surplus becomes revenue and any collateral
///   the venue did not take goes back to the borrower.
/// - **PartiallyFilled**: proceeds fall short but part of the collateral came back; the
///   debt is reduced and the position stays `Liquidating` for the next pass.
/// - **Defaulted**: proceeds fall short and no collateral is left, the pool absorbs the
///   deficit as bad debt and the borrower owes nothing further.
/// - **SaleFailed**: the venue refunded the collateral; the position stays `Liquidating`
///   and is escalated to the operator once its retry budget is spent.
#[multiversx_sc::module]
pub trait PositionLiquidationModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + accrual::PositionAccrualModule
    + health::PositionHealthModule
    + ledger::PositionLedgerModule
    + revenue::RevenueModule
    + helpers::MathsModule
    + helpers::sale::SaleModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Liquidates one position on request.
    ///
    /// # Errors
    /// - `ERROR_POSITION_NOT_ACTIVE`: Position is closed or defaulted.
    /// - `ERROR_LIQUIDATION_ESCALATED`: Retries are exhausted, only the owner may retry.
    /// - `ERROR_POSITION_HEALTHY`: Health factor is at least 1.0.
    fn liquidate_single(
        &self,
        cache: &mut Cache<Self>,
        position_id: u64,
    ) -> LiquidationOutcome<Self::Api> {
        let mut position = self.require_position(position_id);
        require!(position.is_open(), ERROR_POSITION_NOT_ACTIVE);
        require!(
            !self.escalated_positions().contains(&position_id),
            ERROR_LIQUIDATION_ESCALATED
        );

        self.accrue_with_event(&mut position, cache.timestamp);
        let (health_factor, status) = self.check_health(cache, &position);
        require!(
            status == HealthStatus::Liquidatable,
            ERROR_POSITION_HEALTHY
        );

        self.process_liquidation(cache, position, &health_factor)
    }

    /// Clears the failure counter of an escalated position and liquidates it again.
    fn retry_escalated(
        &self,
        cache: &mut Cache<Self>,
        position_id: u64,
    ) -> LiquidationOutcome<Self::Api> {
        let mut position = self.require_position(position_id);
        require!(position.is_open(), ERROR_POSITION_NOT_ACTIVE);

        self.escalated_positions().swap_remove(&position_id);
        position.liquidation_attempts = 0;
        self.positions(position_id).set(&position);

        self.liquidate_single(cache, position_id)
    }

    /// One monitoring pass at a single oracle price over the next batch of open positions.
    ///
    /// Escalated positions are skipped but still count towards `max_items`. A
    /// `Liquidating` position that has recovered above 1.0 returns to `Active` with its
    /// failure counter reset.
    fn liquidate_all(
        &self,
        cache: &mut Cache<Self>,
        price: &ManagedDecimal<Self::Api, NumDecimals>,
        max_items: Option<usize>,
    ) -> MultiValueEncoded<Self::Api, MultiValue2<u64, LiquidationOutcome<Self::Api>>> {
        let mut outcomes = MultiValueEncoded::new();
        let escalated = self.escalated_positions();
        let position_ids = self.next_batch(self.monitor_cursor(), max_items);

        for position_id in position_ids.iter() {
            if escalated.contains(&position_id) {
                continue;
            }

            let mut position = self.positions(position_id).get();
            self.accrue_with_event(&mut position, cache.timestamp);

            let (health_factor, status) = self.health_at_price(&position, price);
            self.health_checked_event(position_id, &health_factor, status);

            if status == HealthStatus::Liquidatable {
                let outcome = self.process_liquidation(cache, position, &health_factor);
                outcomes.push((position_id, outcome).into());
                continue;
            }

            if position.is_liquidating() {
                position.status = PositionStatus::Active;
                position.liquidation_attempts = 0;
            }
            self.positions(position_id).set(&position);
        }

        outcomes
    }

    /// Sells the collateral of an unhealthy position and settles the result.
    fn process_liquidation(
        &self,
        cache: &mut Cache<Self>,
        mut position: Position<Self::Api>,
        health_factor: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> LiquidationOutcome<Self::Api> {
        position.status = PositionStatus::Liquidating;
        self.positions(position.position_id).set(&position);

        self.liquidation_started_event(
            position.position_id,
            health_factor,
            &position.total_owed(),
            position.liquidation_attempts + 1,
        );

        match self.sell_collateral(cache, &position.collateral_amount) {
            SaleResult::Filled { proceeds, unsold } => {
                self.settle_liquidation(cache, position, proceeds, unsold)
            },
            SaleResult::Refunded => self.record_failed_sale(position),
        }
    }

    fn record_failed_sale(
        &self,
        mut position: Position<Self::Api>,
    ) -> LiquidationOutcome<Self::Api> {
        position.liquidation_attempts += 1;
        let attempts = position.liquidation_attempts;

        self.sale_execution_failed_event(
            position.position_id,
            &self.sale_venue().get(),
            attempts,
        );
        if attempts >= self.max_liquidation_attempts().get() {
            self.escalated_positions().insert(position.position_id);
            self.liquidation_escalated_event(
                position.position_id,
                attempts,
                &position.total_owed(),
            );
        }

        self.positions(position.position_id).set(&position);
        LiquidationOutcome::SaleFailed { attempts }
    }

    /// Applies sale proceeds to the debt and decides the position's fate.
    ///
    /// Principal recovered returns to the pool's liquidity; interest recovered and any
    /// surplus are recorded as revenue.
    fn settle_liquidation(
        &self,
        cache: &mut Cache<Self>,
        mut position: Position<Self::Api>,
        proceeds: ManagedDecimal<Self::Api, NumDecimals>,
        unsold: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> LiquidationOutcome<Self::Api> {
        let position_id = position.position_id;
        let debt = position.total_owed();
        let collateral_sold = position.collateral_amount.clone() - unsold.clone();
        let borrower = position.borrower.clone();

        let surplus = self.apply_proceeds(cache, &mut position, &proceeds);

        if proceeds >= debt {
            self.record_revenue(
                cache,
                position_id,
                &surplus,
                RevenueSource::LiquidationSurplus,
            );

            self.settle_position(cache, &mut position, PositionStatus::Closed);
            self.position_liquidated_event(
                position_id,
                &borrower,
                &collateral_sold,
                &proceeds,
                &surplus,
            );

            if unsold.into_raw_units() > &BigUint::zero() {
                self.unsold_collateral_returned_event(position_id, &borrower, &unsold);
                self.tx()
                    .to(&borrower)
                    .egld_or_single_esdt(&cache.collateral_token, 0, unsold.into_raw_units())
                    .transfer();
            }

            return LiquidationOutcome::Closed { proceeds, surplus };
        }

        if unsold.into_raw_units() > &BigUint::zero() {
            cache.total_collateral_locked =
                self.sub_or_zero(&cache.total_collateral_locked, &collateral_sold);
            position.collateral_amount = unsold.clone();
            self.checkpoint_interest(&mut position, cache.timestamp);
            self.positions(position_id).set(&position);

            self.position_partially_liquidated_event(
                position_id,
                &collateral_sold,
                &proceeds,
                &unsold,
                &position.total_owed(),
            );

            return LiquidationOutcome::PartiallyFilled {
                proceeds,
                remaining_collateral: unsold,
            };
        }

        let deficit = position.total_owed();
        cache.total_principal_outstanding =
            cache.total_principal_outstanding.clone() - position.principal_owed.clone();
        cache.total_bad_debt = cache.total_bad_debt.clone() + deficit.clone();

        self.settle_position(cache, &mut position, PositionStatus::Defaulted);
        self.position_defaulted_event(
            position_id,
            &borrower,
            &collateral_sold,
            &proceeds,
            &deficit,
        );

        LiquidationOutcome::Defaulted { proceeds, deficit }
    }

    /// Pays down principal, then interest, out of `proceeds`.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: The part of `proceeds` left over.
    fn apply_proceeds(
        &self,
        cache: &mut Cache<Self>,
        position: &mut Position<Self::Api>,
        proceeds: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let principal_recovered = self.get_min(proceeds.clone(), position.principal_owed.clone());
        let rest = proceeds.clone() - principal_recovered.clone();
        let interest_recovered = self.get_min(rest.clone(), position.interest_accrued.clone());

        position.principal_owed = position.principal_owed.clone() - principal_recovered.clone();
        position.interest_accrued = position.interest_accrued.clone() - interest_recovered.clone();
        position.interest_paid = position.interest_paid.clone() + interest_recovered.clone();

        cache.liquid_balance = cache.liquid_balance.clone() + principal_recovered.clone();
        cache.total_principal_outstanding =
            cache.total_principal_outstanding.clone() - principal_recovered;
        self.record_revenue(
            cache,
            position.position_id,
            &interest_recovered,
            RevenueSource::Interest,
        );

        rest - interest_recovered
    }
}
