use common_constants::{DEFAULT_REPAYMENT_PERIOD_DAYS, SECONDS_PER_DAY};
use common_structs::{Position, PositionStatus, RepaymentResult, RevenueSource};

use crate::{
    cache::Cache, helpers, oracle, revenue, storage, validation, ERROR_BORROW_BELOW_MINIMUM,
    ERROR_BORROW_LIMIT_EXCEEDED, ERROR_CONCURRENT_MODIFICATION, ERROR_INSUFFICIENT_LIQUIDITY,
    ERROR_OVER_REPAYMENT, ERROR_POSITION_ALREADY_OPEN, ERROR_POSITION_NOT_ACTIVE,
    ERROR_USER_BORROW_CAP_EXCEEDED,
};

use super::accrual;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionLedgerModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + accrual::PositionAccrualModule
    + revenue::RevenueModule
    + helpers::MathsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Escrows `collateral` and lends `requested_principal` against it.
    ///
    /// Checks run in a fixed order: pool active, one open position per borrower,
    /// minimum loan, pool liquidity, LTV at the oracle price, per-user cap.
    ///
    /// The rate is priced on the utilization the pool will have once this loan is out.
    ///
    /// # Returns
    /// - `Position<Self::Api>`: The stored position, `Active`.
    fn open_position(
        &self,
        cache: &mut Cache<Self>,
        borrower: &ManagedAddress,
        collateral: &ManagedDecimal<Self::Api, NumDecimals>,
        requested_principal: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> Position<Self::Api> {
        self.require_pool_active(cache);
        require!(
            self.borrower_position(borrower).is_empty(),
            ERROR_POSITION_ALREADY_OPEN
        );
        require!(
            *requested_principal >= cache.params.min_principal,
            ERROR_BORROW_BELOW_MINIMUM
        );
        require!(
            cache.has_liquidity(requested_principal),
            ERROR_INSUFFICIENT_LIQUIDITY
        );

        let price = self.get_collateral_price(cache);
        let max_borrow =
            self.compute_max_borrow(collateral, &price, &cache.params, cache.stable_decimals);
        require!(
            *requested_principal <= max_borrow,
            ERROR_BORROW_LIMIT_EXCEEDED
        );
        require!(
            *requested_principal <= cache.params.per_user_cap,
            ERROR_USER_BORROW_CAP_EXCEEDED
        );

        cache.liquid_balance = cache.liquid_balance.clone() - requested_principal.clone();
        cache.total_principal_outstanding =
            cache.total_principal_outstanding.clone() + requested_principal.clone();
        cache.total_disbursed = cache.total_disbursed.clone() + requested_principal.clone();
        cache.total_collateral_locked = cache.total_collateral_locked.clone() + collateral.clone();

        let utilization =
            self.get_utilization(&cache.liquid_balance, &cache.total_principal_outstanding);
        let rate = self.calc_issuance_rate(&utilization, &cache.params);

        let position_id = self.last_position_id().update(|id| {
            *id += 1;
            *id
        });
        let position = Position {
            position_id,
            borrower: borrower.clone(),
            collateral_amount: collateral.clone(),
            principal_at_open: requested_principal.clone(),
            principal_owed: requested_principal.clone(),
            interest_accrued: cache.stable_zero(),
            interest_paid: cache.stable_zero(),
            interest_rate_bps: rate,
            interest_checkpoint: cache.stable_zero(),
            checkpoint_at: cache.timestamp,
            opened_at: cache.timestamp,
            last_accrual_at: cache.timestamp,
            repayment_due_at: cache.timestamp + DEFAULT_REPAYMENT_PERIOD_DAYS * SECONDS_PER_DAY,
            status: PositionStatus::Active,
            liquidation_attempts: 0,
        };

        self.positions(position_id).set(&position);
        self.borrower_position(borrower).set(position_id);
        self.open_positions().insert(position_id);

        self.position_opened_event(
            position_id,
            borrower,
            collateral,
            requested_principal,
            &position.interest_rate_bps,
            &price,
        );

        position
    }

    /// Applies a repayment interest first, then principal.
    ///
    /// A repayment that clears the full debt closes the position and releases the
    /// whole collateral to the borrower.
    ///
    /// # Errors
    /// - `ERROR_CONCURRENT_MODIFICATION`: Position is being liquidated.
    /// - `ERROR_POSITION_NOT_ACTIVE`: Position already closed or defaulted.
    /// - `ERROR_POSITION_NOT_OWNED`: Caller is not the borrower.
    /// - `ERROR_OVER_REPAYMENT`: Amount exceeds principal plus accrued interest.
    fn repay_position(
        &self,
        cache: &mut Cache<Self>,
        caller: &ManagedAddress,
        position_id: u64,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> RepaymentResult<Self::Api> {
        let mut position = self.require_position(position_id);
        require!(!position.is_liquidating(), ERROR_CONCURRENT_MODIFICATION);
        require!(position.is_open(), ERROR_POSITION_NOT_ACTIVE);
        self.require_position_owner(&position, caller);

        self.accrue_with_event(&mut position, cache.timestamp);
        require!(*amount <= position.total_owed(), ERROR_OVER_REPAYMENT);

        let interest_paid = self.get_min(amount.clone(), position.interest_accrued.clone());
        let principal_paid = amount.clone() - interest_paid.clone();

        position.interest_accrued = position.interest_accrued.clone() - interest_paid.clone();
        position.interest_paid = position.interest_paid.clone() + interest_paid.clone();
        position.principal_owed = position.principal_owed.clone() - principal_paid.clone();
        if principal_paid.into_raw_units() > &BigUint::zero() {
            self.checkpoint_interest(&mut position, cache.timestamp);
        }

        cache.liquid_balance = cache.liquid_balance.clone() + principal_paid.clone();
        cache.total_principal_outstanding =
            cache.total_principal_outstanding.clone() - principal_paid.clone();
        self.record_revenue(cache, position_id, &interest_paid, RevenueSource::Interest);

        let remaining_owed = position.total_owed();
        self.position_repaid_event(
            position_id,
            caller,
            &interest_paid,
            &principal_paid,
            &remaining_owed,
        );

        let closed = !position.has_debt();
        if closed {
            let collateral = position.collateral_amount.clone();
            self.settle_position(cache, &mut position, PositionStatus::Closed);
            self.position_closed_event(position_id, caller, &collateral);
            self.tx()
                .to(caller)
                .egld_or_single_esdt(&cache.collateral_token, 0, collateral.into_raw_units())
                .transfer();
        } else {
            self.positions(position_id).set(&position);
        }

        RepaymentResult {
            position_id,
            interest_paid,
            principal_paid,
            remaining_owed,
            closed,
        }
    }

    /// Moves a position to a terminal state and takes it out of the open book.
    ///
    /// The escrowed collateral leaves the pool totals; the caller decides where it goes.
    fn settle_position(
        &self,
        cache: &mut Cache<Self>,
        position: &mut Position<Self::Api>,
        status: PositionStatus,
    ) {
        cache.total_collateral_locked =
            self.sub_or_zero(&cache.total_collateral_locked, &position.collateral_amount);
        match status {
            PositionStatus::Defaulted => cache.defaulted_positions += 1,
            _ => cache.closed_positions += 1,
        }

        position.collateral_amount = cache.collateral_zero();
        position.principal_owed = cache.stable_zero();
        position.interest_accrued = cache.stable_zero();
        position.status = status;

        self.open_positions().swap_remove(&position.position_id);
        self.escalated_positions().swap_remove(&position.position_id);
        self.borrower_position(&position.borrower).clear();
        self.positions(position.position_id).set(&*position);
    }
}
