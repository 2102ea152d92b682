use crate::{constants::*, proxys::*};

use common_structs::{
    HealthStatus, LiquidationOutcome, PoolStatus, Position, RepaymentResult, RevenuePayout,
};
use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, EsdtTokenPayment, ManagedAddress, ManagedBuffer,
    ManagedDecimal, MultiValueEncoded, ReturnsNewManagedAddress, ReturnsResult, TestAddress,
    TestTokenIdentifier,
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, OptionalValue},
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(CONTROLLER_PATH, exen_controller::ContractBuilder);
    blockchain.register_contract(AGGREGATOR_PATH, aggregator_mock::ContractBuilder);
    blockchain.register_contract(SALE_VENUE_PATH, swap_mock::ContractBuilder);
    blockchain.register_contract(SINK_PATH, sink_mock::ContractBuilder);

    blockchain
}

/// Whole USD to stablecoin minor units.
pub fn usd(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(STABLE_DECIMALS as u32)
}

/// Whole collateral tokens to raw units.
pub fn tokens(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(COLLATERAL_DECIMALS as u32)
}

/// Oracle price in USD cents per whole collateral token, WAD-scaled.
pub fn price_cents(cents: u64) -> BigUint<StaticApi> {
    BigUint::from(cents) * BigUint::from(10u64).pow(16)
}

pub fn raw(value: &ManagedDecimal<StaticApi, usize>) -> BigUint<StaticApi> {
    value.into_raw_units().clone()
}

pub struct LendingTestState {
    pub world: ScenarioWorld,
    pub controller_sc: ManagedAddress<StaticApi>,
    pub aggregator_sc: ManagedAddress<StaticApi>,
    pub venue_sc: ManagedAddress<StaticApi>,
    pub reward_sink_sc: ManagedAddress<StaticApi>,
    pub buyback_sink_sc: ManagedAddress<StaticApi>,
    pub now: u64,
}

impl LendingTestState {
    /// Deploys the pool and its collaborators with the collateral quoted at $0.10.
    pub fn new() -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_timestamp(0);

        let aggregator_sc = setup_aggregator(&mut world);
        let venue_sc = setup_venue(&mut world);
        let reward_sink_sc = setup_sink(&mut world);
        let buyback_sink_sc = setup_sink(&mut world);
        let controller_sc = setup_controller(
            &mut world,
            &aggregator_sc,
            &venue_sc,
            &reward_sink_sc,
            &buyback_sink_sc,
        );

        let mut state = Self {
            world,
            controller_sc,
            aggregator_sc,
            venue_sc,
            reward_sink_sc,
            buyback_sink_sc,
            now: 0,
        };
        state.set_price(10);
        state
    }

    /// A pool that already crossed its activation threshold with `liquidity_usd`.
    pub fn with_liquidity(liquidity_usd: u64) -> Self {
        let mut state = Self::new();
        state.deposit_fees(&FUNDER_ADDRESS, usd(liquidity_usd));
        state
    }

    pub fn advance_time(&mut self, seconds: u64) {
        self.now += seconds;
        self.world.current_block().block_timestamp(self.now);
    }

    // Oracle and venue controls

    pub fn set_price(&mut self, cents: u64) {
        self.set_price_raw(price_cents(cents));
    }

    pub fn set_price_raw(&mut self, price: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.aggregator_sc)
            .typed(proxy_aggregator_mock::AggregatorMockProxy)
            .set_price(
                ManagedBuffer::new_from_bytes(COLLATERAL_TICKER),
                ManagedBuffer::new_from_bytes(USD_TICKER),
                price,
            )
            .run();
    }

    pub fn set_price_at(&mut self, cents: u64, timestamp: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.aggregator_sc)
            .typed(proxy_aggregator_mock::AggregatorMockProxy)
            .set_price_at(
                ManagedBuffer::new_from_bytes(COLLATERAL_TICKER),
                ManagedBuffer::new_from_bytes(USD_TICKER),
                price_cents(cents),
                timestamp,
            )
            .run();
    }

    pub fn clear_price(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.aggregator_sc)
            .typed(proxy_aggregator_mock::AggregatorMockProxy)
            .clear_price(
                ManagedBuffer::new_from_bytes(COLLATERAL_TICKER),
                ManagedBuffer::new_from_bytes(USD_TICKER),
            )
            .run();
    }

    pub fn pause_oracle(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.aggregator_sc)
            .typed(proxy_aggregator_mock::AggregatorMockProxy)
            .pause_endpoint()
            .run();
    }

    /// Venue execution price in stable minor units per whole collateral token.
    pub fn set_venue_price(&mut self, price: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.venue_sc)
            .typed(proxy_sale_venue::SaleVenueProxy)
            .set_execution_price(BigUint::from(price))
            .run();
    }

    pub fn set_venue_fail_mode(&mut self, fail: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.venue_sc)
            .typed(proxy_sale_venue::SaleVenueProxy)
            .set_fail_mode(fail)
            .run();
    }

    pub fn set_venue_black_hole(&mut self, enabled: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.venue_sc)
            .typed(proxy_sale_venue::SaleVenueProxy)
            .set_black_hole_mode(enabled)
            .run();
    }

    /// Share of each sale order the venue fills, in basis points.
    pub fn set_venue_fill_bps(&mut self, fill_bps: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.venue_sc)
            .typed(proxy_sale_venue::SaleVenueProxy)
            .set_fill_bps(fill_bps)
            .run();
    }

    pub fn fund_venue(&mut self, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.venue_sc)
            .typed(proxy_sale_venue::SaleVenueProxy)
            .fund()
            .esdt(EsdtTokenPayment::new(
                STABLE_TOKEN.to_token_identifier(),
                0,
                amount,
            ))
            .run();
    }

    pub fn venue_sales_count(&mut self) -> u64 {
        self.world
            .query()
            .to(&self.venue_sc)
            .typed(proxy_sale_venue::SaleVenueProxy)
            .sales_count()
            .returns(ReturnsResult)
            .run()
    }

    // Pool accounting

    pub fn deposit_fees(&mut self, from: &TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .deposit_fees()
            .esdt(EsdtTokenPayment::new(
                STABLE_TOKEN.to_token_identifier(),
                0,
                amount,
            ))
            .run();
    }

    pub fn deposit_fees_error(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .deposit_fees()
            .esdt(EsdtTokenPayment::new(token.to_token_identifier(), 0, amount))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Positions

    pub fn open_position(
        &mut self,
        from: &TestAddress,
        collateral: BigUint<StaticApi>,
        principal: BigUint<StaticApi>,
    ) -> Position<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .open_position(principal)
            .esdt(EsdtTokenPayment::new(
                COLLATERAL_TOKEN.to_token_identifier(),
                0,
                collateral,
            ))
            .returns(ReturnsResult)
            .run()
    }

    pub fn open_position_error(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        collateral: BigUint<StaticApi>,
        principal: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .open_position(principal)
            .esdt(EsdtTokenPayment::new(token.to_token_identifier(), 0, collateral))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn repay(
        &mut self,
        from: &TestAddress,
        position_id: u64,
        amount: BigUint<StaticApi>,
    ) -> RepaymentResult<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .repay(position_id)
            .esdt(EsdtTokenPayment::new(
                STABLE_TOKEN.to_token_identifier(),
                0,
                amount,
            ))
            .returns(ReturnsResult)
            .run()
    }

    pub fn repay_error(
        &mut self,
        from: &TestAddress,
        position_id: u64,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .repay(position_id)
            .esdt(EsdtTokenPayment::new(token.to_token_identifier(), 0, amount))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Accrual and liquidation

    pub fn accrue_all(&mut self) -> usize {
        self.world
            .tx()
            .from(KEEPER_ADDRESS)
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .accrue_all(OptionalValue::<usize>::None)
            .returns(ReturnsResult)
            .run()
    }

    pub fn accrue_batch(&mut self, max_items: usize) -> usize {
        self.world
            .tx()
            .from(KEEPER_ADDRESS)
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .accrue_all(OptionalValue::Some(max_items))
            .returns(ReturnsResult)
            .run()
    }

    pub fn accrue_positions(&mut self, position_ids: &[u64]) -> usize {
        let mut ids: MultiValueEncoded<StaticApi, u64> = MultiValueEncoded::new();
        for id in position_ids {
            ids.push(*id);
        }

        self.world
            .tx()
            .from(KEEPER_ADDRESS)
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .accrue_positions(ids)
            .returns(ReturnsResult)
            .run()
    }

    pub fn accrue_positions_error(&mut self, position_ids: &[u64], error_message: &[u8]) {
        let mut ids: MultiValueEncoded<StaticApi, u64> = MultiValueEncoded::new();
        for id in position_ids {
            ids.push(*id);
        }

        self.world
            .tx()
            .from(KEEPER_ADDRESS)
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .accrue_positions(ids)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn liquidate(&mut self, position_id: u64) -> LiquidationOutcome<StaticApi> {
        self.world
            .tx()
            .from(KEEPER_ADDRESS)
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .liquidate(position_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn liquidate_error(&mut self, position_id: u64, error_message: &[u8]) {
        self.world
            .tx()
            .from(KEEPER_ADDRESS)
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .liquidate(position_id)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn check_and_liquidate_all(&mut self) -> Vec<(u64, LiquidationOutcome<StaticApi>)> {
        self.run_monitor(OptionalValue::None)
    }

    pub fn check_and_liquidate_batch(
        &mut self,
        max_items: usize,
    ) -> Vec<(u64, LiquidationOutcome<StaticApi>)> {
        self.run_monitor(OptionalValue::Some(max_items))
    }

    fn run_monitor(
        &mut self,
        opt_max_items: OptionalValue<usize>,
    ) -> Vec<(u64, LiquidationOutcome<StaticApi>)> {
        let outcomes = self
            .world
            .tx()
            .from(KEEPER_ADDRESS)
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .check_and_liquidate_all(opt_max_items)
            .returns(ReturnsResult)
            .run();

        outcomes
            .into_iter()
            .map(|outcome| outcome.into_tuple())
            .collect()
    }

    pub fn retry_liquidation(&mut self, position_id: u64) -> LiquidationOutcome<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .retry_liquidation(position_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn retry_liquidation_error(
        &mut self,
        from: &TestAddress,
        position_id: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .retry_liquidation(position_id)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Revenue

    pub fn dispatch_revenue(&mut self, max_items: usize) -> usize {
        self.world
            .tx()
            .from(KEEPER_ADDRESS)
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .dispatch_revenue(max_items)
            .returns(ReturnsResult)
            .run()
    }

    pub fn sink_total_received(&mut self, sink: ManagedAddress<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&sink)
            .typed(proxy_revenue_sink::RevenueSinkProxy)
            .total_received()
            .returns(ReturnsResult)
            .run()
    }

    pub fn sink_deliveries(&mut self, sink: ManagedAddress<StaticApi>) -> u64 {
        self.world
            .query()
            .to(&sink)
            .typed(proxy_revenue_sink::RevenueSinkProxy)
            .deliveries()
            .returns(ReturnsResult)
            .run()
    }

    pub fn set_sink_reject_mode(&mut self, sink: ManagedAddress<StaticApi>, reject: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&sink)
            .typed(proxy_revenue_sink::RevenueSinkProxy)
            .set_reject_mode(reject)
            .run();
    }

    pub fn sink_rejections(&mut self, sink: ManagedAddress<StaticApi>) -> u64 {
        self.world
            .query()
            .to(&sink)
            .typed(proxy_revenue_sink::RevenueSinkProxy)
            .rejections()
            .returns(ReturnsResult)
            .run()
    }

    // Configuration

    pub fn set_lending_params(
        &mut self,
        max_ltv_bps: u64,
        base_rate_bps: u64,
        risk_premium_bps: u64,
        min_rate_bps: u64,
        max_rate_bps: u64,
        per_user_cap_usd: u64,
        min_principal_usd: u64,
        activation_threshold_usd: u64,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .set_lending_params(
                BigUint::from(max_ltv_bps),
                BigUint::from(base_rate_bps),
                BigUint::from(risk_premium_bps),
                BigUint::from(min_rate_bps),
                BigUint::from(max_rate_bps),
                usd(per_user_cap_usd),
                usd(min_principal_usd),
                usd(activation_threshold_usd),
            )
            .run();
    }

    pub fn set_lending_params_error(
        &mut self,
        from: &TestAddress,
        max_ltv_bps: u64,
        base_rate_bps: u64,
        min_rate_bps: u64,
        max_rate_bps: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .set_lending_params(
                BigUint::from(max_ltv_bps),
                BigUint::from(base_rate_bps),
                BigUint::from(1_000u64),
                BigUint::from(min_rate_bps),
                BigUint::from(max_rate_bps),
                usd(500_000),
                usd(100),
                usd(50_000),
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    /// Fixed issuance rate, independent of utilization.
    pub fn use_flat_rate(&mut self, rate_bps: u64) {
        self.set_lending_params(6_000, rate_bps, 0, 500, 1_800, 500_000, 100, 50_000);
    }

    pub fn set_max_liquidation_attempts(&mut self, attempts: u32) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .set_max_liquidation_attempts(attempts)
            .run();
    }

    pub fn pause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .pause_endpoint()
            .run();
    }

    pub fn unpause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .unpause_endpoint()
            .run();
    }

    // Views

    pub fn get_position(&mut self, position_id: u64) -> Position<StaticApi> {
        self.world
            .query()
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .get_position(position_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_borrower_position(
        &mut self,
        borrower: &TestAddress,
    ) -> Option<Position<StaticApi>> {
        let result = self
            .world
            .query()
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .get_borrower_position(borrower.to_managed_address())
            .returns(ReturnsResult)
            .run();

        match result {
            OptionalValue::Some(position) => Some(position),
            OptionalValue::None => None,
        }
    }

    pub fn get_active_positions(&mut self) -> Vec<Position<StaticApi>> {
        let positions = self
            .world
            .query()
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .get_active_positions()
            .returns(ReturnsResult)
            .run();

        positions.into_iter().collect()
    }

    pub fn get_owed_amount(&mut self, position_id: u64) -> BigUint<StaticApi> {
        let owed = self
            .world
            .query()
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .get_owed_amount(position_id)
            .returns(ReturnsResult)
            .run();

        raw(&owed)
    }

    pub fn get_max_borrow(&mut self, collateral: BigUint<StaticApi>) -> BigUint<StaticApi> {
        let max_borrow = self
            .world
            .query()
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .get_max_borrow(collateral)
            .returns(ReturnsResult)
            .run();

        raw(&max_borrow)
    }

    pub fn get_health_factor(&mut self, position_id: u64) -> BigUint<StaticApi> {
        let health_factor = self
            .world
            .query()
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .get_health_factor(position_id)
            .returns(ReturnsResult)
            .run();

        raw(&health_factor)
    }

    pub fn get_health_status(&mut self, position_id: u64) -> HealthStatus {
        self.world
            .query()
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .get_health_status(position_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_health_factor_error(&mut self, position_id: u64, error_message: &[u8]) {
        self.world
            .query()
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .get_health_factor(position_id)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn get_pool_status(&mut self) -> PoolStatus<StaticApi> {
        self.world
            .query()
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .get_pool_status()
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_pending_revenue(&mut self) -> BigUint<StaticApi> {
        let pending = self
            .world
            .query()
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .get_pending_revenue()
            .returns(ReturnsResult)
            .run();

        raw(&pending)
    }

    pub fn get_pending_payouts(&mut self) -> Vec<RevenuePayout<StaticApi>> {
        let payouts = self
            .world
            .query()
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .get_pending_payouts()
            .returns(ReturnsResult)
            .run();

        payouts.into_iter().collect()
    }

    /// Delivered revenue as `(reward, buyback)`.
    pub fn get_revenue_totals(&mut self) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        let totals = self
            .world
            .query()
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .get_revenue_totals()
            .returns(ReturnsResult)
            .run();

        let (reward, buyback) = totals.into_tuple();
        (raw(&reward), raw(&buyback))
    }

    pub fn escalated_positions(&mut self) -> Vec<u64> {
        let escalated = self
            .world
            .query()
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .escalated_positions()
            .returns(ReturnsResult)
            .run();

        escalated.into_iter().collect()
    }

    pub fn is_operation_locked(&mut self) -> bool {
        self.world
            .query()
            .to(&self.controller_sc)
            .typed(proxy_exen_controller::ControllerProxy)
            .operation_lock()
            .returns(ReturnsResult)
            .run()
    }

    pub fn check_stable_balance(
        &mut self,
        address: ManagedAddress<StaticApi>,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .check_account(address)
            .esdt_balance(STABLE_TOKEN, amount);
    }

    pub fn check_collateral_balance(
        &mut self,
        address: ManagedAddress<StaticApi>,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .check_account(address)
            .esdt_balance(COLLATERAL_TOKEN, amount);
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world
        .account(OWNER_ADDRESS)
        .nonce(1)
        .esdt_balance(STABLE_TOKEN, usd(10_000_000));
    world
        .account(FUNDER_ADDRESS)
        .nonce(1)
        .esdt_balance(STABLE_TOKEN, usd(10_000_000))
        .esdt_balance(OTHER_TOKEN, tokens(1_000));
    world
        .account(BORROWER_ADDRESS)
        .nonce(1)
        .esdt_balance(COLLATERAL_TOKEN, tokens(10_000_000))
        .esdt_balance(STABLE_TOKEN, usd(100_000))
        .esdt_balance(OTHER_TOKEN, tokens(1_000));
    world
        .account(SECOND_BORROWER_ADDRESS)
        .nonce(1)
        .esdt_balance(COLLATERAL_TOKEN, tokens(10_000_000))
        .esdt_balance(STABLE_TOKEN, usd(100_000));
    world.account(KEEPER_ADDRESS).nonce(1);
}

/// Borrower account for simulations, funded with collateral and stablecoins.
pub fn setup_borrower(world: &mut ScenarioWorld, borrower: TestAddress) {
    world
        .account(borrower)
        .nonce(1)
        .esdt_balance(COLLATERAL_TOKEN, tokens(100_000_000))
        .esdt_balance(STABLE_TOKEN, usd(1_000_000));
}

pub fn setup_aggregator(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_aggregator_mock::AggregatorMockProxy)
        .init()
        .code(AGGREGATOR_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

/// Sale venue funded with 1,000,000 USD, selling at $0.10 per token.
pub fn setup_venue(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let venue_sc = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_sale_venue::SaleVenueProxy)
        .init(BigUint::from(VENUE_PRICE_TEN_CENTS))
        .code(SALE_VENUE_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&venue_sc)
        .typed(proxy_sale_venue::SaleVenueProxy)
        .fund()
        .esdt(EsdtTokenPayment::new(
            STABLE_TOKEN.to_token_identifier(),
            0,
            usd(1_000_000),
        ))
        .run();

    venue_sc
}

pub fn setup_sink(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_revenue_sink::RevenueSinkProxy)
        .init()
        .code(SINK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_controller(
    world: &mut ScenarioWorld,
    aggregator_sc: &ManagedAddress<StaticApi>,
    venue_sc: &ManagedAddress<StaticApi>,
    reward_sink_sc: &ManagedAddress<StaticApi>,
    buyback_sink_sc: &ManagedAddress<StaticApi>,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_exen_controller::ControllerProxy)
        .init(
            EgldOrEsdtTokenIdentifier::esdt(COLLATERAL_TOKEN.to_token_identifier()),
            COLLATERAL_DECIMALS,
            EgldOrEsdtTokenIdentifier::esdt(STABLE_TOKEN.to_token_identifier()),
            STABLE_DECIMALS,
            aggregator_sc,
            ManagedBuffer::new_from_bytes(COLLATERAL_TICKER),
            venue_sc,
            reward_sink_sc,
            buyback_sink_sc,
        )
        .code(CONTROLLER_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn wad() -> BigUint<StaticApi> {
    BigUint::from(10u64).pow(18)
}

/// `numerator / denominator` in WAD precision.
pub fn wad_fraction(numerator: u64, denominator: u64) -> BigUint<StaticApi> {
    wad() * BigUint::from(numerator) / BigUint::from(denominator)
}
