use common_structs::{LendingParams, OracleConfig, Position, RevenuePayout, TimestampedPrice};
multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Get the collateral token
    /// The protocol's native asset, held in escrow while a position is open.
    #[view(getCollateralToken)]
    #[storage_mapper("collateral_token")]
    fn collateral_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getCollateralDecimals)]
    #[storage_mapper("collateral_decimals")]
    fn collateral_decimals(&self) -> SingleValueMapper<usize>;

    /// Get the loan token
    /// The USD stablecoin lent out, repaid and deposited as fees.
    #[view(getStableToken)]
    #[storage_mapper("stable_token")]
    fn stable_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getStableDecimals)]
    #[storage_mapper("stable_decimals")]
    fn stable_decimals(&self) -> SingleValueMapper<usize>;

    /// Get the lending parameters
    /// LTV, the issuance rate curve and the USD limits of the pool.
    #[view(getLendingParams)]
    #[storage_mapper("lending_params")]
    fn lending_params(&self) -> SingleValueMapper<LendingParams<Self::Api>>;

    /// Get the oracle configuration
    /// Aggregator address, collateral ticker and staleness bound.
    #[view(getOracleConfig)]
    #[storage_mapper("oracle_config")]
    fn oracle_config(&self) -> SingleValueMapper<OracleConfig<Self::Api>>;

    /// Get the sale venue
    /// Market contract that buys seized collateral for stablecoins.
    #[view(getSaleVenue)]
    #[storage_mapper("sale_venue")]
    fn sale_venue(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getRewardSink)]
    #[storage_mapper("reward_sink")]
    fn reward_sink(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getBuybackSink)]
    #[storage_mapper("buyback_sink")]
    fn buyback_sink(&self) -> SingleValueMapper<ManagedAddress>;

    /// Failed sales tolerated before a liquidation is escalated
    #[view(getMaxLiquidationAttempts)]
    #[storage_mapper("max_liquidation_attempts")]
    fn max_liquidation_attempts(&self) -> SingleValueMapper<u32>;

    /// Stablecoins available to lend, at the stablecoin scale.
    #[storage_mapper("liquid_balance")]
    fn liquid_balance(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Sum of the principal owed by all open positions.
    #[storage_mapper("total_principal_outstanding")]
    fn total_principal_outstanding(
        &self,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[storage_mapper("total_disbursed")]
    fn total_disbursed(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Cumulative liquidation deficits absorbed by the pool.
    #[storage_mapper("total_bad_debt")]
    fn total_bad_debt(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Cumulative revenue routed to the splitter.
    #[storage_mapper("total_revenue")]
    fn total_revenue(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Collateral currently held in escrow, at the collateral scale.
    #[storage_mapper("total_collateral_locked")]
    fn total_collateral_locked(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// One-way activation latch
    #[view(isPoolActive)]
    #[storage_mapper("pool_active")]
    fn pool_active(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("closed_positions_count")]
    fn closed_positions_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("defaulted_positions_count")]
    fn defaulted_positions_count(&self) -> SingleValueMapper<u64>;

    #[view(getLastPositionId)]
    #[storage_mapper("last_position_id")]
    fn last_position_id(&self) -> SingleValueMapper<u64>;

    /// Get a position
    /// Closed and defaulted positions are kept as a record.
    #[storage_mapper("positions")]
    fn positions(&self, position_id: u64) -> SingleValueMapper<Position<Self::Api>>;

    /// Open position of a borrower, cleared when the position reaches a terminal state.
    #[storage_mapper("borrower_position")]
    fn borrower_position(&self, borrower: &ManagedAddress) -> SingleValueMapper<u64>;

    /// Ids of all Active and Liquidating positions
    #[view(getOpenPositions)]
    #[storage_mapper("open_positions")]
    fn open_positions(&self) -> UnorderedSetMapper<u64>;

    /// Where the next bounded `accrueAll` batch starts in `open_positions`.
    #[storage_mapper("accrual_cursor")]
    fn accrual_cursor(&self) -> SingleValueMapper<usize>;

    /// Where the next bounded `checkAndLiquidateAll` batch starts in `open_positions`.
    #[storage_mapper("monitor_cursor")]
    fn monitor_cursor(&self) -> SingleValueMapper<usize>;

    /// Liquidations that exhausted their retries and wait for the operator.
    #[view(getEscalatedPositions)]
    #[storage_mapper("escalated_positions")]
    fn escalated_positions(&self) -> UnorderedSetMapper<u64>;

    #[view(getLastRevenueEventId)]
    #[storage_mapper("last_revenue_event_id")]
    fn last_revenue_event_id(&self) -> SingleValueMapper<u64>;

    /// Split revenue waiting to be delivered, oldest first.
    #[storage_mapper("revenue_outbox")]
    fn revenue_outbox(&self) -> QueueMapper<RevenuePayout<Self::Api>>;

    #[storage_mapper("reward_dispatched")]
    fn reward_dispatched(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[storage_mapper("buyback_dispatched")]
    fn buyback_dispatched(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Set while an external sale or delivery is in flight.
    #[view(isOperationLocked)]
    #[storage_mapper("operation_lock")]
    fn operation_lock(&self) -> SingleValueMapper<bool>;

    #[storage_mapper_from_address("rounds")]
    fn rounds(
        &self,
        price_aggregator_address: ManagedAddress,
        from: ManagedBuffer,
        to: ManagedBuffer,
    ) -> SingleValueMapper<TimestampedPrice<Self::Api>, ManagedAddress>;

    #[storage_mapper_from_address("pause_module:paused")]
    fn price_aggregator_paused_state(
        &self,
        price_aggregator_address: ManagedAddress,
    ) -> SingleValueMapper<bool, ManagedAddress>;
}
