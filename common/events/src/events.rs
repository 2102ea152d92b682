#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("update_lending_params")]
    fn update_lending_params_event(
        &self,
        #[indexed] max_ltv_bps: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] base_rate_bps: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] risk_premium_bps: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] min_rate_bps: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] max_rate_bps: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] per_user_cap: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] min_principal: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] activation_threshold: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("update_oracle")]
    fn update_oracle_event(
        &self,
        #[indexed] oracle: &ManagedAddress,
        #[indexed] ticker: &ManagedBuffer,
        #[indexed] max_price_stale_seconds: u64,
    );

    #[event("update_sale_venue")]
    fn update_sale_venue_event(&self, #[indexed] venue: &ManagedAddress);

    #[event("update_revenue_sinks")]
    fn update_revenue_sinks_event(
        &self,
        #[indexed] reward_sink: &ManagedAddress,
        #[indexed] buyback_sink: &ManagedAddress,
    );

    #[event("position_opened")]
    fn position_opened_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] collateral_amount: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] principal: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] interest_rate_bps: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] collateral_price: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("position_repaid")]
    fn position_repaid_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] interest_paid: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] principal_paid: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] remaining_owed: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("position_closed")]
    fn position_closed_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] collateral_released: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    // No caller: accrual is driven by the protocol
    #[event("interest_accrued")]
    fn interest_accrued_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] interest_delta: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] interest_accrued: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] timestamp: u64,
    );

    #[event("health_checked")]
    fn health_checked_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] health_factor: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] status: HealthStatus,
    );

    #[event("liquidation_started")]
    fn liquidation_started_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] health_factor: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] debt_total: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] attempt: u32,
    );

    #[event("position_liquidated")]
    fn position_liquidated_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] collateral_sold: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] proceeds: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] surplus: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("position_defaulted")]
    fn position_defaulted_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] collateral_sold: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] proceeds: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] deficit: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("position_partially_liquidated")]
    fn position_partially_liquidated_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] collateral_sold: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] proceeds: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] remaining_collateral: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] remaining_owed: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("unsold_collateral_returned")]
    fn unsold_collateral_returned_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("sale_execution_failed")]
    fn sale_execution_failed_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] venue: &ManagedAddress,
        #[indexed] attempts: u32,
    );

    // Operator alert, automatic passes stop retrying this position
    #[event("liquidation_escalated")]
    fn liquidation_escalated_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] attempts: u32,
        #[indexed] debt_total: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("oracle_unavailable")]
    fn oracle_unavailable_event(
        &self,
        #[indexed] oracle: &ManagedAddress,
        #[indexed] timestamp: u64,
    );

    #[event("fees_deposited")]
    fn fees_deposited_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] liquid_balance: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("pool_activated")]
    fn pool_activated_event(
        &self,
        #[indexed] total_liquidity: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] timestamp: u64,
    );

    #[event("revenue_event")]
    fn revenue_event(&self, #[indexed] event: &RevenueEvent<Self::Api>);

    #[event("revenue_split")]
    fn revenue_split_event(
        &self,
        #[indexed] event_id: u64,
        #[indexed] reward_amount: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] buyback_amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("revenue_dispatched")]
    fn revenue_dispatched_event(
        &self,
        #[indexed] event_id: u64,
        #[indexed] sink: RevenueSink,
        #[indexed] sink_address: &ManagedAddress,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("revenue_returned")]
    fn revenue_returned_event(
        &self,
        #[indexed] event_id: u64,
        #[indexed] sink: RevenueSink,
        #[indexed] sink_address: &ManagedAddress,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );
}
