#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Lifecycle state of a loan.
///
/// `Active` and `Liquidating` are open states, `Closed` and `Defaulted` are terminal.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PositionStatus {
    Active,
    Liquidating,
    Closed,
    Defaulted,
}

/// A single collateralized loan.
///
/// USD amounts are at the stablecoin scale, `collateral_amount` at the collateral token scale
/// and `interest_rate_bps` at `BPS_PRECISION`.
///
/// Interest is always derived from `interest_checkpoint` (lifetime interest up to
/// `checkpoint_at`, the last principal change), so accruing often never loses
/// more than what accruing once would.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Position<M: ManagedTypeApi> {
    pub position_id: u64,
    pub borrower: ManagedAddress<M>,
    pub collateral_amount: ManagedDecimal<M, NumDecimals>,
    pub principal_at_open: ManagedDecimal<M, NumDecimals>,
    pub principal_owed: ManagedDecimal<M, NumDecimals>,
    pub interest_accrued: ManagedDecimal<M, NumDecimals>,
    pub interest_paid: ManagedDecimal<M, NumDecimals>,
    pub interest_rate_bps: ManagedDecimal<M, NumDecimals>,
    pub interest_checkpoint: ManagedDecimal<M, NumDecimals>,
    pub checkpoint_at: u64,
    pub opened_at: u64,
    pub last_accrual_at: u64,
    /// Informational maturity; an overdue position is not liquidated for being late.
    pub repayment_due_at: u64,
    pub status: PositionStatus,
    pub liquidation_attempts: u32,
}

impl<M: ManagedTypeApi> Position<M> {
    /// Principal plus unpaid interest.
    pub fn total_owed(&self) -> ManagedDecimal<M, NumDecimals> {
        self.principal_owed.clone() + self.interest_accrued.clone()
    }

    /// Interest accrued over the life of the loan, paid or not.
    pub fn interest_earned(&self) -> ManagedDecimal<M, NumDecimals> {
        self.interest_paid.clone() + self.interest_accrued.clone()
    }

    pub fn has_debt(&self) -> bool {
        self.total_owed().into_raw_units() > &BigUint::zero()
    }

    pub fn is_open(&self) -> bool {
        matches!(
            self.status,
            PositionStatus::Active | PositionStatus::Liquidating
        )
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_open()
    }

    pub fn is_liquidating(&self) -> bool {
        self.status == PositionStatus::Liquidating
    }
}

/// Outcome of the interest-first repayment split.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct RepaymentResult<M: ManagedTypeApi> {
    pub position_id: u64,
    pub interest_paid: ManagedDecimal<M, NumDecimals>,
    pub principal_paid: ManagedDecimal<M, NumDecimals>,
    pub remaining_owed: ManagedDecimal<M, NumDecimals>,
    pub closed: bool,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub enum LiquidationOutcome<M: ManagedTypeApi> {
    /// Sale covered the debt; the surplus is routed to revenue.
    Closed {
        proceeds: ManagedDecimal<M, NumDecimals>,
        surplus: ManagedDecimal<M, NumDecimals>,
    },
    /// Sale fell short; the deficit is absorbed by the pool.
    Defaulted {
        proceeds: ManagedDecimal<M, NumDecimals>,
        deficit: ManagedDecimal<M, NumDecimals>,
    },
    /// Venue filled part of the order and returned the rest; the position stays
    /// `Liquidating` with its debt reduced by the proceeds.
    PartiallyFilled {
        proceeds: ManagedDecimal<M, NumDecimals>,
        remaining_collateral: ManagedDecimal<M, NumDecimals>,
    },
    /// Venue refunded the collateral, the position stays `Liquidating`.
    SaleFailed { attempts: u32 },
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum HealthStatus {
    Safe,
    Warning,
    Liquidatable,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevenueSource {
    Interest,
    LiquidationSurplus,
}

/// The two fixed downstream destinations of every revenue split.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevenueSink {
    Reward,
    Buyback,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct RevenueEvent<M: ManagedTypeApi> {
    pub event_id: u64,
    pub position_id: u64,
    pub amount: ManagedDecimal<M, NumDecimals>,
    pub source: RevenueSource,
    pub timestamp: u64,
}

/// One side of a split, waiting in the outbox until a sink acknowledges it.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct RevenuePayout<M: ManagedTypeApi> {
    pub event_id: u64,
    pub sink: RevenueSink,
    pub amount: ManagedDecimal<M, NumDecimals>,
    pub source: RevenueSource,
    pub timestamp: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct RevenueSplit<M: ManagedTypeApi> {
    pub reward: ManagedDecimal<M, NumDecimals>,
    pub buyback: ManagedDecimal<M, NumDecimals>,
}

impl<M: ManagedTypeApi> RevenueSplit<M> {
    /// Halves `amount` with floor division; the odd minor unit stays on the reward side.
    pub fn from_amount(amount: &ManagedDecimal<M, NumDecimals>) -> Self {
        let scale = amount.scale();
        let buyback_raw = amount.into_raw_units() / 2u64;
        let reward_raw = amount.into_raw_units() - &buyback_raw;

        RevenueSplit {
            reward: ManagedDecimal::from_raw_units(reward_raw, scale),
            buyback: ManagedDecimal::from_raw_units(buyback_raw, scale),
        }
    }
}

/// Risk and pricing configuration of the pool.
///
/// Rates and LTV at `BPS_PRECISION`, USD limits at the stablecoin scale.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct LendingParams<M: ManagedTypeApi> {
    pub max_ltv_bps: ManagedDecimal<M, NumDecimals>,
    pub base_rate_bps: ManagedDecimal<M, NumDecimals>,
    pub risk_premium_bps: ManagedDecimal<M, NumDecimals>,
    pub min_rate_bps: ManagedDecimal<M, NumDecimals>,
    pub max_rate_bps: ManagedDecimal<M, NumDecimals>,
    pub per_user_cap: ManagedDecimal<M, NumDecimals>,
    pub min_principal: ManagedDecimal<M, NumDecimals>,
    pub activation_threshold: ManagedDecimal<M, NumDecimals>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct OracleConfig<M: ManagedTypeApi> {
    pub address: ManagedAddress<M>,
    pub ticker: ManagedBuffer<M>,
    pub max_price_stale_seconds: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct PoolStatus<M: ManagedTypeApi> {
    pub liquid_balance: ManagedDecimal<M, NumDecimals>,
    pub total_principal_outstanding: ManagedDecimal<M, NumDecimals>,
    pub utilization_bps: ManagedDecimal<M, NumDecimals>,
    pub is_active: bool,
    pub activation_threshold: ManagedDecimal<M, NumDecimals>,
    pub total_disbursed: ManagedDecimal<M, NumDecimals>,
    pub total_bad_debt: ManagedDecimal<M, NumDecimals>,
    pub total_revenue: ManagedDecimal<M, NumDecimals>,
    pub total_collateral_locked: ManagedDecimal<M, NumDecimals>,
    pub open_positions: usize,
    pub closed_positions: u64,
    pub defaulted_positions: u64,
}

/// Oracle round as stored by the aggregator.
#[type_abi]
#[derive(TopEncode, TopDecode, Debug, PartialEq, Eq)]
pub struct TimestampedPrice<M: ManagedTypeApi> {
    pub price: BigUint<M>,
    pub timestamp: u64,
    pub asset_decimals: u8,
    pub round: u32,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug)]
pub struct PriceFeed<M: ManagedTypeApi> {
    pub round_id: u32,
    pub from: ManagedBuffer<M>,
    pub to: ManagedBuffer<M>,
    pub timestamp: u64,
    pub price: ManagedDecimal<M, NumDecimals>,
}
