#![no_std]

pub const USD_TICKER: &[u8] = b"USD";

/// 365 days, the accrual year used for simple per-position interest
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 3_600;
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Scale used for oracle prices (USD per whole collateral token) and health factors
pub const WAD: u128 = 1_000_000_000_000_000_000; // Represents 1 USD or a 1.0 ratio
pub const WAD_PRECISION: usize = 18;

pub const BPS: usize = 10_000; // 100%
pub const BPS_PRECISION: usize = 4;

/// Health factor above which a position is reported as Safe (1.5)
pub const HEALTH_SAFE_THRESHOLD_WAD: u128 = 1_500_000_000_000_000_000;

/// Default maximum loan-to-value (60%)
pub const DEFAULT_MAX_LTV_BPS: u64 = 6_000;

/// Default base borrow rate (8% APY)
pub const DEFAULT_BASE_RATE_BPS: u64 = 800;

/// Default utilization premium applied on top of the base rate at 100% utilization (10%)
pub const DEFAULT_RISK_PREMIUM_BPS: u64 = 1_000;

/// Floor of the issuance rate band (5% APY)
pub const DEFAULT_MIN_RATE_BPS: u64 = 500;

/// Ceiling of the issuance rate band (18% APY)
pub const DEFAULT_MAX_RATE_BPS: u64 = 1_800;

/// Pool activation threshold, in whole USD
pub const DEFAULT_ACTIVATION_THRESHOLD_USD: u64 = 50_000;

/// Per-borrower principal ceiling, in whole USD
pub const DEFAULT_PER_USER_CAP_USD: u64 = 500_000;

/// Smallest loan that can be opened, in whole USD
pub const DEFAULT_MIN_PRINCIPAL_USD: u64 = 100;

/// Oracle rounds older than this are rejected
pub const DEFAULT_MAX_PRICE_STALE_SECONDS: u64 = 15 * SECONDS_PER_MINUTE;

/// Failed sale attempts after which a liquidation is escalated to the operator
pub const DEFAULT_MAX_LIQUIDATION_ATTEMPTS: u32 = 3;

/// Repayment period recorded on every new loan (six months)
pub const DEFAULT_REPAYMENT_PERIOD_DAYS: u64 = 180;
