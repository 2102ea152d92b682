#![no_std]

pub static ERROR_POOL_INACTIVE: &[u8] =
    b"Lending pool is not active yet, the activation threshold has not been reached.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Insufficient liquidity in the pool for this loan.";

pub static ERROR_BORROW_LIMIT_EXCEEDED: &[u8] =
    b"Requested principal exceeds the borrow limit of the collateral.";

pub static ERROR_USER_BORROW_CAP_EXCEEDED: &[u8] =
    b"Requested principal exceeds the per-user borrow cap.";

pub static ERROR_BORROW_BELOW_MINIMUM: &[u8] =
    b"Requested principal is below the minimum loan amount.";

pub static ERROR_OVER_REPAYMENT: &[u8] =
    b"Repayment exceeds the total amount owed, send at most the owed amount.";

pub static ERROR_POSITION_HEALTHY: &[u8] = b"Health not low enough for liquidation.";

pub static ERROR_POSITION_NOT_FOUND: &[u8] = b"Position not found.";

pub static ERROR_POSITION_ALREADY_OPEN: &[u8] = b"Borrower already has an open position.";

pub static ERROR_POSITION_NOT_ACTIVE: &[u8] = b"Position is no longer active.";

pub static ERROR_POSITION_NOT_OWNED: &[u8] = b"Position does not belong to the caller.";

pub static ERROR_ZERO_DEBT: &[u8] = b"Health factor is undefined for a position without debt.";

pub static ERROR_ORACLE_NOT_SET: &[u8] = b"Price oracle not set.";

pub static ERROR_ORACLE_UNAVAILABLE: &[u8] = b"Price oracle unavailable.";

pub static ERROR_PRICE_FEED_STALE: &[u8] = b"Price feed is stale.";

pub static ERROR_SALE_VENUE_NOT_SET: &[u8] = b"Collateral sale venue not set.";


pub static ERROR_IDENTICAL_REVENUE_SINKS: &[u8] =
    b"Reward and buyback sinks must be different contracts.";

pub static ERROR_CONCURRENT_MODIFICATION: &[u8] =
    b"Position is being modified by another operation.";

pub static ERROR_LIQUIDATION_ESCALATED: &[u8] =
    b"Liquidation escalated after repeated sale failures, awaiting operator retry.";

pub static ERROR_REVENUE_SINK_NOT_SET: &[u8] = b"Revenue sink not set.";

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_INVALID_PAYMENT_TOKEN: &[u8] = b"Invalid payment token.";

pub static ERROR_INVALID_LENDING_PARAMS: &[u8] = b"Invalid lending parameters.";

pub static ERROR_INVALID_STALENESS: &[u8] =
    b"Price staleness bound must be between one second and one hour.";

pub static ERROR_INVALID_ATTEMPTS: &[u8] = b"Liquidation attempts must be greater than zero.";

pub static ERROR_INVALID_DECIMALS: &[u8] = b"Token decimals are out of range.";

pub static ERROR_PAUSED: &[u8] = b"Contract is paused";
