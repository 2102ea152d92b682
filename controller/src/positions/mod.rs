pub mod accrual;
pub mod health;
pub mod ledger;
pub mod liquidation;
