use common_structs::{LendingParams, OracleConfig};

multiversx_sc::imports!();

/// In-memory snapshot of the pool aggregate, committed back to storage on drop.
///
/// **Scope**: Token configuration, lending parameters, pool totals and the collateral
/// price of the current transaction.
///
/// **Goal**: Every endpoint works on one consistent view of the pool and writes it
/// back exactly once.
///
/// **Fields**:
/// - Stablecoin totals are at `stable_decimals`, `total_collateral_locked` at `collateral_decimals`.
/// - `price` is read from the oracle at most once per transaction.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    pub collateral_token: EgldOrEsdtTokenIdentifier<C::Api>,
    pub collateral_decimals: usize,
    pub stable_token: EgldOrEsdtTokenIdentifier<C::Api>,
    pub stable_decimals: usize,
    pub params: LendingParams<C::Api>,
    pub oracle: OracleConfig<C::Api>,
    /// Stablecoins that can be lent out.
    pub liquid_balance: ManagedDecimal<C::Api, NumDecimals>,
    /// Principal owed by all open positions.
    pub total_principal_outstanding: ManagedDecimal<C::Api, NumDecimals>,
    pub total_disbursed: ManagedDecimal<C::Api, NumDecimals>,
    pub total_bad_debt: ManagedDecimal<C::Api, NumDecimals>,
    pub total_revenue: ManagedDecimal<C::Api, NumDecimals>,
    pub total_collateral_locked: ManagedDecimal<C::Api, NumDecimals>,
    pub pool_active: bool,
    pub closed_positions: u64,
    pub defaulted_positions: u64,
    /// The timestamp of the current block (seconds since Unix epoch).
    pub timestamp: u64,
    /// Collateral price in USD per whole token, WAD-scaled.
    pub price: Option<ManagedDecimal<C::Api, NumDecimals>>,
    pub operation_locked: bool,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule,
{
    /// Totals are seeded with zero at the right scale by `init`, so every mapper is set.
    pub fn new(sc_ref: &'a C) -> Self {
        Cache {
            collateral_token: sc_ref.collateral_token().get(),
            collateral_decimals: sc_ref.collateral_decimals().get(),
            stable_token: sc_ref.stable_token().get(),
            stable_decimals: sc_ref.stable_decimals().get(),
            params: sc_ref.lending_params().get(),
            oracle: sc_ref.oracle_config().get(),
            liquid_balance: sc_ref.liquid_balance().get(),
            total_principal_outstanding: sc_ref.total_principal_outstanding().get(),
            total_disbursed: sc_ref.total_disbursed().get(),
            total_bad_debt: sc_ref.total_bad_debt().get(),
            total_revenue: sc_ref.total_revenue().get(),
            total_collateral_locked: sc_ref.total_collateral_locked().get(),
            pool_active: sc_ref.pool_active().get(),
            closed_positions: sc_ref.closed_positions_count().get(),
            defaulted_positions: sc_ref.defaulted_positions_count().get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
            price: None,
            operation_locked: sc_ref.operation_lock().get(),
            sc_ref,
        }
    }

    /// Set while an external sale or delivery is in flight.
    pub fn is_locked(&self) -> bool {
        self.operation_locked
    }

    pub fn stable_zero(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref.to_decimal(BigUint::zero(), self.stable_decimals)
    }

    pub fn collateral_zero(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .to_decimal(BigUint::zero(), self.collateral_decimals)
    }

    pub fn to_stable(&self, amount: BigUint<C::Api>) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref.to_decimal(amount, self.stable_decimals)
    }

    pub fn to_collateral(&self, amount: BigUint<C::Api>) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref.to_decimal(amount, self.collateral_decimals)
    }

    pub fn has_liquidity(&self, amount: &ManagedDecimal<C::Api, NumDecimals>) -> bool {
        self.liquid_balance >= *amount
    }

    pub fn is_collateral(&self, token: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        self.collateral_token == *token
    }

    pub fn is_stable(&self, token: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        self.stable_token == *token
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    fn drop(&mut self) {
        // commit the pool aggregate; the operation lock is written directly around each external call
        self.sc_ref.liquid_balance().set(&self.liquid_balance);
        self.sc_ref
            .total_principal_outstanding()
            .set(&self.total_principal_outstanding);
        self.sc_ref.total_disbursed().set(&self.total_disbursed);
        self.sc_ref.total_bad_debt().set(&self.total_bad_debt);
        self.sc_ref.total_revenue().set(&self.total_revenue);
        self.sc_ref
            .total_collateral_locked()
            .set(&self.total_collateral_locked);
        self.sc_ref.pool_active().set(self.pool_active);
        self.sc_ref
            .closed_positions_count()
            .set(self.closed_positions);
        self.sc_ref
            .defaulted_positions_count()
            .set(self.defaulted_positions);
    }
}
