#![no_std]

use common_constants::{BPS, WAD};

multiversx_sc::imports!();

/// Collateral sale venue used by the lending tests.
///
/// Pays `execution_price` units of the wanted token per whole sold token (10^18 raw units),
/// out of liquidity provided through `fund`. With a fill ratio set, only that share of
/// every order is sold and the rest is handed back alongside the proceeds.
#[multiversx_sc::contract]
pub trait SwapMock {
    #[init]
    fn init(&self, execution_price: BigUint) {
        self.execution_price().set(execution_price);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[payable("*")]
    #[endpoint(fund)]
    fn fund(&self) {}

    #[payable("*")]
    #[endpoint(sell)]
    fn sell(&self, wanted_token: EgldOrEsdtTokenIdentifier, min_amount_out: BigUint) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_or_single_esdt();

        // Venue unavailable, hand the tokens back untouched
        if self.fail_mode().get() {
            self.tx().to(&caller).payment(payment).transfer();
            return;
        }

        self.sales_count().update(|count| *count += 1);

        if self.black_hole_mode().get() {
            return;
        }

        let sold = match self.fill_bps().get() {
            0 => payment.amount.clone(),
            fill_bps => &payment.amount * &BigUint::from(fill_bps) / &BigUint::from(BPS as u64),
        };
        let unsold = &payment.amount - &sold;

        let proceeds = &sold * &self.execution_price().get() / BigUint::from(WAD);
        require!(proceeds >= min_amount_out, "Slippage exceeded");

        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&wanted_token, 0, &proceeds)
            .transfer_if_not_empty();
        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&payment.token_identifier, 0, &unsold)
            .transfer_if_not_empty();
    }

    #[endpoint(setExecutionPrice)]
    fn set_execution_price(&self, execution_price: BigUint) {
        self.execution_price().set(execution_price);
    }

    #[endpoint(setFailMode)]
    fn set_fail_mode(&self, fail: bool) {
        self.fail_mode().set(fail);
    }

    // Keeps the sold tokens and pays nothing
    #[endpoint(setBlackHoleMode)]
    fn set_black_hole_mode(&self, enabled: bool) {
        self.black_hole_mode().set(enabled);
    }

    /// Share of each order that gets filled, in basis points; zero fills everything.
    #[endpoint(setFillBps)]
    fn set_fill_bps(&self, fill_bps: u64) {
        require!(fill_bps <= BPS as u64, "Fill ratio above 100%");
        self.fill_bps().set(fill_bps);
    }

    #[view(getExecutionPrice)]
    #[storage_mapper("execution_price")]
    fn execution_price(&self) -> SingleValueMapper<BigUint>;

    #[view(getSalesCount)]
    #[storage_mapper("sales_count")]
    fn sales_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("fail_mode")]
    fn fail_mode(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("fill_bps")]
    fn fill_bps(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("black_hole_mode")]
    fn black_hole_mode(&self) -> SingleValueMapper<bool>;
}
