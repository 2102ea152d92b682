use common_errors::ERROR_SALE_VENUE_NOT_SET;
use common_proxies::proxy_sale_venue;

use crate::{cache::Cache, storage};

multiversx_sc::imports!();

/// What came back from the venue after offering the seized collateral.
pub enum SaleResult<M: ManagedTypeApi> {
    /// The venue took some or all of the collateral.
    ///
    /// `proceeds` is at the stablecoin scale and may be zero; `unsold` is the collateral
    /// handed back, at the collateral scale.
    Filled {
        proceeds: ManagedDecimal<M, NumDecimals>,
        unsold: ManagedDecimal<M, NumDecimals>,
    },
    /// The venue declined and returned the whole collateral without paying.
    Refunded,
}

#[multiversx_sc::module]
pub trait SaleModule: storage::Storage + common_math::SharedMathModule {
    /// Sells `collateral_amount` to the configured venue for stablecoins.
    ///
    /// The operation lock is held for the duration of the call, so the venue cannot
    /// re-enter any state-changing endpoint. Proceeds and unsold collateral are measured
    /// from the back transfers of this call only; tokens of any other kind are ignored
    /// and collateral returned above the amount offered is not credited to the position.
    ///
    /// # Errors
    /// - `ERROR_SALE_VENUE_NOT_SET`: No venue configured.
    fn sell_collateral(
        &self,
        cache: &Cache<Self>,
        collateral_amount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> SaleResult<Self::Api> {
        let venue = self.sale_venue().get();
        require!(!venue.is_zero(), ERROR_SALE_VENUE_NOT_SET);

        self.operation_lock().set(true);
        let back_transfers = self
            .tx()
            .to(&venue)
            .typed(proxy_sale_venue::SaleVenueProxy)
            .sell(cache.stable_token.clone(), BigUint::zero())
            .egld_or_single_esdt(
                &cache.collateral_token,
                0,
                collateral_amount.into_raw_units(),
            )
            .returns(ReturnsBackTransfersReset)
            .sync_call();
        self.operation_lock().clear();

        let mut proceeds = BigUint::zero();
        let mut refunded = BigUint::zero();
        for payment in back_transfers.payments.iter() {
            if cache.is_stable(&payment.token_identifier) {
                proceeds += &payment.amount;
            } else if cache.is_collateral(&payment.token_identifier) {
                refunded += &payment.amount;
            }
        }

        let unsold = self.get_min(cache.to_collateral(refunded), collateral_amount.clone());
        if proceeds == 0u64 && unsold == *collateral_amount {
            return SaleResult::Refunded;
        }

        SaleResult::Filled {
            proceeds: cache.to_stable(proceeds),
            unsold,
        }
    }
}
