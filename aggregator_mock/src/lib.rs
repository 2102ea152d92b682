#![no_std]

use common_structs::TimestampedPrice;

multiversx_sc::imports!();

/// Price oracle stand-in.
///
/// Keeps the latest round per pair under `rounds` and the pause flag under
/// `pause_module:paused`, the layout consumers read directly from storage.
#[multiversx_sc::contract]
pub trait AggregatorMock: multiversx_sc_modules::pause::PauseModule {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    /// Publishes `price` (WAD) stamped with the current block timestamp.
    #[only_owner]
    #[endpoint(setPrice)]
    fn set_price(&self, from: ManagedBuffer, to: ManagedBuffer, price: BigUint) {
        let timestamp = self.blockchain().get_block_timestamp();
        self.set_price_at(from, to, price, timestamp);
    }

    #[only_owner]
    #[endpoint(setPriceAt)]
    fn set_price_at(
        &self,
        from: ManagedBuffer,
        to: ManagedBuffer,
        price: BigUint,
        timestamp: u64,
    ) {
        let mapper = self.rounds(&from, &to);
        let round = if mapper.is_empty() {
            1
        } else {
            mapper.get().round + 1
        };

        mapper.set(TimestampedPrice {
            price,
            timestamp,
            asset_decimals: 18,
            round,
        });
    }

    #[only_owner]
    #[endpoint(clearPrice)]
    fn clear_price(&self, from: ManagedBuffer, to: ManagedBuffer) {
        self.rounds(&from, &to).clear();
    }

    #[view(latestPriceFeed)]
    fn latest_price_feed(
        &self,
        from: ManagedBuffer,
        to: ManagedBuffer,
    ) -> MultiValue2<BigUint, u64> {
        let round = self.rounds(&from, &to).get();
        (round.price, round.timestamp).into()
    }

    #[storage_mapper("rounds")]
    fn rounds(
        &self,
        from: &ManagedBuffer,
        to: &ManagedBuffer,
    ) -> SingleValueMapper<TimestampedPrice<Self::Api>>;
}
