multiversx_sc::imports!();
use common_constants::{USD_TICKER, WAD_PRECISION};
use common_errors::{ERROR_ORACLE_NOT_SET, ERROR_ORACLE_UNAVAILABLE, ERROR_PRICE_FEED_STALE};
use common_structs::{OracleConfig, PriceFeed, TimestampedPrice};

use crate::{cache::Cache, storage};

/// Reads the collateral/USD price straight from the aggregator's storage.
///
/// Every failure mode (unset oracle, paused aggregator, missing round, zero
/// price, stale round) surfaces as an error value so callers can choose between
/// aborting and failing closed.
#[multiversx_sc::module]
pub trait OracleModule: storage::Storage + common_math::SharedMathModule {
    /// Collateral price for the current transaction, cached after the first read.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: USD per whole collateral token, WAD-scaled.
    fn get_collateral_price(&self, cache: &mut Cache<Self>) -> ManagedDecimal<Self::Api, NumDecimals> {
        match self.try_get_collateral_price(cache) {
            Ok(price) => price,
            Err(err) => sc_panic!(err),
        }
    }

    /// Price read for views, straight from the stored oracle configuration.
    fn get_collateral_price_now(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let oracle = self.oracle_config().get();
        let now = self.blockchain().get_block_timestamp();

        match self.try_read_price_feed(&oracle, now) {
            Ok(feed) => feed.price,
            Err(err) => sc_panic!(err),
        }
    }

    fn try_get_collateral_price(
        &self,
        cache: &mut Cache<Self>,
    ) -> Result<ManagedDecimal<Self::Api, NumDecimals>, &'static [u8]> {
        if let Some(price) = &cache.price {
            return Ok(price.clone());
        }

        let feed = self.try_read_price_feed(&cache.oracle, cache.timestamp)?;
        cache.price = Some(feed.price.clone());

        Ok(feed.price)
    }

    /// Validates and converts the latest round of `oracle.ticker`/USD.
    ///
    /// # Arguments
    /// - `oracle`: Aggregator address, ticker and staleness bound.
    /// - `now`: Current block timestamp.
    ///
    /// # Errors
    /// - `ERROR_ORACLE_NOT_SET`: No aggregator configured.
    /// - `ERROR_ORACLE_UNAVAILABLE`: Aggregator paused, no round yet or a zero price.
    /// - `ERROR_PRICE_FEED_STALE`: Round at least `max_price_stale_seconds` old.
    fn try_read_price_feed(
        &self,
        oracle: &OracleConfig<Self::Api>,
        now: u64,
    ) -> Result<PriceFeed<Self::Api>, &'static [u8]> {
        if oracle.address.is_zero() {
            return Err(ERROR_ORACLE_NOT_SET);
        }
        if self
            .price_aggregator_paused_state(oracle.address.clone())
            .get()
        {
            return Err(ERROR_ORACLE_UNAVAILABLE);
        }

        let to = ManagedBuffer::new_from_bytes(USD_TICKER);
        let round_values = self.rounds(oracle.address.clone(), oracle.ticker.clone(), to.clone());
        if round_values.is_empty() {
            return Err(ERROR_ORACLE_UNAVAILABLE);
        }

        let round = round_values.get();
        if round.price == 0u64 {
            return Err(ERROR_ORACLE_UNAVAILABLE);
        }

        // a round stamped ahead of the block is treated as fresh
        if now.saturating_sub(round.timestamp) >= oracle.max_price_stale_seconds {
            return Err(ERROR_PRICE_FEED_STALE);
        }

        Ok(self.make_price_feed(oracle.ticker.clone(), to, round))
    }

    #[inline]
    fn make_price_feed(
        &self,
        from: ManagedBuffer,
        to: ManagedBuffer,
        last_price: TimestampedPrice<Self::Api>,
    ) -> PriceFeed<Self::Api> {
        PriceFeed {
            round_id: last_price.round,
            from,
            to,
            timestamp: last_price.timestamp,
            price: self.to_decimal(last_price.price, WAD_PRECISION),
        }
    }
}
