multiversx_sc::imports!();

use common_errors::ERROR_REVENUE_SINK_NOT_SET;
use common_proxies::proxy_revenue_sink;
use common_structs::{RevenueEvent, RevenuePayout, RevenueSink, RevenueSource, RevenueSplit};

use crate::{cache::Cache, storage};

/// Splits protocol revenue between the reward and buyback sinks.
///
/// Every split lands in a durable outbox first; `dispatch_pending` delivers it later
/// so a failing sink never blocks the ledger. Entries leave the outbox only together
/// with a successful delivery, and sinks deduplicate on `(event_id, sink)`. Whatever a
/// sink sends back is queued again at the tail of the outbox.
#[multiversx_sc::module]
pub trait RevenueModule:
    storage::Storage + common_events::EventsModule + common_math::SharedMathModule
{
    /// Records `amount` of revenue from `position_id` and queues its split.
    ///
    /// Zero amounts produce no event.
    fn record_revenue(
        &self,
        cache: &mut Cache<Self>,
        position_id: u64,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        source: RevenueSource,
    ) {
        if amount.into_raw_units() == &BigUint::zero() {
            return;
        }

        let event_id = self.last_revenue_event_id().update(|id| {
            *id += 1;
            *id
        });
        let event = RevenueEvent {
            event_id,
            position_id,
            amount: amount.clone(),
            source,
            timestamp: cache.timestamp,
        };

        self.revenue_event(&event);
        cache.total_revenue = cache.total_revenue.clone() + amount.clone();
        self.split_revenue(&event);
    }

    /// Halves the event and appends each non-zero side to the outbox.
    fn split_revenue(&self, event: &RevenueEvent<Self::Api>) -> RevenueSplit<Self::Api> {
        let split = RevenueSplit::from_amount(&event.amount);
        let mut outbox = self.revenue_outbox();

        for (sink, amount) in [
            (RevenueSink::Reward, &split.reward),
            (RevenueSink::Buyback, &split.buyback),
        ] {
            if amount.into_raw_units() > &BigUint::zero() {
                outbox.push_back(RevenuePayout {
                    event_id: event.event_id,
                    sink,
                    amount: amount.clone(),
                    source: event.source,
                    timestamp: event.timestamp,
                });
            }
        }

        self.revenue_split_event(event.event_id, &split.reward, &split.buyback);
        split
    }

    /// Delivers up to `max_items` payouts, oldest first.
    ///
    /// A sink that hands back part or all of a payout ends the run; the returned amount
    /// goes back to the outbox and only the rest is booked as dispatched.
    ///
    /// # Returns
    /// - `usize`: Number of payouts taken from the outbox.
    fn dispatch_pending(
        &self,
        stable_token: &EgldOrEsdtTokenIdentifier,
        max_items: usize,
    ) -> usize {
        let reward_sink = self.reward_sink().get();
        let buyback_sink = self.buyback_sink().get();
        require!(
            !reward_sink.is_zero() && !buyback_sink.is_zero(),
            ERROR_REVENUE_SINK_NOT_SET
        );

        self.operation_lock().set(true);

        let mut dispatched = 0;
        while dispatched < max_items {
            let mut payout = match self.revenue_outbox().pop_front() {
                Some(payout) => payout,
                None => break,
            };
            dispatched += 1;

            let sink_address = match payout.sink {
                RevenueSink::Reward => &reward_sink,
                RevenueSink::Buyback => &buyback_sink,
            };

            let back_transfers = self
                .tx()
                .to(sink_address)
                .typed(proxy_revenue_sink::RevenueSinkProxy)
                .receive_revenue(payout.event_id, payout.sink, payout.source)
                .egld_or_single_esdt(stable_token, 0, payout.amount.into_raw_units())
                .returns(ReturnsBackTransfersReset)
                .sync_call();

            let mut returned = BigUint::zero();
            for payment in back_transfers.payments.iter() {
                if payment.token_identifier == *stable_token {
                    returned += &payment.amount;
                }
            }
            let returned = self.get_min(
                self.to_decimal(returned, payout.amount.scale()),
                payout.amount.clone(),
            );
            let delivered = payout.amount.clone() - returned.clone();

            if delivered.into_raw_units() > &BigUint::zero() {
                let totals = match payout.sink {
                    RevenueSink::Reward => self.reward_dispatched(),
                    RevenueSink::Buyback => self.buyback_dispatched(),
                };
                totals.update(|total| *total = total.clone() + delivered.clone());

                self.revenue_dispatched_event(
                    payout.event_id,
                    payout.sink,
                    sink_address,
                    &delivered,
                );
            }

            if returned.into_raw_units() > &BigUint::zero() {
                self.revenue_returned_event(payout.event_id, payout.sink, sink_address, &returned);
                payout.amount = returned;
                self.revenue_outbox().push_back(payout);
                break;
            }
        }

        self.operation_lock().clear();
        dispatched
    }

    /// Sum of all payouts still waiting in the outbox.
    fn pending_revenue(
        &self,
        zero: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.revenue_outbox()
            .iter()
            .fold(zero, |total, payout| total + payout.amount)
    }
}
