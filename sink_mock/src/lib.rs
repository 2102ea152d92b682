#![no_std]

use common_structs::{RevenueSink, RevenueSource};

multiversx_sc::imports!();

/// Downstream revenue consumer (reward or buyback engine stand-in).
///
/// Deliveries are keyed by `(event_id, sink)`; a repeated key is handed back to the
/// sender instead of being credited twice. In reject mode every delivery is refunded.
#[multiversx_sc::contract]
pub trait SinkMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[payable("*")]
    #[endpoint(receiveRevenue)]
    fn receive_revenue(&self, event_id: u64, sink: RevenueSink, source: RevenueSource) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_or_single_esdt();

        if self.reject_mode().get() {
            self.rejections().update(|count| *count += 1);
            self.tx().to(&caller).payment(payment).transfer();
            return;
        }

        let seen = self.seen_delivery(event_id, sink);
        if seen.get() {
            self.duplicates().update(|count| *count += 1);
            self.tx().to(&caller).payment(payment).transfer();
            return;
        }
        seen.set(true);

        self.total_received()
            .update(|total| *total += &payment.amount);
        self.deliveries().update(|count| *count += 1);
        self.revenue_received_event(event_id, sink, source, &payment.amount);
    }

    #[endpoint(setRejectMode)]
    fn set_reject_mode(&self, reject: bool) {
        self.reject_mode().set(reject);
    }

    #[event("revenue_received")]
    fn revenue_received_event(
        &self,
        #[indexed] event_id: u64,
        #[indexed] sink: RevenueSink,
        #[indexed] source: RevenueSource,
        #[indexed] amount: &BigUint,
    );

    #[view(isEventSeen)]
    fn is_event_seen(&self, event_id: u64, sink: RevenueSink) -> bool {
        self.seen_delivery(event_id, sink).get()
    }

    #[storage_mapper("seen_delivery")]
    fn seen_delivery(&self, event_id: u64, sink: RevenueSink) -> SingleValueMapper<bool>;

    #[storage_mapper("reject_mode")]
    fn reject_mode(&self) -> SingleValueMapper<bool>;

    #[view(getTotalReceived)]
    #[storage_mapper("total_received")]
    fn total_received(&self) -> SingleValueMapper<BigUint>;

    #[view(getDeliveries)]
    #[storage_mapper("deliveries")]
    fn deliveries(&self) -> SingleValueMapper<u64>;

    #[view(getDuplicates)]
    #[storage_mapper("duplicates")]
    fn duplicates(&self) -> SingleValueMapper<u64>;

    #[view(getRejections)]
    #[storage_mapper("rejections")]
    fn rejections(&self) -> SingleValueMapper<u64>;
}
