use common_structs::Position;

use crate::{storage, validation};

multiversx_sc::imports!();

/// Brings open positions up to date with simple interest.
///
/// Accrual is idempotent per timestamp, so the same position can be touched by a
/// repayment, a health check and a bulk pass in one block without double charging.
#[multiversx_sc::module]
pub trait PositionAccrualModule:
    storage::Storage
    + validation::ValidationModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Accrues `position` to `now` and emits `interest_accrued` when anything was added.
    ///
    /// The position is not written back; callers store it with the rest of their changes.
    fn accrue_with_event(
        &self,
        position: &mut Position<Self::Api>,
        now: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let delta = self.accrue_position(position, now);
        if delta.into_raw_units() > &BigUint::zero() {
            self.interest_accrued_event(
                position.position_id,
                &delta,
                &position.interest_accrued,
                now,
            );
        }

        delta
    }

    /// Accrues and stores one position; non-active positions are left untouched.
    ///
    /// # Returns
    /// - `bool`: Whether the position was active and processed.
    fn accrue_stored_position(&self, position_id: u64, now: u64) -> bool {
        let mut position = self.require_position(position_id);
        if position.status != common_structs::PositionStatus::Active {
            return false;
        }

        self.accrue_with_event(&mut position, now);
        self.positions(position_id).set(&position);
        true
    }

    /// Accrues the next batch of open positions; `None` covers all of them.
    ///
    /// # Returns
    /// - `usize`: Number of active positions processed.
    fn accrue_all_positions(&self, now: u64, max_items: Option<usize>) -> usize {
        let mut processed = 0;
        for position_id in self.next_batch(self.accrual_cursor(), max_items).iter() {
            if self.accrue_stored_position(position_id, now) {
                processed += 1;
            }
        }

        processed
    }

    /// Picks up to `max_items` open position ids, continuing round-robin from `cursor`.
    ///
    /// Without a limit every open position is returned and the cursor is left alone.
    /// Removals reorder `open_positions`, so a position may be visited twice or skipped
    /// for one round while the set changes; no position is skipped for longer.
    fn next_batch(
        &self,
        cursor: SingleValueMapper<Self::Api, usize>,
        max_items: Option<usize>,
    ) -> ManagedVec<Self::Api, u64> {
        let open_positions = self.open_positions();
        let len = open_positions.len();
        let mut batch = ManagedVec::new();
        if len == 0 {
            return batch;
        }

        let (start, take) = match max_items {
            Some(limit) => (cursor.get() % len, core::cmp::min(limit, len)),
            None => (0, len),
        };
        for offset in 0..take {
            batch.push(open_positions.get_by_index((start + offset) % len + 1));
        }

        if max_items.is_some() {
            cursor.set((start + take) % len);
        }

        batch
    }
}
