use contracts::domain::a001_order::{OrderList, OrderRecord};
use contracts::domain::common::RowIndex;
use leptos::prelude::*;

/// Identifies one list request; only the latest one may replace the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// Shared client-side state of the order page.
///
/// The list is always replaced wholesale, never patched.
#[derive(Clone, Copy)]
pub struct OrderStore {
    pub orders: RwSignal<OrderList>,
    /// A mutation (and its follow-up reload) is in flight
    pub busy: RwSignal<bool>,
    /// Last failed load; the previous list stays on screen
    pub load_error: RwSignal<Option<String>>,
    latest_ticket: StoredValue<u64>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            orders: RwSignal::new(OrderList::default()),
            busy: RwSignal::new(false),
            load_error: RwSignal::new(None),
            latest_ticket: StoredValue::new(0),
        }
    }

    pub fn begin_load(&self) -> LoadTicket {
        self.latest_ticket.update_value(|t| *t += 1);
        LoadTicket(self.latest_ticket.get_value())
    }

    /// Replace the list if `ticket` is still the latest request.
    /// Returns `false` when the response was stale and got dropped.
    pub fn finish_load(&self, ticket: LoadTicket, list: OrderList) -> bool {
        if ticket.0 != self.latest_ticket.get_value() {
            return false;
        }
        self.orders.set(list);
        self.load_error.set(None);
        true
    }

    pub fn fail_load(&self, ticket: LoadTicket, message: String) {
        if ticket.0 == self.latest_ticket.get_value() {
            self.load_error.set(Some(message));
        }
    }

    /// Mark the store busy; `None` if another mutation already holds it
    pub fn try_begin_mutation(&self) -> Option<MutationGuard> {
        if self.busy.get_untracked() {
            return None;
        }
        self.busy.set(true);
        Some(MutationGuard { busy: self.busy })
    }

    pub fn get(&self, index: RowIndex) -> Option<OrderRecord> {
        self.orders.with_untracked(|list| list.get(index).cloned())
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> OrderList {
        self.orders.get_untracked()
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Clears the busy flag when dropped
pub struct MutationGuard {
    busy: RwSignal<bool>,
}

impl Drop for MutationGuard {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}
