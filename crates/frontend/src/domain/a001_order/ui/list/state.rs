use crate::domain::a001_order::store::OrderStore;
use crate::shared::export;
use contracts::domain::a001_order::{IndexedOrder, OrderError, OrderFilter, OrderReport};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct OrderListState {
    /// Criteria as currently typed in the filter inputs
    pub draft: RwSignal<OrderFilter>,
    /// Criteria committed with the filter button; kept across reloads
    pub applied: RwSignal<OrderFilter>,
}

impl OrderListState {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(OrderFilter::default()),
            applied: RwSignal::new(OrderFilter::default()),
        }
    }

    pub fn apply_filter(&self) {
        self.applied.set(self.draft.get_untracked());
    }

    pub fn clear_filter(&self) {
        self.draft.set(OrderFilter::default());
        self.applied.set(OrderFilter::default());
    }

    /// Nothing typed and nothing applied
    pub fn is_unfiltered(&self) -> bool {
        self.draft.with(|f| f.is_empty()) && self.applied.with(|f| f.is_empty())
    }

    /// Rows to render, each carrying its index in the unfiltered list
    pub fn visible_rows(&self, store: OrderStore) -> Vec<IndexedOrder> {
        let filter = self.applied.get();
        store.orders.with(|list| filter.apply(list))
    }

    /// Build the report from the full list and the filter inputs as typed
    pub fn build_report(&self, store: OrderStore) -> OrderReport {
        let filter = self.draft.get_untracked();
        store
            .orders
            .with_untracked(|list| OrderReport::build(list, &filter))
    }

    pub fn export_pdf(&self, store: OrderStore, file_name: &str) -> Result<(), OrderError> {
        let report = self.build_report(store);
        log::info!(
            "Exporting {} pedidos to {} (total {:.2})",
            report.rows.len(),
            file_name,
            report.grand_total
        );
        export::export_report_pdf(&report, file_name).map_err(OrderError::Export)
    }
}

impl Default for OrderListState {
    fn default() -> Self {
        Self::new()
    }
}
