use crate::domain::a001_order::model::OrderSyncClient;
use crate::domain::a001_order::store::OrderStore;
use contracts::domain::a001_order::{OrderError, OrderForm};
use contracts::domain::common::RowIndex;
use leptos::prelude::*;

/// ViewModel for the pedido form: field binding, edit state and the
/// create/update/delete commands.
#[derive(Clone)]
pub struct OrderDetailsViewModel {
    pub form: RwSignal<OrderForm>,
    /// Empty: next submit creates. Set: next submit updates that row.
    pub editing: RwSignal<Option<RowIndex>>,
    pub error: RwSignal<Option<String>>,
    client: OrderSyncClient,
}

impl OrderDetailsViewModel {
    pub fn new(client: OrderSyncClient) -> Self {
        Self {
            form: RwSignal::new(OrderForm::default()),
            editing: RwSignal::new(None),
            error: RwSignal::new(None),
            client,
        }
    }

    pub fn store(&self) -> OrderStore {
        self.client.store()
    }

    /// Load the record at `index` into the form
    pub fn edit(&self, index: RowIndex) {
        match self.store().get(index) {
            Some(record) => {
                self.form.set(OrderForm::from_record(&record));
                self.editing.set(Some(index));
                self.error.set(None);
            }
            None => log::warn!("No pedido at index {}", index),
        }
    }

    /// Clear the form and edit state; nothing is sent
    pub fn cancel_edit(&self) {
        self.form.set(OrderForm::default());
        self.editing.set(None);
    }

    /// Validate, then create or update. Validation failures never reach
    /// the remote store; on any failure the form keeps its contents.
    pub async fn save(&self) -> Result<(), OrderError> {
        let record = self.form.get_untracked().validate()?;
        match self.editing.get_untracked() {
            None => {
                self.client.create(record).await?;
                self.form.set(OrderForm::default());
            }
            Some(index) => {
                self.client.update(index, record).await?;
                self.cancel_edit();
            }
        }
        Ok(())
    }

    pub async fn delete(&self, index: RowIndex) -> Result<(), OrderError> {
        self.client.delete(index).await?;
        // Rows after the deleted one moved up by one
        match self.editing.get_untracked() {
            Some(current) if current == index => self.cancel_edit(),
            Some(current) if current > index => {
                self.editing.set(Some(RowIndex::new(current.value() - 1)))
            }
            _ => {}
        }
        Ok(())
    }

    /// Cancel from the UI; ignored while a save or delete is in flight so
    /// its completion cannot wipe input typed meanwhile
    pub fn cancel_command(&self) {
        if self.store().busy.get_untracked() {
            log::debug!("Cancel ignored while a mutation is in flight");
            return;
        }
        self.cancel_edit();
    }

    pub fn save_command(&self) {
        let vm = self.clone();
        self.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = vm.save().await {
                vm.report(e);
            }
        });
    }

    pub fn delete_command(&self, index: RowIndex) {
        let vm = self.clone();
        self.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = vm.delete(index).await {
                vm.report(e);
            }
        });
    }

    pub fn report(&self, e: OrderError) {
        if e.is_user_visible() {
            log::error!("{}", e);
            self.error.set(Some(e.to_string()));
        } else {
            log::info!("{}", e);
        }
    }
}
