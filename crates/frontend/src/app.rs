use crate::domain::a001_order::model::{GlooTransport, OrderApi, OrderSyncClient};
use crate::domain::a001_order::store::OrderStore;
use crate::domain::a001_order::ui::list::OrdersPage;
use crate::shared::config::AppConfig;
use crate::shared::dialogs::BrowserDialogs;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // One store per page; every view reads and mutates through the sync client.
    let store = OrderStore::new();
    let api = OrderApi::new(config.remote.endpoint.clone(), Arc::new(GlooTransport));
    let client = OrderSyncClient::new(api, store, Arc::new(BrowserDialogs));

    provide_context(store);
    provide_context(client);
    provide_context(config);

    view! {
        <OrdersPage />
    }
}
