mod state;
mod table;

pub use state::OrderListState;
pub use table::OrderTable;

use crate::domain::a001_order::model::OrderSyncClient;
use crate::domain::a001_order::store::OrderStore;
use crate::domain::a001_order::ui::details::{OrderDetails, OrderDetailsViewModel, FORM_SECTION_ID};
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use contracts::domain::a001_order::OrderFilter;
use contracts::domain::common::RowIndex;
use leptos::prelude::*;

fn scroll_to_form() {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(FORM_SECTION_ID))
    else {
        return;
    };
    element.scroll_into_view();
}

fn filter_input(
    draft: RwSignal<OrderFilter>,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    get: fn(&OrderFilter) -> String,
    set: fn(&mut OrderFilter, String),
) -> impl IntoView {
    view! {
        <label class="filter-panel__field" for=id>
            <span>{label}</span>
            <input
                type=input_type
                id=id
                prop:value=move || draft.with(|f| get(f))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|f| set(f, value));
                }
            />
        </label>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn OrdersPage() -> impl IntoView {
    let client = use_context::<OrderSyncClient>().expect("OrderSyncClient not found in context");
    let store = use_context::<OrderStore>().expect("OrderStore not found in context");
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");

    let vm = OrderDetailsViewModel::new(client.clone());
    let state = OrderListState::new();
    let export_error = RwSignal::new(None::<String>);

    let reload = {
        let client = client.clone();
        move || {
            let client = client.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // failures land in store.load_error
                let _ = client.list().await;
            });
        }
    };

    // Initial load on mount
    reload();

    let rows = Signal::derive(move || state.visible_rows(store));
    let busy = Signal::derive(move || store.busy.get());

    let on_edit = {
        let vm = vm.clone();
        Callback::new(move |index: RowIndex| {
            vm.edit(index);
            scroll_to_form();
        })
    };
    let on_delete = {
        let vm = vm.clone();
        Callback::new(move |index: RowIndex| vm.delete_command(index))
    };

    let file_name = config.report.file_name.clone();
    let on_export = move |_| match state.export_pdf(store, &file_name) {
        Ok(()) => export_error.set(None),
        Err(e) => {
            log::error!("{}", e);
            export_error.set(Some(e.to_string()));
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("orders")}
                    <h2>{"Pedidos"}</h2>
                </div>
                <div class="page__header-right">
                    <button class="button button--secondary" on:click=move |_| reload()>
                        {icon("refresh")}
                        {"Recargar"}
                    </button>
                </div>
            </div>

            {move || store.load_error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || export_error.get().map(|e| view! { <div class="error">{e}</div> })}

            <OrderDetails vm=vm.clone() />

            <div class="filter-panel">
                {filter_input(state.draft, "fecha-desde", "Desde", "date", |f| f.date_from.clone(), |f, v| f.date_from = v)}
                {filter_input(state.draft, "fecha-hasta", "Hasta", "date", |f| f.date_to.clone(), |f, v| f.date_to = v)}
                {filter_input(state.draft, "busqueda", "Buscar nombre", "text", |f| f.name_query.clone(), |f, v| f.name_query = v)}
                <div class="filter-panel__actions">
                    <button class="button button--primary" on:click=move |_| state.apply_filter()>
                        {icon("filter")}
                        {"Filtrar"}
                        {move || {
                            let count = state.applied.with(|f| f.active_count());
                            (count > 0).then(|| view! { <span class="badge">{count}</span> })
                        }}
                    </button>
                    <button
                        class="button button--secondary"
                        disabled=move || state.is_unfiltered()
                        on:click=move |_| state.clear_filter()
                    >
                        {icon("x")}
                        {"Limpiar"}
                    </button>
                    <button class="button button--secondary" on:click=on_export>
                        {icon("download")}
                        {"Exportar PDF"}
                    </button>
                </div>
            </div>

            <OrderTable rows=rows on_edit=on_edit on_delete=on_delete disabled=busy />
        </div>
    }
}
