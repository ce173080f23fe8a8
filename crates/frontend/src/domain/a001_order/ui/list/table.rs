use crate::shared::icons::icon;
use contracts::domain::a001_order::report::REPORT_HEADERS;
use contracts::domain::a001_order::IndexedOrder;
use contracts::domain::common::RowIndex;
use leptos::prelude::*;

/// Order rows with edit/delete actions.
///
/// Actions report the row's index in the unfiltered list, never its
/// position in `rows`.
#[component]
pub fn OrderTable(
    #[prop(into)] rows: Signal<Vec<IndexedOrder>>,
    #[prop(into)] on_edit: Callback<RowIndex>,
    #[prop(into)] on_delete: Callback<RowIndex>,
    /// Disables row actions while a mutation is in flight
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        {REPORT_HEADERS
                            .iter()
                            .map(|h| view! { <th class="table__header-cell">{*h}</th> })
                            .collect_view()}
                        <th class="table__header-cell">{"Acciones"}</th>
                    </tr>
                </thead>
                <tbody id="pedidos-tbody">
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            return view! {
                                <tr>
                                    <td class="table__cell table__cell--empty" colspan="11">
                                        {"No hay pedidos"}
                                    </td>
                                </tr>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|row| {
                                let index = row.index;
                                view! {
                                    <tr class="table__row">
                                        {row
                                            .record
                                            .cells()
                                            .into_iter()
                                            .map(|cell| view! { <td class="table__cell">{cell}</td> })
                                            .collect_view()}
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--secondary"
                                                disabled=move || disabled.get()
                                                on:click=move |_| on_edit.run(index)
                                            >
                                                {icon("edit")}
                                                {"Editar"}
                                            </button>
                                            <button
                                                class="button button--danger"
                                                disabled=move || disabled.get()
                                                on:click=move |_| on_delete.run(index)
                                            >
                                                {icon("delete")}
                                                {"Eliminar"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
            <div class="table__footer">
                {move || format!("{} pedidos", rows.with(|r| r.len()))}
            </div>
        </div>
    }
}
