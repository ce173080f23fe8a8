use super::view_model::OrderDetailsViewModel;
use crate::shared::icons::icon;
use contracts::domain::a001_order::OrderForm;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Element id the list scrolls to when a row is opened for editing
pub const FORM_SECTION_ID: &str = "form-section";

fn form_field(
    form: RwSignal<OrderForm>,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    get: fn(&OrderForm) -> String,
    set: fn(&mut OrderForm, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=input_type
                id=id
                name=id
                prop:value=move || form.with(|f| get(f))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </div>
    }
}

#[component]
pub fn OrderDetails(vm: OrderDetailsViewModel) -> impl IntoView {
    let form = vm.form;
    let editing = vm.editing;
    let error = vm.error;
    let busy = vm.store().busy;

    let on_submit = {
        let vm = vm.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.save_command();
        }
    };
    let on_cancel = {
        let vm = vm.clone();
        move |_| vm.cancel_command()
    };

    view! {
        <section class="details-container order-details" id=FORM_SECTION_ID>
            <div class="details-header">
                <h3>
                    {move || match editing.get() {
                        Some(index) => format!("Editar pedido #{}", index.value() + 1),
                        None => "Nuevo pedido".to_string(),
                    }}
                </h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <form class="details-form" on:submit=on_submit>
                {form_field(form, "fecha", "Fecha", "date", |f| f.date.clone(), |f, v| f.date = v)}
                {form_field(form, "nombre", "Nombre y Apellido", "text", |f| f.full_name.clone(), |f, v| f.full_name = v)}
                {form_field(form, "telefono", "Teléfono", "tel", |f| f.phone.clone(), |f, v| f.phone = v)}
                {form_field(form, "producto", "Producto", "text", |f| f.product.clone(), |f, v| f.product = v)}
                {form_field(form, "codigo", "Código", "text", |f| f.code.clone(), |f, v| f.code = v)}
                {form_field(form, "color", "Color/Modelo", "text", |f| f.color_or_model.clone(), |f, v| f.color_or_model = v)}
                {form_field(form, "cantidad", "Cantidad", "text", |f| f.quantity.clone(), |f, v| f.quantity = v)}
                {form_field(form, "precio", "Precio Unitario", "text", |f| f.unit_price.clone(), |f, v| f.unit_price = v)}
                {form_field(form, "estado", "Estado", "text", |f| f.status.clone(), |f, v| f.status = v)}

                <div class="form-group">
                    <label>{"Total"}</label>
                    <output class="form-total">
                        {move || form.with(|f| f.total_preview()).map(|t| format!("{:.2}", t)).unwrap_or_default()}
                    </output>
                </div>

                <div class="details-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                        {icon("save")}
                        {move || if editing.get().is_some() { "Actualizar" } else { "Guardar" }}
                    </button>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        disabled=move || busy.get()
                        on:click=on_cancel
                    >
                        {icon("cancel")}
                        {"Cancelar"}
                    </button>
                </div>
            </form>
        </section>
    }
}
