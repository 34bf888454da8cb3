use super::view_model::OrderDetailsViewModel;
use crate::domain::a001_order::editor::EditorPhase;
use crate::shared::format::{format_money, format_money_opt};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_order::aggregate::{Order, OrderStatus};
use leptos::prelude::*;

fn status_badge(status: OrderStatus) -> impl IntoView {
    let class = format!("status-badge status-badge--{}", status.as_str());
    view! { <span class=class>{status.label()}</span> }
}

fn items_table(order: &Order) -> impl IntoView {
    let rows = order
        .cart_items
        .iter()
        .map(|item| {
            view! {
                <tr>
                    <td>{item.product_name.clone()}</td>
                    <td>{item.color_or_na().to_string()}</td>
                    <td class="text-right">{item.quantity}</td>
                    <td class="text-right">{format_money(item.price)}</td>
                    <td class="text-right">{format_money(item.line_total())}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <table class="table__data table--striped order-items">
            <thead>
                <tr>
                    <th>"Product"</th>
                    <th>"Color"</th>
                    <th class="text-right">"Qty"</th>
                    <th class="text-right">"Price"</th>
                    <th class="text-right">"Total"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
            <tfoot>
                <tr>
                    <td colspan="4" class="text-right">"Order Total"</td>
                    <td class="text-right">{format_money_opt(order.total_amount)}</td>
                </tr>
            </tfoot>
        </table>
    }
}

fn read_only(order: Order) -> impl IntoView {
    view! {
        <div class="detail-grid">
            <div class="detail-grid__label">"Order ID"</div>
            <div>{order.identifier().unwrap_or("N/A").to_string()}</div>
            <div class="detail-grid__label">"Customer"</div>
            <div>{order.name.clone()}</div>
            <div class="detail-grid__label">"Primary Phone"</div>
            <div>{order.phone1.clone()}</div>
            <div class="detail-grid__label">"Secondary Phone"</div>
            <div>{order.phone2_or_na().to_string()}</div>
            <div class="detail-grid__label">"Address"</div>
            <div>{order.address.clone()}</div>
            <div class="detail-grid__label">"Status"</div>
            <div>{status_badge(order.status)}</div>
        </div>
        {items_table(&order)}
    }
}

#[component]
fn TextField(
    label: &'static str,
    id: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            <input
                class="form__input"
                type="text"
                id=id
                prop:value=move || value.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

fn edit_form(vm: OrderDetailsViewModel) -> impl IntoView {
    let field = move |read: fn(&Order) -> String| {
        Signal::derive(move || vm.draft().as_ref().map(read).unwrap_or_default())
    };
    let saving = Signal::derive(move || vm.is_saving());

    view! {
        <div class="detail-form">
            <TextField
                label="Customer Name"
                id="order-name"
                value=field(|o| o.name.clone())
                on_input=Callback::new(move |v| vm.edit(|e| e.set_name(v)))
                disabled=saving
            />
            <TextField
                label="Primary Phone"
                id="order-phone1"
                value=field(|o| o.phone1.clone())
                on_input=Callback::new(move |v| vm.edit(|e| e.set_phone1(v)))
                disabled=saving
            />
            <TextField
                label="Secondary Phone"
                id="order-phone2"
                value=field(|o| o.phone2.clone().unwrap_or_default())
                on_input=Callback::new(move |v| vm.edit(|e| e.set_phone2(v)))
                disabled=saving
            />
            <TextField
                label="Address"
                id="order-address"
                value=field(|o| o.address.clone())
                on_input=Callback::new(move |v| vm.edit(|e| e.set_address(v)))
                disabled=saving
            />
            <div class="form__group">
                <label class="form__label" for="order-status">"Status"</label>
                <select
                    class="form__select"
                    id="order-status"
                    prop:value=move || vm.draft().map(|o| o.status.as_str()).unwrap_or_default()
                    prop:disabled=move || saving.get()
                    on:change=move |ev| {
                        if let Some(status) = OrderStatus::from_str_opt(&event_target_value(&ev)) {
                            vm.edit(|e| e.set_status(status));
                        }
                    }
                >
                    {OrderStatus::ALL
                        .iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>
        </div>
        {move || vm.draft().map(|order| items_table(&order))}
    }
}

#[component]
pub fn OrderDetails(vm: OrderDetailsViewModel) -> impl IntoView {
    let title = Signal::derive(move || match vm.phase() {
        EditorPhase::Editing | EditorPhase::Saving => "Edit Order".to_string(),
        _ => "Order Details".to_string(),
    });

    let actions: ChildrenFn = std::sync::Arc::new(move || {
        view! {
            {move || {
                if vm.is_editing() {
                    view! {
                        <button
                            class="button button--secondary"
                            prop:disabled=move || vm.is_saving()
                            on:click=move |_| vm.cancel_edit()
                        >
                            "Cancel"
                        </button>
                        <button
                            class="button button--primary"
                            prop:disabled=move || vm.is_saving()
                            on:click=move |_| vm.save_command()
                        >
                            {icon("save")}
                            {move || if vm.is_saving() { " Saving..." } else { " Save" }}
                        </button>
                    }
                    .into_any()
                } else {
                    view! {
                        <button class="button button--secondary" on:click=move |_| vm.download_report_command()>
                            {icon("download")}
                            " Report"
                        </button>
                        <button class="button button--primary" on:click=move |_| vm.begin_edit()>
                            {icon("edit")}
                            " Edit"
                        </button>
                    }
                    .into_any()
                }
            }}
        }
        .into_any()
    });

    view! {
        <Show when=move || vm.is_open()>
            {
                let actions = actions.clone();
                move || {
                    view! {
                        <Modal
                            title=title
                            on_close=Callback::new(move |_| vm.close())
                            locked=Signal::derive(move || vm.is_saving())
                            action_buttons=actions.clone()
                        >
                            {move || {
                                if vm.is_editing() {
                                    edit_form(vm).into_any()
                                } else {
                                    vm.draft().map(read_only).into_any()
                                }
                            }}
                        </Modal>
                    }
                }
            }
        </Show>
    }
}
