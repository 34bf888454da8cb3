pub mod state;

use self::state::{create_state, refresh_signal};
use crate::domain::a001_order::api::HttpOrderApi;
use crate::domain::a001_order::ui::details::{OrderDetails, OrderDetailsViewModel};
use crate::layout::notifications::use_notifications;
use crate::shared::components::stat_card::{CardTone, StatCard};
use crate::shared::format::format_money_opt;
use crate::shared::icons::icon;
use contracts::domain::a001_order::aggregate::Order;
use contracts::domain::a001_order::filter::StatusFilter;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

fn tone(filter: StatusFilter) -> CardTone {
    match filter {
        StatusFilter::All => CardTone::Neutral,
        StatusFilter::Pending => CardTone::Warning,
        StatusFilter::Completed => CardTone::Success,
        StatusFilter::Cancelled => CardTone::Error,
    }
}

fn card_icon(filter: StatusFilter) -> &'static str {
    match filter {
        StatusFilter::All => "orders",
        StatusFilter::Pending => "pending",
        StatusFilter::Completed => "completed",
        StatusFilter::Cancelled => "cancelled",
    }
}

/// Admin page: status counters, search, order list and the details panel
#[component]
#[allow(non_snake_case)]
pub fn OrderManage() -> impl IntoView {
    let state = create_state();
    let notifications = use_notifications();
    let details = OrderDetailsViewModel::new(state, notifications);

    let load_orders = move || {
        spawn_local(async move {
            let api = HttpOrderApi::from_config();
            match refresh_signal(state, &api).await {
                Ok(count) => log::info!("Loaded {} orders", count),
                Err(e) => notifications.error(e.to_string()),
            }
        });
    };

    // Load on mount
    Effect::new(move |_| {
        if !state.with_untracked(|s| s.store.is_loaded()) {
            load_orders();
        }
    });

    let select = move |id: String| {
        state.update(|s| {
            s.select_by_id(&id);
        });
    };

    let cards = [
        StatusFilter::All,
        StatusFilter::Pending,
        StatusFilter::Completed,
        StatusFilter::Cancelled,
    ]
    .into_iter()
    .map(|filter| {
        view! {
            <StatCard
                label=filter.label().to_string()
                icon_name=card_icon(filter).to_string()
                value=Signal::derive(move || state.with(|s| s.counts().get(filter)))
                tone=tone(filter)
                active=Signal::derive(move || state.with(|s| s.query.status == filter))
                on_click=Callback::new(move |_| state.update(|s| s.set_filter(filter)))
            />
        }
    })
    .collect::<Vec<_>>();

    let order_row = move |order: Order| {
        let id = order.identifier().unwrap_or_default().to_string();
        let status = order.status;
        let badge_class = format!("status-badge status-badge--{}", status.as_str());
        view! {
            <tr class="table__row--clickable" on:click=move |_| select(id.clone())>
                <td class="cell-truncate">{order.name.clone()}</td>
                <td>{order.phone1.clone()}</td>
                <td class="cell-truncate">{order.address.clone()}</td>
                <td class="text-right">{format_money_opt(order.total_amount)}</td>
                <td><span class=badge_class>{status.label()}</span></td>
            </tr>
        }
    };

    view! {
        <div class="page order-dashboard">
            <div class="page-header">
                <div class="page-header__text">
                    <h1 class="page-header__title">"Order Management"</h1>
                    <div class="page-header__subtitle">"View, filter and update customer orders"</div>
                </div>
                <div class="page-header__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| load_orders()
                        prop:disabled=move || state.with(|s| s.is_loading)
                    >
                        {icon("refresh")}
                        " Refresh"
                    </button>
                </div>
            </div>

            <div class="stat-cards">{cards}</div>

            <div class="order-dashboard__toolbar">
                <div class="search-box">
                    {icon("search")}
                    <input
                        class="form__input"
                        type="search"
                        placeholder="Search by name, phone or address"
                        prop:value=move || state.with(|s| s.query.search.clone())
                        on:input=move |ev| state.update(|s| s.set_search(event_target_value(&ev)))
                    />
                </div>
                <select
                    class="form__select"
                    prop:value=move || state.with(|s| s.query.status.as_str().to_string())
                    on:change=move |ev| {
                        let filter = StatusFilter::parse(&event_target_value(&ev));
                        state.update(|s| s.set_filter(filter));
                    }
                >
                    {[
                        StatusFilter::All,
                        StatusFilter::Pending,
                        StatusFilter::Completed,
                        StatusFilter::Cancelled,
                    ]
                        .into_iter()
                        .map(|f| {
                            let text = match f {
                                StatusFilter::All => "All Statuses",
                                other => other.label(),
                            };
                            view! { <option value=f.as_str()>{text}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            {move || {
                let loading = state.with(|s| s.is_loading && !s.store.is_loaded());
                let orders = state.with(|s| s.visible_orders());
                if loading {
                    view! { <div class="loading-spinner">"Loading orders..."</div> }.into_any()
                } else if orders.is_empty() {
                    view! { <div class="empty-state">"No orders found"</div> }.into_any()
                } else {
                    view! {
                        <div class="table-container">
                            <table class="table__data table--striped">
                                <thead>
                                    <tr>
                                        <th>"Customer"</th>
                                        <th>"Phone"</th>
                                        <th>"Address"</th>
                                        <th class="text-right">"Total"</th>
                                        <th>"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {orders.into_iter().map(order_row).collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        </div>
                    }.into_any()
                }
            }}

            <OrderDetails vm=details />
        </div>
    }
}
