use crate::domain::a001_order::api::HttpOrderApi;
use crate::domain::a001_order::editor::{EditorPhase, OrderEditor};
use crate::domain::a001_order::report::download_order_report;
use crate::domain::a001_order::ui::list::state::{save_order, OrderDashboardState};
use crate::layout::notifications::NotificationService;
use contracts::domain::a001_order::aggregate::Order;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel of the order details panel.
///
/// The editor itself lives in the dashboard state; this type only wires its
/// commands to the backend and to toasts.
#[derive(Clone, Copy)]
pub struct OrderDetailsViewModel {
    pub state: RwSignal<OrderDashboardState>,
    notifications: NotificationService,
}

impl OrderDetailsViewModel {
    pub fn new(state: RwSignal<OrderDashboardState>, notifications: NotificationService) -> Self {
        Self {
            state,
            notifications,
        }
    }

    pub fn phase(&self) -> EditorPhase {
        self.state.with(|s| s.editor.phase())
    }

    pub fn is_open(&self) -> bool {
        self.phase() != EditorPhase::NoSelection
    }

    pub fn is_saving(&self) -> bool {
        self.phase() == EditorPhase::Saving
    }

    pub fn is_editing(&self) -> bool {
        self.state.with(|s| s.editor.is_editing())
    }

    pub fn draft(&self) -> Option<Order> {
        self.state.with(|s| s.editor.draft().cloned())
    }

    /// Applies one field change to the draft
    pub fn edit(&self, apply: impl FnOnce(&mut OrderEditor)) {
        self.state.update(|s| apply(&mut s.editor));
    }

    pub fn begin_edit(&self) {
        self.state.update(|s| {
            s.editor.begin_edit();
        });
    }

    pub fn cancel_edit(&self) {
        self.state.update(|s| s.editor.cancel_edit());
    }

    pub fn close(&self) {
        self.state.update(|s| s.editor.clear());
    }

    /// Validates and sends the draft. On success the selection is cleared
    /// and the order list is fetched again.
    pub fn save_command(&self) {
        let state = self.state;
        let notifications = self.notifications;
        spawn_local(async move {
            let api = HttpOrderApi::from_config();
            match save_order(state, &api).await {
                Some(Ok(outcome)) => {
                    notifications.success("Order updated successfully");
                    if let Err(e) = outcome.refresh {
                        notifications.error(e.to_string());
                    }
                }
                Some(Err(e)) => {
                    log::warn!("Save rejected: {}", e);
                    notifications.error(e.to_string());
                }
                None => log::debug!("Details view closed before the save finished"),
            }
        });
    }

    /// Generates the PDF for the selected order and downloads it
    pub fn download_report_command(&self) {
        let Some(order) = self.state.with_untracked(|s| s.editor.selected().cloned()) else {
            return;
        };
        match download_order_report(&order) {
            Ok(file_name) => self
                .notifications
                .success(format!("Report {} downloaded", file_name)),
            Err(e) => {
                log::error!("{}", e);
                self.notifications.error(e.to_string());
            }
        }
    }
}
