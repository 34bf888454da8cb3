use crate::shared::config::config;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Removes the toast with `id`; already dismissed ids are ignored
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Toast notifications shared through context
#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
    timeout_ms: u32,
}

impl NotificationService {
    pub fn new() -> Self {
        Self::with_timeout(config().ui.toast_timeout_ms)
    }

    pub fn with_timeout(timeout_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
            timeout_ms,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    fn show(&self, kind: ToastKind, message: String) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(svc.timeout_ms).await;
            svc.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        // the view may already be gone when the timer fires
        let _ = self.queue.try_update(|q| q.dismiss(id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().unwrap_or_else(|| {
        log::warn!("NotificationService not provided, toasts will not be shown");
        NotificationService::new()
    })
}

#[component]
pub fn ToastContainer() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toast-container" aria-live="polite">
            <For
                each=move || notifications.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class() role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="button button--icon toast__close"
                                on:click=move |_| notifications.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_push_and_dismiss() {
        let mut queue = NotificationQueue::default();
        let a = queue.push(ToastKind::Success, "Order updated successfully");
        let b = queue.push(ToastKind::Error, "Error fetching orders: Server error: 500");
        assert_ne!(a, b);
        assert_eq!(queue.toasts().len(), 2);

        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.toasts()[0].kind, ToastKind::Error);

        assert!(queue.dismiss(b));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut queue = NotificationQueue::default();
        let a = queue.push(ToastKind::Success, "one");
        queue.dismiss(a);
        let b = queue.push(ToastKind::Success, "two");
        assert!(b > a);
    }
}
