//! Flash messages that hide themselves after a few seconds

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::config::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct Notifications {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.toasts.update(|list| list.push(Toast { id, kind, message }));

        let this = *self;
        Timeout::new(config().ui.toast_timeout_ms, move || this.dismiss(id)).forget();
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.try_update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().expect("Notifications not provided")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || notifications.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| notifications.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
