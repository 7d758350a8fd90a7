//! Transient notifications.
//!
//! [`Toaster`] is the browser side of [`lollipop::Notifier`]: every message
//! becomes a toast that removes itself after the configured duration.

use std::time::Duration;

use leptos::prelude::*;
use lollipop::{IconName, Notifier};

use super::Icon;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    id: u64,
    message: String,
}

#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    duration: Duration,
}

impl Toaster {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            duration: Duration::from_millis(u64::from(duration_ms)),
        }
    }

    fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Notifier for Toaster {
    fn success(&self, message: &str) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                message: message.to_string(),
            })
        });

        let toaster = *self;
        set_timeout(move || toaster.dismiss(id), self.duration);
    }
}

#[component]
pub fn ToastStack(toaster: Toaster) -> impl IntoView {
    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toaster.toasts.get()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast toast-success">
                            <Icon name=IconName::CheckCircle size=20 />
                            <span class="toast-message">{toast.message}</span>
                            <button
                                type="button"
                                class="toast-close"
                                aria-label="Закрыть"
                                on:click=move |_| toaster.dismiss(id)
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
