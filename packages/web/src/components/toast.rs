//! Toast provider and viewport

use dioxus::prelude::*;
use std::time::Duration;

use crate::state::{Notifier, Toast, ToastVariant};

#[derive(Clone, Debug, PartialEq)]
pub struct ActiveToast {
    pub id: u64,
    pub toast: Toast,
}

/// Toasts currently on screen
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: Signal<Vec<ActiveToast>>,
    next_id: Signal<u64>,
}

impl ToastContext {
    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|t| t.id != id);
    }
}

impl Notifier for ToastContext {
    fn notify(&self, toast: Toast) {
        let mut toasts = self.toasts;
        let mut next_id = self.next_id;

        let id = *next_id.peek();
        next_id.set(id + 1);

        let duration = toast.duration;
        toasts.write().push(ActiveToast { id, toast });

        // Outlive the page that raised the toast
        let ctx = *self;
        spawn_forever(async move {
            sleep(duration).await;
            ctx.dismiss(id);
        });
    }
}

async fn sleep(duration: Duration) {
    #[cfg(feature = "web")]
    gloo_timers::future::sleep(duration).await;

    #[cfg(all(feature = "server", not(feature = "web")))]
    tokio::time::sleep(duration).await;

    #[cfg(not(any(feature = "web", feature = "server")))]
    let _ = duration;
}

/// Provides toasts to the entire app and renders them
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::<ActiveToast>::new);
    let next_id = use_signal(|| 0u64);

    let ctx = use_context_provider(|| ToastContext { toasts, next_id });

    rsx! {
        {children}

        div {
            class: "fixed bottom-4 right-4 z-50 flex flex-col gap-2",
            for ActiveToast { id, toast } in toasts.read().iter().cloned() {
                ToastItem {
                    key: "{id}",
                    toast,
                    on_close: move |_| ctx.dismiss(id)
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_close: EventHandler<()>,
}

#[component]
fn ToastItem(props: ToastItemProps) -> Element {
    let style = match props.toast.variant {
        ToastVariant::Success => "bg-dark-3 border-green-600",
        ToastVariant::Info => "bg-dark-3 border-blue-600",
        ToastVariant::Destructive => "bg-red-900 border-red-600",
    };

    rsx! {
        div {
            class: "min-w-64 max-w-sm rounded-lg border-l-4 {style} px-4 py-3 text-light-1 shadow-lg flex items-start gap-3",
            div {
                class: "flex-1",
                p { class: "font-semibold text-sm", "{props.toast.title}" }
                if let Some(description) = &props.toast.description {
                    p { class: "text-xs text-light-3 mt-1", "{description}" }
                }
            }
            if props.toast.closable {
                button {
                    class: "text-light-3 hover:text-light-1 text-sm",
                    onclick: move |_| props.on_close.call(()),
                    "\u{2715}"
                }
            }
        }
    }
}

/// Hook to access the toast context
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>()
}
