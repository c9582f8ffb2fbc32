use std::sync::atomic::{AtomicU64, Ordering};

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const TOAST_MS: u32 = 3500;

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

impl Toast {
    fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed),
            kind,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, text)
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastViewProps {
    pub toast: Option<Toast>,
    pub on_close: Callback<()>,
}

/// Top-right notification. Hides itself after a few seconds; a newer toast restarts the clock.
#[function_component(ToastView)]
pub fn toast_view(props: &ToastViewProps) -> Html {
    {
        let on_close = props.on_close.clone();
        let toast_id = props.toast.as_ref().map(|toast| toast.id);
        use_effect_with_deps(move |toast_id| {
            let timeout = toast_id.map(|_| Timeout::new(TOAST_MS, move || on_close.emit(())));
            move || drop(timeout)
        }, toast_id);
    }

    let Some(toast) = props.toast.as_ref() else {
        return html! {};
    };

    let kind_class = match toast.kind {
        ToastKind::Success => "toast-success",
        ToastKind::Error => "toast-error",
    };
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={classes!("toast", kind_class)} role="status">
            <span class="toast-text">{&toast.text}</span>
            <button class="toast-close" onclick={close} aria-label="Dismiss">{"×"}</button>
        </div>
    }
}
