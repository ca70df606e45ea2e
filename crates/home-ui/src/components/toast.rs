use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastLevel {
    Error,
    Warning,
}

impl ToastLevel {
    fn class(&self) -> &'static str {
        match self {
            ToastLevel::Error => "toast-error",
            ToastLevel::Warning => "toast-warning",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub level: ToastLevel,
}

/// Transient notices. Each one dismisses itself after five seconds.
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastContext {
    pub fn push(&self, message: impl Into<String>, level: ToastLevel) {
        let currentId = self.next_id.get_untracked();
        self.next_id.set(currentId + 1);

        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id: currentId,
                message: message.into(),
                level,
            });
        });

        let toasts = self.toasts;
        set_timeout(
            move || {
                toasts.update(|list| list.retain(|t| t.id != currentId));
            },
            std::time::Duration::from_secs(5),
        );
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(message, ToastLevel::Warning);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message, ToastLevel::Error);
    }
}

/// Provides toast context and renders the toast container.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let ctx = ToastContext {
        toasts: RwSignal::new(Vec::new()),
        next_id: RwSignal::new(0),
    };
    provide_context(ctx);

    let toasts = ctx.toasts;

    view! {
        {children()}
        <div class="toast-container">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                let:toast
            >
                <div class=format!("toast {}", toast.level.class())>
                    {toast.message.clone()}
                </div>
            </For>
        </div>
    }
}
