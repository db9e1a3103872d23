use leptos::*;

pub const AUTO_HIDE_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

impl Severity {
    fn alert_class(self) -> &'static str {
        match self {
            Severity::Success => {
                "bg-status-success-bg border border-status-success-border text-status-success-text"
            }
            Severity::Error => {
                "bg-status-error-bg border border-status-error-border text-status-error-text"
            }
        }
    }

    fn role(self) -> &'static str {
        match self {
            Severity::Success => "status",
            Severity::Error => "alert",
        }
    }
}

/// Transient outcome message. `serial` changes with every new message so a
/// pending auto-hide timer can tell whether it still owns what is on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    pub visible: bool,
    pub message: String,
    pub severity: Severity,
    pub serial: u32,
}

impl Notification {
    pub fn show(&mut self, severity: Severity, message: impl Into<String>) {
        self.visible = true;
        self.message = message.into();
        self.severity = severity;
        self.serial = self.serial.wrapping_add(1);
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Hides only if the notification with `serial` is still the current one.
    pub fn expire(&mut self, serial: u32) {
        if self.serial == serial {
            self.visible = false;
        }
    }
}

/// Serial of the notification that should currently be counting down, if any.
/// Changes only when a new message is shown or the current one is hidden.
pub(crate) fn auto_hide_key(notification: Signal<Notification>) -> Memo<Option<u32>> {
    create_memo(move |_| notification.with(|n| n.visible.then_some(n.serial)))
}

#[component]
pub fn Snackbar(
    #[prop(into)] notification: Signal<Notification>,
    on_close: Callback<()>,
    on_expire: Callback<u32>,
    #[prop(optional)] auto_hide_ms: Option<u32>,
) -> impl IntoView {
    let auto_hide_ms = auto_hide_ms.unwrap_or(AUTO_HIDE_MS);

    let key = auto_hide_key(notification);
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Timeout;

        // Replacing the stored timeout drops (and cancels) the previous one.
        let timer = store_value(None::<Timeout>);
        let _ = watch(
            move || key.get(),
            move |key, _, _| {
                timer.set_value(key.map(|serial| {
                    Timeout::new(auto_hide_ms, move || on_expire.call(serial))
                }));
            },
            true,
        );
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (auto_hide_ms, on_expire, key);

    view! {
        <Show when=move || notification.with(|n| n.visible)>
            <div class="fixed top-4 right-4 z-[80] w-full max-w-sm">
                <div
                    class=move || {
                        format!(
                            "{} px-4 py-3 rounded shadow-lg flex items-start gap-3",
                            notification.with(|n| n.severity.alert_class()),
                        )
                    }
                    role=move || notification.with(|n| n.severity.role())
                >
                    <p class="flex-1 text-sm">{move || notification.with(|n| n.message.clone())}</p>
                    <button
                        type="button"
                        aria-label="Close"
                        class="opacity-70 hover:opacity-100"
                        on:click=move |_| on_close.call(())
                    >
                        {"✕"}
                    </button>
                </div>
            </div>
        </Show>
    }
}
