use leptos::ev::KeyboardEvent;
use leptos::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogWidth {
    #[default]
    Medium,
    ExtraWide,
}

impl DialogWidth {
    fn class(self) -> &'static str {
        match self {
            DialogWidth::Medium => "max-w-md",
            DialogWidth::ExtraWide => "max-w-7xl",
        }
    }
}

/// Modal shell: backdrop, title bar with close button, body and optional footer.
/// Backdrop click, the header button and Escape all call `on_close`.
#[component]
pub fn Dialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    #[prop(optional)] width: DialogWidth,
    #[prop(optional)] footer: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let panel_class = format!(
        "relative z-[71] w-full {} rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4 max-h-[90vh] overflow-y-auto",
        width.class()
    );
    let title_text = Signal::derive(move || title.get());
    let footer = store_value(footer);

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class=panel_class.clone()
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_close.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <h2 class="text-lg font-semibold text-fg">{move || title_text.get()}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| on_close.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    {children()}
                    {move || footer.with_value(|footer| footer.as_ref().map(|footer| view! {
                        <div class="flex justify-end gap-2">{footer.run()}</div>
                    }))}
                </div>
            </div>
        </Show>
    }
}
