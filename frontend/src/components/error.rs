use leptos::*;

/// Page-level error banner; renders nothing while `message` is `None`.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some) fallback=|| ()>
            <div
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2"
                role="alert"
            >
                <p class="text-sm font-bold">{move || message.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
