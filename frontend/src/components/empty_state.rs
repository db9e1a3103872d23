use leptos::*;

/// Placeholder shown instead of a table that has no rows.
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div
            class="flex flex-col items-center gap-2 py-12 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted text-center"
            role="status"
        >
            <svg class="h-10 w-10 text-fg-muted" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M20 13V7a2 2 0 00-2-2H6a2 2 0 00-2 2v6m16 0v4a2 2 0 01-2 2H6a2 2 0 01-2-2v-4m16 0h-4l-2 2h-4l-2-2H4" />
            </svg>
            <p class="text-sm font-semibold text-fg">{title}</p>
            {description.map(|text| view! { <p class="text-sm text-fg-muted">{text}</p> })}
        </div>
    }
}
