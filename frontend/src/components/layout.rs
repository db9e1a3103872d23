use crate::state::loading::use_loading;
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">"Timesheets"</h1>
                    <nav class="flex space-x-4">
                        <a href="/approvals" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                            "Approvals"
                        </a>
                    </nav>
                </div>
            </div>
        </header>
    }
}

/// Thin progress bar pinned to the top of the viewport while any request holds
/// the shared loading state.
#[component]
pub fn LoadingBar() -> impl IntoView {
    let loading = use_loading();
    view! {
        <Show when=move || loading.is_loading()>
            <div class="fixed top-0 inset-x-0 z-[90] h-1 overflow-hidden bg-action-primary-bg/20" role="progressbar" aria-label="Loading">
                <div class="h-full w-1/3 animate-pulse bg-action-primary-bg"></div>
            </div>
        </Show>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <LoadingBar/>
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}
