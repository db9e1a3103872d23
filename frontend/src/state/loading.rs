use leptos::*;

/// App-wide busy indicator.
///
/// Each operation holds a [`LoadingGuard`] for as long as it runs; the
/// indicator stays on while any guard is alive.
#[derive(Clone, Copy)]
pub struct LoadingState {
    pending: RwSignal<u32>,
}

impl LoadingState {
    pub fn new() -> Self {
        Self {
            pending: create_rw_signal(0),
        }
    }

    pub fn begin(&self) -> LoadingGuard {
        self.pending.update(|count| *count += 1);
        LoadingGuard {
            pending: self.pending,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.get() > 0
    }

    #[cfg(test)]
    pub fn pending_count(&self) -> u32 {
        self.pending.get_untracked()
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}

#[must_use = "the loading indicator is released as soon as the guard is dropped"]
pub struct LoadingGuard {
    pending: RwSignal<u32>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        // The owning scope may already be gone if the page unmounted mid-request.
        let _ = self
            .pending
            .try_update(|count| *count = count.saturating_sub(1));
    }
}

#[component]
pub fn LoadingProvider(children: Children) -> impl IntoView {
    provide_context(LoadingState::new());
    view! { <>{children()}</> }
}

pub fn use_loading() -> LoadingState {
    match use_context::<LoadingState>() {
        Some(state) => state,
        None => {
            let state = LoadingState::new();
            provide_context(state);
            state
        }
    }
}
