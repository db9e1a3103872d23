use leptos::*;

/// Runs `f` inside a fresh reactive runtime that is disposed afterwards.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders a view to HTML on the host. A `LoadingState` is provided up front
/// so components and the test body share the same indicator.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| {
        provide_context(crate::state::loading::LoadingState::new());
        view().into_view().render_to_string().to_string()
    });
    leptos_reactive::suppress_resource_load(false);
    html
}
