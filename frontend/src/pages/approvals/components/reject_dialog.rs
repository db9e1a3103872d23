use crate::{
    api::TimesheetId,
    components::dialog::Dialog,
};
use leptos::*;

/// Collects a rejection reason for `timesheet_id` and hands it to `on_submit`.
/// The reason is cleared whenever the target timesheet changes.
#[component]
pub fn RejectTimesheetDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] content_text: String,
    #[prop(into)] timesheet_id: Signal<Option<TimesheetId>>,
    #[prop(into)] pending: Signal<bool>,
    on_close: Callback<()>,
    on_submit: Callback<(TimesheetId, String)>,
) -> impl IntoView {
    let reason = create_rw_signal(String::new());
    clear_on_target_change(timesheet_id, reason);

    let can_submit = Signal::derive(move || {
        !pending.get()
            && timesheet_id.with(Option::is_some)
            && reason.with(|text| !text.trim().is_empty())
    });

    let submit = move |_| {
        if !can_submit.get_untracked() {
            return;
        }
        if let Some(id) = timesheet_id.get_untracked() {
            on_submit.call((id, reason.get_untracked()));
        }
    };
    let content_text = store_value(content_text);

    view! {
        <Dialog
            is_open=open
            title=title
            on_close=on_close
            footer=ViewFn::from(move || view! {
                <button
                    type="button"
                    class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                    on:click=move |_| on_close.call(())
                >
                    {"Cancel"}
                </button>
                <button
                    type="button"
                    class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
                    disabled=move || !can_submit.get()
                    on:click=submit
                >
                    {move || if pending.get() { "Rejecting..." } else { "Reject" }}
                </button>
            })
        >
            <p class="text-sm text-fg-muted">{content_text.get_value()}</p>
            <label class="block text-sm font-medium text-fg-muted" for="rejection-reason">
                {"Reason"}
            </label>
            <textarea
                id="rejection-reason"
                class="w-full border border-form-control-border bg-form-control-bg text-form-control-text rounded px-2 py-1"
                rows="4"
                prop:value=move || reason.get()
                on:input=move |ev| reason.set(event_target_value(&ev))
            ></textarea>
        </Dialog>
    }
}

/// Empties `reason` only when a different timesheet becomes the target.
fn clear_on_target_change(timesheet_id: Signal<Option<TimesheetId>>, reason: RwSignal<String>) {
    let target = create_memo(move |_| timesheet_id.get());
    let _ = watch(
        move || target.get(),
        move |_, _, _| reason.set(String::new()),
        false,
    );
}
