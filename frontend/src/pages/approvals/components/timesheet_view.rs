use crate::{
    api::TimesheetDetail,
    components::dialog::{Dialog, DialogWidth},
    pages::approvals::utils::{format_hours, view_dialog_title},
};
use leptos::*;

#[component]
pub fn TimesheetView(detail: TimesheetDetail) -> impl IntoView {
    let total = format_hours(Some(detail.effective_total_hours()));
    let status = detail.status.clone().unwrap_or_else(|| "submitted".to_string());
    let rejection_reason = detail.rejection_reason.clone();
    let has_entries = !detail.entries.is_empty();

    view! {
        <div class="space-y-4">
            <div class="flex flex-wrap gap-6 text-sm text-fg-muted">
                <span>{"Status: "}<span class="font-medium text-fg">{status}</span></span>
                <span>{"Total hours: "}<span class="font-medium text-fg">{total}</span></span>
            </div>
            {rejection_reason.map(|reason| view! {
                <p class="text-sm text-status-error-text">{"Rejection reason: "}{reason}</p>
            })}
            {if has_entries {
                view! {
                    <div class="overflow-x-auto">
                        <table class="min-w-full divide-y divide-border">
                            <thead class="bg-surface-muted">
                                <tr>
                                    <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Date"}</th>
                                    <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Project"}</th>
                                    <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Task"}</th>
                                    <th class="px-4 py-2 text-right text-xs font-medium text-fg-muted uppercase tracking-wider">{"Hours"}</th>
                                    <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Notes"}</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                {detail.entries.into_iter().map(|entry| view! {
                                    <tr>
                                        <td class="px-4 py-2 whitespace-nowrap text-sm text-fg">{entry.date}</td>
                                        <td class="px-4 py-2 whitespace-nowrap text-sm text-fg">{entry.project.unwrap_or_default()}</td>
                                        <td class="px-4 py-2 whitespace-nowrap text-sm text-fg">{entry.task.unwrap_or_default()}</td>
                                        <td class="px-4 py-2 whitespace-nowrap text-sm text-fg text-right">{format_hours(Some(entry.hours))}</td>
                                        <td class="px-4 py-2 text-sm text-fg-muted">{entry.notes.unwrap_or_default()}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_view()
            } else {
                view! { <p class="text-sm text-fg-muted">{"No entries recorded."}</p> }.into_view()
            }}
        </div>
    }
}

/// Open exactly while `viewed` holds a record.
#[component]
pub fn TimesheetViewDialog(
    #[prop(into)] viewed: Signal<Option<TimesheetDetail>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || viewed.with(Option::is_some));
    let title = Signal::derive(move || {
        viewed
            .with(|detail| detail.as_ref().map(view_dialog_title))
            .unwrap_or_default()
    });

    view! {
        <Dialog
            is_open=is_open
            title=title
            on_close=on_close
            width=DialogWidth::ExtraWide
            footer=ViewFn::from(move || view! {
                <button
                    type="button"
                    class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                    on:click=move |_| on_close.call(())
                >
                    {"Close"}
                </button>
            })
        >
            {move || viewed.get().map(|detail| view! { <TimesheetView detail=detail /> })}
        </Dialog>
    }
}
