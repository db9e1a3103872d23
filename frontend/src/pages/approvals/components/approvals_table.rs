use crate::{
    api::{TimesheetId, TimesheetSummary},
    components::empty_state::EmptyState,
    pages::approvals::utils::{format_hours, format_submitted_at},
};
use leptos::*;
use std::collections::BTreeSet;

#[component]
pub fn ApprovalsTable(
    #[prop(into)] approvals: Signal<Vec<TimesheetSummary>>,
    #[prop(into)] in_flight: Signal<BTreeSet<TimesheetId>>,
    on_approve: Callback<TimesheetId>,
    on_reject: Callback<TimesheetSummary>,
    on_view: Callback<TimesheetId>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <Show
                when=move || approvals.with(|rows| !rows.is_empty())
                fallback=|| view! {
                    <EmptyState
                        title="No timesheets awaiting approval"
                        description="Submitted timesheets will appear here."
                    />
                }
            >
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Employee"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Period"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Hours"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Submitted"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Status"}</th>
                            <th class="px-6 py-3 text-right text-xs font-medium text-fg-muted uppercase tracking-wider">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody class="bg-surface-elevated divide-y divide-border">
                        {move || approvals.get().into_iter().map(|row| {
                            let busy_id = row.id.clone();
                            let busy = move || in_flight.with(|ids| ids.contains(&busy_id));
                            let approve_id = row.id.clone();
                            let view_id = row.id.clone();
                            let reject_row = row.clone();
                            view! {
                                <tr>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{row.created_by_full_name.clone()}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{row.period.clone()}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{format_hours(row.total_hours)}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{format_submitted_at(row.submitted_at.as_ref())}</td>
                                    <td class="px-6 py-4 whitespace-nowrap">
                                        <span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-status-neutral-bg text-status-neutral-text">
                                            {row.status.clone().unwrap_or_else(|| "submitted".to_string())}
                                        </span>
                                    </td>
                                    <td class="px-6 py-4 whitespace-nowrap text-right text-sm space-x-2">
                                        <button
                                            class="text-link hover:text-link-hover"
                                            on:click=move |_| on_view.call(view_id.clone())
                                        >
                                            {"View"}
                                        </button>
                                        <button
                                            class="px-3 py-1 rounded bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                                            disabled=busy.clone()
                                            on:click=move |_| on_approve.call(approve_id.clone())
                                        >
                                            {"Approve"}
                                        </button>
                                        <button
                                            class="px-3 py-1 rounded bg-action-danger-bg text-action-danger-text disabled:opacity-50"
                                            disabled=busy
                                            on:click=move |_| on_reject.call(reject_row.clone())
                                        >
                                            {"Reject"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
