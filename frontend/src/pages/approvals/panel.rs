use super::{
    components::{
        approvals_table::ApprovalsTable, reject_dialog::RejectTimesheetDialog,
        timesheet_view::TimesheetViewDialog,
    },
    utils::{reject_dialog_title, REJECT_DIALOG_CONTENT},
    view_model::{use_approvals_view_model, ApprovalsViewModel},
};
use crate::components::{error::ErrorBanner, layout::Layout, snackbar::Snackbar};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn ApprovalsPage() -> impl IntoView {
    view! {
        <Title text="Approvals"/>
        <Layout>
            <ApprovalsPanel/>
        </Layout>
    }
}

#[component]
pub fn ApprovalsPanel() -> impl IntoView {
    let vm = use_approvals_view_model();
    view! { <ApprovalsContent vm=vm/> }
}

#[component]
fn ApprovalsContent(vm: ApprovalsViewModel) -> impl IntoView {
    let approvals = vm.select(|s| s.approvals.clone());
    let in_flight = vm.select(|s| s.in_flight.clone());
    let load_error = vm.select(|s| s.load_error.clone());
    let notification = vm.select(|s| s.notification.clone());
    let viewed = vm.select(|s| s.viewed.clone());

    let reject_open = vm.select(|s| s.reject_dialog_open);
    let reject_title = vm.select(|s| reject_dialog_title(s.reject_target.as_ref()));
    let reject_id = vm.select(|s| s.reject_target.as_ref().map(|t| t.id.clone()));
    let reject_pending = vm.select(|s| {
        s.reject_target
            .as_ref()
            .map(|t| s.is_in_flight(&t.id))
            .unwrap_or(false)
    });

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4 w-full overflow-x-auto max-h-[calc(100vh-100px)]">
            <h2 class="text-lg font-medium text-fg">{"Pending approvals"}</h2>
            <ErrorBanner message=load_error/>
            <ApprovalsTable
                approvals=approvals
                in_flight=in_flight
                on_approve=Callback::new(move |id| vm.approve(id))
                on_reject=Callback::new(move |timesheet| vm.open_reject_dialog(timesheet))
                on_view=Callback::new(move |id| vm.view(id))
            />
            <Snackbar
                notification=notification
                on_close=Callback::new(move |_| vm.close_notification())
                on_expire=Callback::new(move |serial| vm.expire_notification(serial))
            />
            <RejectTimesheetDialog
                open=reject_open
                title=reject_title
                content_text=REJECT_DIALOG_CONTENT
                timesheet_id=reject_id
                pending=reject_pending
                on_close=Callback::new(move |_| vm.close_reject_dialog())
                on_submit=Callback::new(move |(id, reason)| vm.reject(id, reason))
            />
            <TimesheetViewDialog
                viewed=viewed
                on_close=Callback::new(move |_| vm.close_view_dialog())
            />
        </div>
    }
}
