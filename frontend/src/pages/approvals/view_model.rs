use super::{
    repository::ApprovalsRepository, state::ApprovalsState, utils::validate_rejection_reason,
};
use crate::api::{ApiClient, TimesheetId, TimesheetSummary};
use crate::state::loading::{use_loading, LoadingState};
use leptos::*;
use log::{debug, error, warn};
use std::rc::Rc;

pub async fn load_approvals(
    repo: &ApprovalsRepository,
    state: RwSignal<ApprovalsState>,
    loading: LoadingState,
) {
    let _busy = loading.begin();
    match repo.fetch_approvals().await {
        Ok(approvals) => {
            debug!("loaded {} pending approvals", approvals.len());
            state.update(|s| s.load_succeeded(approvals));
        }
        Err(err) => {
            error!("Error fetching approvals: {}", err);
            state.update(|s| s.load_failed());
        }
    }
}

pub async fn approve_timesheet(
    repo: &ApprovalsRepository,
    state: RwSignal<ApprovalsState>,
    loading: LoadingState,
    id: TimesheetId,
) {
    if !state.try_update(|s| s.begin_action(&id)).unwrap_or(false) {
        debug!("timesheet {} already has a request in flight", id);
        return;
    }
    let _busy = loading.begin();
    let result = repo.approve(&id).await;
    if let Err(err) = &result {
        error!("{}", err);
    }
    state.update(|s| s.approve_finished(&id, result.is_ok()));
}

pub async fn reject_timesheet(
    repo: &ApprovalsRepository,
    state: RwSignal<ApprovalsState>,
    loading: LoadingState,
    id: TimesheetId,
    reason: String,
) {
    let reason = match validate_rejection_reason(&reason) {
        Ok(reason) => reason,
        Err(err) => {
            warn!("rejection of timesheet {} not sent: {}", id, err);
            state.update(|s| s.reject_invalid(err.error));
            return;
        }
    };
    if !state.try_update(|s| s.begin_action(&id)).unwrap_or(false) {
        debug!("timesheet {} already has a request in flight", id);
        return;
    }
    let _busy = loading.begin();
    let result = repo.reject(&id, &reason).await;
    if let Err(err) = &result {
        error!("{}", err);
    }
    state.update(|s| s.reject_finished(&id, result.is_ok()));
}

/// Failures are logged only; the page shows nothing for them.
pub async fn view_timesheet(
    repo: &ApprovalsRepository,
    state: RwSignal<ApprovalsState>,
    id: TimesheetId,
) {
    match repo.fetch_timesheet(&id).await {
        Ok(detail) => state.update(|s| s.view_loaded(detail)),
        Err(err) => error!("Error viewing timesheet {}: {}", id, err),
    }
}

#[derive(Clone, Copy)]
pub struct ApprovalsViewModel {
    pub state: RwSignal<ApprovalsState>,
    pub loading: LoadingState,
    repo: StoredValue<ApprovalsRepository>,
}

impl ApprovalsViewModel {
    /// Memoized projection of the page state; subscribers only rerun when
    /// the selected value changes.
    pub fn select<T>(&self, f: impl Fn(&ApprovalsState) -> T + 'static) -> Memo<T>
    where
        T: PartialEq + 'static,
    {
        let state = self.state;
        create_memo(move |_| state.with(&f))
    }

    pub fn reload(&self) {
        let (repo, state, loading) = (self.repo.get_value(), self.state, self.loading);
        spawn_local(async move { load_approvals(&repo, state, loading).await });
    }

    pub fn approve(&self, id: TimesheetId) {
        let (repo, state, loading) = (self.repo.get_value(), self.state, self.loading);
        spawn_local(async move { approve_timesheet(&repo, state, loading, id).await });
    }

    pub fn open_reject_dialog(&self, timesheet: TimesheetSummary) {
        self.state.update(|s| s.open_reject_dialog(timesheet));
    }

    pub fn close_reject_dialog(&self) {
        self.state.update(|s| s.close_reject_dialog());
    }

    pub fn reject(&self, id: TimesheetId, reason: String) {
        let (repo, state, loading) = (self.repo.get_value(), self.state, self.loading);
        spawn_local(async move { reject_timesheet(&repo, state, loading, id, reason).await });
    }

    pub fn view(&self, id: TimesheetId) {
        let (repo, state) = (self.repo.get_value(), self.state);
        spawn_local(async move { view_timesheet(&repo, state, id).await });
    }

    pub fn close_view_dialog(&self) {
        self.state.update(|s| s.close_view());
    }

    pub fn close_notification(&self) {
        self.state.update(|s| s.close_notification());
    }

    pub fn expire_notification(&self, serial: u32) {
        self.state.update(|s| s.expire_notification(serial));
    }

    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self {
            state: create_rw_signal(ApprovalsState::default()),
            loading: use_loading(),
            repo: store_value(ApprovalsRepository::new_with_client(Rc::new(api))),
        }
    }

    /// Fetches the list once now and once more every time `refresh` flips.
    pub fn reload_on_refresh(&self) {
        let vm = *self;
        let refresh = self.select(|s| s.refresh);
        let _ = watch(
            move || refresh.get(),
            move |flag, _, _| {
                debug!("loading approvals (refresh={})", flag);
                vm.reload();
            },
            true,
        );
    }
}

impl Default for ApprovalsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_approvals_view_model() -> ApprovalsViewModel {
    let vm = ApprovalsViewModel::new();
    vm.reload_on_refresh();
    vm
}
