use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{pages::ApprovalsPage, state::loading::LoadingProvider};

pub const ROUTE_PATHS: &[&str] = &["/", "/approvals"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    provide_meta_context();
    view! {
        <LoadingProvider>
            <Router>
                <Routes>
                    <Route path="/" view=ApprovalsPage/>
                    <Route path="/approvals" view=ApprovalsPage/>
                </Routes>
            </Router>
        </LoadingProvider>
    }
}
