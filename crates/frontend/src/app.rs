use crate::dashboards::d101_company_admin::mock;
use crate::routes::routes::AppRoutes;
use crate::usecases::u201_add_personnel::provide_personnel_roster;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Personnel added through the wizard stay visible until reload
    provide_personnel_roster(mock::personnel());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
