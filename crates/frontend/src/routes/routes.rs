use crate::dashboards::{
    CommissionAdminDashboard, CompanyAdminDashboard, ComplianceDashboard, FinanceDashboard,
    ImmigrationDashboard, JvCoordinatorDashboard, LocalContentDashboard, PersonnelDashboard,
};
use crate::layout::DashboardShell;
use crate::system::auth::guard::{RoleGuard, SessionGuard};
use crate::system::pages::dashboard_home::DashboardHome;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFound;
use crate::usecases::u201_add_personnel::AddPersonnelView;
use contracts::system::auth::RoleCode;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const COMPANY_DASHBOARD_PATH: &str = "/dashboard/company";
pub const ADD_PERSONNEL_PATH: &str = "/dashboard/company/personnel/new";

/// Guarded page inside the dashboard frame
#[component]
fn RolePage(role: RoleCode, children: ChildrenFn) -> impl IntoView {
    let children = StoredValue::new(children);
    view! {
        <RoleGuard required_role=role>
            <DashboardShell>{children.with_value(|c| c())}</DashboardShell>
        </RoleGuard>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=|| view! { <Redirect path=DASHBOARD_PATH /> } />
                <Route path=path!("/login") view=LoginPage />
                <Route
                    path=path!("/dashboard")
                    view=|| view! {
                        <SessionGuard>
                            <DashboardShell><DashboardHome /></DashboardShell>
                        </SessionGuard>
                    }
                />

                <Route
                    path=path!("/dashboard/admin")
                    view=|| view! { <RolePage role=RoleCode::Admin><CommissionAdminDashboard /></RolePage> }
                />
                <Route
                    path=path!("/commission/dashboard")
                    view=|| view! { <RolePage role=RoleCode::CommissionAdmin><CommissionAdminDashboard /></RolePage> }
                />
                <Route
                    path=path!("/dashboard/company")
                    view=|| view! { <RolePage role=RoleCode::CompanyAdmin><CompanyAdminDashboard /></RolePage> }
                />
                <Route
                    path=path!("/dashboard/company/personnel/new")
                    view=|| view! { <RolePage role=RoleCode::CompanyAdmin><AddPersonnelView /></RolePage> }
                />
                <Route
                    path=path!("/dashboard/compliance")
                    view=|| view! { <RolePage role=RoleCode::ComplianceOfficer><ComplianceDashboard /></RolePage> }
                />
                <Route
                    path=path!("/reviewer/dashboard")
                    view=|| view! { <RolePage role=RoleCode::Reviewer><ComplianceDashboard /></RolePage> }
                />
                <Route
                    path=path!("/dashboard/immigration")
                    view=|| view! { <RolePage role=RoleCode::ImmigrationOfficer><ImmigrationDashboard /></RolePage> }
                />
                <Route
                    path=path!("/dashboard/personnel")
                    view=|| view! { <RolePage role=RoleCode::Personnel><PersonnelDashboard /></RolePage> }
                />
                <Route
                    path=path!("/dashboard/local-content")
                    view=|| view! { <RolePage role=RoleCode::LocalContentOfficer><LocalContentDashboard /></RolePage> }
                />
                <Route
                    path=path!("/dashboard/finance")
                    view=|| view! { <RolePage role=RoleCode::FinanceOfficer><FinanceDashboard /></RolePage> }
                />
                <Route
                    path=path!("/dashboard/jv-coordinator")
                    view=|| view! { <RolePage role=RoleCode::JvCoordinator><JvCoordinatorDashboard /></RolePage> }
                />
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::config;
    use crate::system::auth::access::RoleDashboardTable;

    #[test]
    fn test_router_paths_match_config() {
        assert_eq!(config().routes.login_path, LOGIN_PATH);
        assert_eq!(config().routes.default_dashboard_path, DASHBOARD_PATH);
    }

    #[test]
    fn test_company_paths_match_table() {
        let table = RoleDashboardTable::standard();
        assert_eq!(table.lookup(&RoleCode::CompanyAdmin), Some(COMPANY_DASHBOARD_PATH));
        assert!(ADD_PERSONNEL_PATH.starts_with(COMPANY_DASHBOARD_PATH));
    }
}
