//! Role-aware navigation for the signed-in area

use crate::routes::routes::ADD_PERSONNEL_PATH;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::system::auth::access::{dashboard_for, RoleDashboardTable};
use crate::system::auth::context::use_current_user;
use contracts::system::auth::RoleCode;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: String,
    pub icon: &'static str,
}

impl NavItem {
    fn new(label: &'static str, path: impl Into<String>, icon: &'static str) -> Self {
        Self {
            label,
            path: path.into(),
            icon,
        }
    }
}

fn dashboard_icon(role: &RoleCode) -> &'static str {
    match role {
        RoleCode::Admin | RoleCode::CommissionAdmin => "shield",
        RoleCode::CompanyAdmin => "briefcase",
        RoleCode::ComplianceOfficer | RoleCode::Reviewer => "alert-triangle",
        RoleCode::ImmigrationOfficer => "globe",
        RoleCode::Personnel => "users",
        RoleCode::LocalContentOfficer => "layers",
        RoleCode::FinanceOfficer => "dollar",
        RoleCode::JvCoordinator => "activity",
        RoleCode::Other(_) => "home",
    }
}

/// Entries shown to `role`. Never links to another role's dashboard.
pub fn nav_items(role: &RoleCode) -> Vec<NavItem> {
    let routes = &config().routes;
    let mut items = vec![NavItem::new(
        "Dashboard",
        dashboard_for(role, routes, RoleDashboardTable::standard()),
        dashboard_icon(role),
    )];

    if *role == RoleCode::CompanyAdmin {
        items.push(NavItem::new("Add personnel", ADD_PERSONNEL_PATH, "user-plus"));
    }

    items
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let current_user = use_current_user();
    let location = use_location();
    let navigate = use_navigate();

    let items = move || {
        current_user
            .get()
            .map(|u| nav_items(&u.role))
            .unwrap_or_default()
    };

    view! {
        <nav class="app-sidebar__content">
            {move || items().into_iter().map(|item| {
                let navigate = navigate.clone();
                let path = item.path.clone();
                let target = item.path.clone();
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || location.pathname.get() == path
                        style:padding-left="12px"
                        on:click=move |_| navigate(&target, Default::default())
                    >
                        <div class="app-sidebar__item-content">
                            {icon(item.icon)}
                            <span>{item.label}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_admin_gets_wizard_entry() {
        let items = nav_items(&RoleCode::CompanyAdmin);
        let paths: Vec<_> = items.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["/dashboard/company", ADD_PERSONNEL_PATH]);
    }

    #[test]
    fn test_other_roles_only_see_own_dashboard() {
        for role in RoleCode::known() {
            if role == RoleCode::CompanyAdmin {
                continue;
            }
            let items = nav_items(&role);
            assert_eq!(items.len(), 1, "{role}");
            assert_eq!(
                Some(items[0].path.as_str()),
                RoleDashboardTable::standard().lookup(&role)
            );
        }
    }

    #[test]
    fn test_unknown_role_links_to_generic_dashboard() {
        let items = nav_items(&RoleCode::Other("AUDITOR".into()));
        assert_eq!(items[0].path, "/dashboard");
        assert_eq!(items[0].icon, "home");
    }
}
