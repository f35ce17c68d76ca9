//! Role-based access decisions for guarded pages.
//!
//! Every dashboard page runs the same pipeline on mount: read the session,
//! compare the stored role with the page's required role, and either render
//! or redirect. The decision itself is a pure function of its inputs.

use std::collections::HashMap;

use contracts::system::auth::{RoleCode, UserProfile};
use once_cell::sync::Lazy;

use super::session::SessionReadResult;
use crate::shared::config::RouteConfig;

/// Canonical dashboard path per role.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleDashboardTable {
    paths: HashMap<RoleCode, String>,
}

static STANDARD_TABLE: Lazy<RoleDashboardTable> = Lazy::new(|| {
    RoleDashboardTable::new()
        .with(RoleCode::Admin, "/dashboard/admin")
        .with(RoleCode::CompanyAdmin, "/dashboard/company")
        .with(RoleCode::ComplianceOfficer, "/dashboard/compliance")
        .with(RoleCode::ImmigrationOfficer, "/dashboard/immigration")
        .with(RoleCode::Personnel, "/dashboard/personnel")
        .with(RoleCode::LocalContentOfficer, "/dashboard/local-content")
        .with(RoleCode::FinanceOfficer, "/dashboard/finance")
        .with(RoleCode::JvCoordinator, "/dashboard/jv-coordinator")
        .with(RoleCode::CommissionAdmin, "/commission/dashboard")
        .with(RoleCode::Reviewer, "/reviewer/dashboard")
});

impl RoleDashboardTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shared by every page.
    pub fn standard() -> &'static RoleDashboardTable {
        &STANDARD_TABLE
    }

    pub fn with(mut self, role: RoleCode, path: &str) -> Self {
        self.paths.insert(role, path.to_string());
        self
    }

    pub fn lookup(&self, role: &RoleCode) -> Option<&str> {
        self.paths.get(role).map(String::as_str)
    }

    pub fn contains(&self, role: &RoleCode) -> bool {
        self.paths.contains_key(role)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    RedirectTo(String),
}

/// Login URL that brings the user back to `page_path` afterwards.
///
/// Each path segment is percent-encoded; the slashes between them are kept.
pub fn login_redirect(login_path: &str, page_path: &str) -> String {
    let encoded = page_path
        .split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/");
    format!("{}?redirect={}", login_path, encoded)
}

fn deny_unauthenticated(
    result: &SessionReadResult,
    page_path: &str,
    routes: &RouteConfig,
) -> Option<AccessDecision> {
    match result {
        SessionReadResult::NoSession => Some(AccessDecision::RedirectTo(login_redirect(
            &routes.login_path,
            page_path,
        ))),
        SessionReadResult::Corrupt => Some(AccessDecision::RedirectTo(routes.login_path.clone())),
        SessionReadResult::Valid(_) => None,
    }
}

/// Decide whether the page requiring `required_role` may render.
pub fn decide(
    result: &SessionReadResult,
    required_role: &RoleCode,
    page_path: &str,
    routes: &RouteConfig,
    table: &RoleDashboardTable,
) -> AccessDecision {
    if let Some(denied) = deny_unauthenticated(result, page_path, routes) {
        return denied;
    }
    let Some(profile) = result.profile() else {
        return AccessDecision::RedirectTo(routes.login_path.clone());
    };

    if &profile.role == required_role {
        return AccessDecision::Allow;
    }

    let target = dashboard_for(&profile.role, routes, table);
    log::debug!(
        "Role {} may not open {} (requires {}), redirecting to {}",
        profile.role,
        page_path,
        required_role,
        target
    );
    AccessDecision::RedirectTo(target)
}

/// Same as [`decide`] for pages open to every signed-in role.
pub fn decide_authenticated(
    result: &SessionReadResult,
    page_path: &str,
    routes: &RouteConfig,
) -> AccessDecision {
    deny_unauthenticated(result, page_path, routes).unwrap_or(AccessDecision::Allow)
}

/// Canonical dashboard of `role`, or the generic landing page.
pub fn dashboard_for(role: &RoleCode, routes: &RouteConfig, table: &RoleDashboardTable) -> String {
    table
        .lookup(role)
        .unwrap_or(routes.default_dashboard_path.as_str())
        .to_string()
}

fn is_local_path(target: &str, routes: &RouteConfig) -> bool {
    let path = target.split(['?', '#']).next().unwrap_or_default();
    target.starts_with('/')
        && !target.starts_with("//")
        && !target.contains('\\')
        && !target.chars().any(|c| c.is_control() || c.is_whitespace())
        && path != routes.login_path
}

/// Where to send a user right after signing in.
///
/// `redirect` is the already-decoded query value. Only same-origin paths
/// are honoured; anything else falls back to the role's dashboard.
pub fn post_login_target(
    redirect: Option<&str>,
    profile: &UserProfile,
    routes: &RouteConfig,
    table: &RoleDashboardTable,
) -> String {
    match redirect {
        Some(target) if is_local_path(target, routes) => target.to_string(),
        _ => dashboard_for(&profile.role, routes, table),
    }
}

/// What a guarded page requires of the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageRequirement {
    Role(RoleCode),
    AnySignedIn,
}

/// Lifecycle of one guarded page instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GuardPhase {
    #[default]
    Initializing,
    Allowed(UserProfile),
    Redirecting(String),
}

impl GuardPhase {
    pub fn is_settled(&self) -> bool {
        !matches!(self, GuardPhase::Initializing)
    }

    /// Move out of `Initializing`. Settled phases never change again.
    pub fn settle(&mut self, next: GuardPhase) -> bool {
        if self.is_settled() || !next.is_settled() {
            return false;
        }
        *self = next;
        true
    }
}

/// Run the full decision for a page and map it to the phase it settles in.
pub fn evaluate(
    result: SessionReadResult,
    requirement: &PageRequirement,
    page_path: &str,
    routes: &RouteConfig,
    table: &RoleDashboardTable,
) -> GuardPhase {
    let decision = match requirement {
        PageRequirement::Role(role) => decide(&result, role, page_path, routes, table),
        PageRequirement::AnySignedIn => decide_authenticated(&result, page_path, routes),
    };
    match (decision, result) {
        (AccessDecision::RedirectTo(path), _) => GuardPhase::Redirecting(path),
        (AccessDecision::Allow, SessionReadResult::Valid(profile)) => GuardPhase::Allowed(profile),
        (AccessDecision::Allow, _) => GuardPhase::Redirecting(routes.login_path.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::session::{read_session, MemorySessionStore};

    fn routes() -> RouteConfig {
        RouteConfig::default()
    }

    fn valid(role: RoleCode) -> SessionReadResult {
        SessionReadResult::Valid(UserProfile::new(role, "Ama", "Owusu"))
    }

    fn read(token: Option<&str>, user: Option<&str>) -> SessionReadResult {
        read_session(&MemorySessionStore::new(token, user))
    }

    #[test]
    fn test_standard_table_covers_every_known_role() {
        let table = RoleDashboardTable::standard();
        assert_eq!(table.len(), RoleCode::known().len());
        for role in RoleCode::known() {
            assert!(table.contains(&role), "missing {}", role);
        }
        assert!(!table.contains(&RoleCode::Other("AUDITOR".to_string())));
    }

    #[test]
    fn test_matching_role_is_allowed() {
        let table = RoleDashboardTable::standard();
        for role in RoleCode::known() {
            let page = table.lookup(&role).unwrap();
            assert_eq!(
                decide(&valid(role.clone()), &role, page, &routes(), table),
                AccessDecision::Allow
            );
        }
    }

    #[test]
    fn test_mismatched_role_goes_to_own_dashboard() {
        let table = RoleDashboardTable::standard();
        for r1 in RoleCode::known() {
            for r2 in RoleCode::known() {
                if r1 == r2 {
                    continue;
                }
                let page = table.lookup(&r2).unwrap();
                assert_eq!(
                    decide(&valid(r1.clone()), &r2, page, &routes(), table),
                    AccessDecision::RedirectTo(table.lookup(&r1).unwrap().to_string())
                );
            }
        }
    }

    #[test]
    fn test_role_missing_from_table_falls_back() {
        let partial = RoleDashboardTable::new()
            .with(RoleCode::Admin, "/dashboard/admin")
            .with(RoleCode::Personnel, "/dashboard/personnel");
        assert_eq!(
            decide(
                &valid(RoleCode::JvCoordinator),
                &RoleCode::Admin,
                "/dashboard/admin",
                &routes(),
                &partial
            ),
            AccessDecision::RedirectTo("/dashboard".to_string())
        );
        assert_eq!(
            decide(
                &valid(RoleCode::Other("AUDITOR".to_string())),
                &RoleCode::Personnel,
                "/dashboard/personnel",
                &routes(),
                RoleDashboardTable::standard()
            ),
            AccessDecision::RedirectTo("/dashboard".to_string())
        );
    }

    #[test]
    fn test_no_session_redirects_with_return_path() {
        let table = RoleDashboardTable::standard();
        for page in [
            "/dashboard/admin",
            "/dashboard/local-content",
            "/commission/dashboard",
            "/",
        ] {
            let AccessDecision::RedirectTo(target) = decide(
                &SessionReadResult::NoSession,
                &RoleCode::Admin,
                page,
                &routes(),
                table,
            ) else {
                panic!("expected redirect for {page}");
            };
            let (path, query) = target.split_once('?').unwrap();
            assert_eq!(path, "/login");
            assert_eq!(query, format!("redirect={}", page));
        }
    }

    #[test]
    fn test_redirect_param_encodes_reserved_characters() {
        assert_eq!(
            login_redirect("/login", "/dashboard/a b&c"),
            "/login?redirect=/dashboard/a%20b%26c"
        );
    }

    #[test]
    fn test_corrupt_session_redirects_to_bare_login() {
        let result = read(Some("abc"), Some("{not json"));
        assert_eq!(result, SessionReadResult::Corrupt);
        assert_eq!(
            decide(
                &result,
                &RoleCode::Admin,
                "/dashboard/admin",
                &routes(),
                RoleDashboardTable::standard()
            ),
            AccessDecision::RedirectTo("/login".to_string())
        );
    }

    #[test]
    fn test_decide_is_idempotent() {
        let table = RoleDashboardTable::standard();
        for result in [
            SessionReadResult::NoSession,
            SessionReadResult::Corrupt,
            valid(RoleCode::Admin),
            valid(RoleCode::Personnel),
        ] {
            let first = decide(&result, &RoleCode::Admin, "/dashboard/admin", &routes(), table);
            let second = decide(&result, &RoleCode::Admin, "/dashboard/admin", &routes(), table);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_scenario_admin_allowed() {
        let result = read(
            Some("t0k3n"),
            Some(r#"{"role":"ADMIN","firstName":"Jane","lastName":"Doe"}"#),
        );
        assert_eq!(
            decide(
                &result,
                &RoleCode::Admin,
                "/dashboard/admin",
                &routes(),
                RoleDashboardTable::standard()
            ),
            AccessDecision::Allow
        );
    }

    #[test]
    fn test_scenario_personnel_on_admin_page() {
        let result = read(
            Some("t0k3n"),
            Some(r#"{"role":"PERSONNEL","firstName":"Kwame","lastName":"Asante"}"#),
        );
        assert_eq!(
            decide(
                &result,
                &RoleCode::Admin,
                "/dashboard/admin",
                &routes(),
                RoleDashboardTable::standard()
            ),
            AccessDecision::RedirectTo("/dashboard/personnel".to_string())
        );
    }

    #[test]
    fn test_scenario_no_token() {
        let result = read(None, None);
        assert_eq!(
            decide(
                &result,
                &RoleCode::Admin,
                "/dashboard/admin",
                &routes(),
                RoleDashboardTable::standard()
            ),
            AccessDecision::RedirectTo("/login?redirect=/dashboard/admin".to_string())
        );
    }

    #[test]
    fn test_scenario_record_not_json() {
        let result = read(Some("t0k3n"), Some("not-json"));
        assert_eq!(
            decide(
                &result,
                &RoleCode::Admin,
                "/dashboard/admin",
                &routes(),
                RoleDashboardTable::standard()
            ),
            AccessDecision::RedirectTo("/login".to_string())
        );
    }

    #[test]
    fn test_lowercase_family_is_not_normalized() {
        let table = RoleDashboardTable::standard();
        assert_eq!(
            decide(
                &valid(RoleCode::CommissionAdmin),
                &RoleCode::Admin,
                "/dashboard/admin",
                &routes(),
                table
            ),
            AccessDecision::RedirectTo("/commission/dashboard".to_string())
        );
    }

    #[test]
    fn test_decide_authenticated() {
        let r = routes();
        assert_eq!(
            decide_authenticated(&valid(RoleCode::Other("AUDITOR".into())), "/dashboard", &r),
            AccessDecision::Allow
        );
        assert_eq!(
            decide_authenticated(&SessionReadResult::NoSession, "/dashboard", &r),
            AccessDecision::RedirectTo("/login?redirect=/dashboard".to_string())
        );
        assert_eq!(
            decide_authenticated(&SessionReadResult::Corrupt, "/dashboard", &r),
            AccessDecision::RedirectTo("/login".to_string())
        );
    }

    #[test]
    fn test_post_login_target() {
        let table = RoleDashboardTable::standard();
        let r = routes();
        let admin = UserProfile::new(RoleCode::Admin, "Jane", "Doe");
        let auditor = UserProfile::new(RoleCode::Other("AUDITOR".into()), "", "");

        assert_eq!(
            post_login_target(Some("/dashboard/finance"), &admin, &r, table),
            "/dashboard/finance"
        );
        assert_eq!(post_login_target(None, &admin, &r, table), "/dashboard/admin");
        assert_eq!(post_login_target(None, &auditor, &r, table), "/dashboard");
        for unsafe_target in [
            "https://evil.example",
            "//evil.example",
            "dashboard",
            "/login",
            "/login?redirect=/x",
            "/\\evil",
            "/\t/evil.example",
            "/\n/evil.example",
            "/\r/evil.example",
            "/ /evil.example",
        ] {
            assert_eq!(
                post_login_target(Some(unsafe_target), &admin, &r, table),
                "/dashboard/admin",
                "{unsafe_target}"
            );
        }
    }

    #[test]
    fn test_guard_phase_settles_once() {
        let mut phase = GuardPhase::default();
        assert!(!phase.settle(GuardPhase::Initializing));
        assert_eq!(phase, GuardPhase::Initializing);

        assert!(phase.settle(GuardPhase::Redirecting("/login".into())));
        assert!(!phase.settle(GuardPhase::Allowed(UserProfile::new(RoleCode::Admin, "", ""))));
        assert_eq!(phase, GuardPhase::Redirecting("/login".into()));
    }

    #[test]
    fn test_evaluate_maps_decisions_to_phases() {
        let table = RoleDashboardTable::standard();
        let r = routes();
        let admin = UserProfile::new(RoleCode::Admin, "Jane", "Doe");

        assert_eq!(
            evaluate(
                SessionReadResult::Valid(admin.clone()),
                &PageRequirement::Role(RoleCode::Admin),
                "/dashboard/admin",
                &r,
                table
            ),
            GuardPhase::Allowed(admin.clone())
        );
        assert_eq!(
            evaluate(
                SessionReadResult::Valid(admin.clone()),
                &PageRequirement::Role(RoleCode::Reviewer),
                "/reviewer/dashboard",
                &r,
                table
            ),
            GuardPhase::Redirecting("/dashboard/admin".into())
        );
        assert_eq!(
            evaluate(
                SessionReadResult::NoSession,
                &PageRequirement::AnySignedIn,
                "/dashboard",
                &r,
                table
            ),
            GuardPhase::Redirecting("/login?redirect=/dashboard".into())
        );
        assert_eq!(
            evaluate(
                SessionReadResult::Valid(admin.clone()),
                &PageRequirement::AnySignedIn,
                "/dashboard",
                &r,
                table
            ),
            GuardPhase::Allowed(admin)
        );
    }
}
