use contracts::system::auth::{RoleCode, UserProfile};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use thaw::*;

use crate::shared::config::config;
use crate::system::auth::access::{post_login_target, RoleDashboardTable};
use crate::system::auth::session::read_session;
use crate::system::auth::storage::{save_session, LocalStorageSessionStore};

/// One mock account per role the portal knows, plus one it does not.
pub fn demo_accounts() -> Vec<UserProfile> {
    let mut accounts: Vec<UserProfile> = RoleCode::known()
        .into_iter()
        .map(|role| {
            let (first, last) = match role {
                RoleCode::Admin => ("Abena", "Mensah"),
                RoleCode::CompanyAdmin => ("Kwesi", "Appiah"),
                RoleCode::ComplianceOfficer => ("Efua", "Boateng"),
                RoleCode::ImmigrationOfficer => ("Kojo", "Owusu"),
                RoleCode::Personnel => ("Ravi", "Menon"),
                RoleCode::LocalContentOfficer => ("Akosua", "Asante"),
                RoleCode::FinanceOfficer => ("Yaw", "Boakye"),
                RoleCode::JvCoordinator => ("Adjoa", "Ofori"),
                RoleCode::CommissionAdmin => ("Nana", "Agyeman"),
                RoleCode::Reviewer => ("Esi", "Quaye"),
                RoleCode::Other(_) => ("", ""),
            };
            UserProfile::new(role, first, last)
        })
        .collect();
    accounts.push(UserProfile::new(
        RoleCode::Other("AUDITOR".to_string()),
        "Kofi",
        "Darko",
    ));
    accounts
}

/// Opaque token for a demo sign-in
fn demo_token(profile: &UserProfile) -> String {
    format!("demo-{}", profile.role.as_code().to_lowercase())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let navigate = use_navigate();
    let query = use_query_map();
    let error_message = RwSignal::new(None::<String>);

    let redirect = move || query.with_untracked(|q| q.get("redirect"));
    let target_for = move |profile: &UserProfile| {
        post_login_target(
            redirect().as_deref(),
            profile,
            &config().routes,
            RoleDashboardTable::standard(),
        )
    };

    let existing = read_session(&LocalStorageSessionStore::from_config())
        .profile()
        .cloned();

    let sign_in = {
        let navigate = navigate.clone();
        move |profile: UserProfile| {
            error_message.set(None);
            match save_session(&demo_token(&profile), &profile) {
                Ok(()) => {
                    let target = target_for(&profile);
                    log::info!("Signed in as {} ({})", profile.display_name(), profile.role);
                    navigate(&target, Default::default());
                }
                Err(e) => {
                    log::error!("Sign-in failed: {}", e);
                    error_message.set(Some(format!("Sign-in failed: {}", e)));
                }
            }
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>{config().app.title.clone()}</h1>
                <h2>"Sign in"</h2>

                {move || error_message.get().map(|msg| view! {
                    <div class="error-message">{msg}</div>
                })}

                {existing.map(|profile| {
                    let target = target_for(&profile);
                    let label = format!("Continue as {}", profile.display_name());
                    view! {
                        <div class="login-continue">
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| navigate(&target, Default::default())
                            >
                                {label}
                            </Button>
                        </div>
                    }
                })}

                <div class="login-info">
                    <p>"Choose a demo account:"</p>
                </div>
                <Flex vertical=true gap=FlexGap::Small>
                    {demo_accounts().into_iter().map(|profile| {
                        let sign_in = sign_in.clone();
                        let caption = format!("{} ({})", profile.display_name(), profile.role.label());
                        view! {
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| sign_in(profile.clone())
                            >
                                {caption}
                            </Button>
                        }
                    }).collect_view()}
                </Flex>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::session::{classify, Session, SessionReadResult};

    #[test]
    fn test_one_account_per_known_role() {
        let accounts = demo_accounts();
        assert_eq!(accounts.len(), RoleCode::known().len() + 1);
        for role in RoleCode::known() {
            assert_eq!(accounts.iter().filter(|a| a.role == role).count(), 1, "{role}");
        }
    }

    #[test]
    fn test_demo_accounts_survive_storage() {
        for profile in demo_accounts() {
            let raw = profile.to_json().unwrap();
            let token = demo_token(&profile);
            let session = Session::new(Some(&token), Some(&raw));
            assert_eq!(classify(&session), SessionReadResult::Valid(profile));
        }
    }

    #[test]
    fn test_demo_token() {
        let profile = UserProfile::new(RoleCode::CommissionAdmin, "Nana", "Agyeman");
        assert_eq!(demo_token(&profile), "demo-commission_admin");
    }
}
