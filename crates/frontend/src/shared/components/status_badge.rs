use contracts::portal::applications::ApplicationStatus;
use contracts::portal::compliance::{CaseStatus, Severity};
use contracts::portal::joint_ventures::JvStatus;
use contracts::portal::permits::PermitStatus;
use contracts::portal::personnel::PersonnelStatus;
use contracts::portal::stats::IndicatorStatus;
use leptos::prelude::*;
use thaw::*;

/// Status enums that can be shown as a badge.
pub trait BadgeTone {
    fn tone(&self) -> IndicatorStatus;
    fn badge_label(&self) -> &'static str;
}

impl BadgeTone for ApplicationStatus {
    fn tone(&self) -> IndicatorStatus {
        match self {
            ApplicationStatus::Approved => IndicatorStatus::Good,
            ApplicationStatus::Rejected => IndicatorStatus::Bad,
            ApplicationStatus::QueryRaised => IndicatorStatus::Warning,
            ApplicationStatus::Submitted | ApplicationStatus::UnderReview => {
                IndicatorStatus::Neutral
            }
        }
    }

    fn badge_label(&self) -> &'static str {
        self.label()
    }
}

impl BadgeTone for PermitStatus {
    fn tone(&self) -> IndicatorStatus {
        match self {
            PermitStatus::Active => IndicatorStatus::Good,
            PermitStatus::Suspended => IndicatorStatus::Warning,
            PermitStatus::Expired | PermitStatus::Revoked => IndicatorStatus::Bad,
        }
    }

    fn badge_label(&self) -> &'static str {
        self.label()
    }
}

impl BadgeTone for PersonnelStatus {
    fn tone(&self) -> IndicatorStatus {
        match self {
            PersonnelStatus::Active => IndicatorStatus::Good,
            PersonnelStatus::Pending => IndicatorStatus::Neutral,
            PersonnelStatus::PermitExpiring => IndicatorStatus::Warning,
            PersonnelStatus::Suspended => IndicatorStatus::Bad,
        }
    }

    fn badge_label(&self) -> &'static str {
        self.label()
    }
}

impl BadgeTone for Severity {
    fn tone(&self) -> IndicatorStatus {
        match self {
            Severity::Low => IndicatorStatus::Neutral,
            Severity::Medium => IndicatorStatus::Warning,
            Severity::High | Severity::Critical => IndicatorStatus::Bad,
        }
    }

    fn badge_label(&self) -> &'static str {
        self.label()
    }
}

impl BadgeTone for CaseStatus {
    fn tone(&self) -> IndicatorStatus {
        match self {
            CaseStatus::Open => IndicatorStatus::Bad,
            CaseStatus::UnderReview => IndicatorStatus::Warning,
            CaseStatus::Resolved => IndicatorStatus::Good,
        }
    }

    fn badge_label(&self) -> &'static str {
        self.label()
    }
}

impl BadgeTone for JvStatus {
    fn tone(&self) -> IndicatorStatus {
        match self {
            JvStatus::Production => IndicatorStatus::Good,
            JvStatus::Exploration | JvStatus::Development => IndicatorStatus::Neutral,
            JvStatus::Suspended => IndicatorStatus::Bad,
        }
    }

    fn badge_label(&self) -> &'static str {
        self.label()
    }
}

fn badge_color(status: IndicatorStatus) -> BadgeColor {
    match status {
        IndicatorStatus::Good => BadgeColor::Success,
        IndicatorStatus::Bad => BadgeColor::Danger,
        IndicatorStatus::Warning => BadgeColor::Warning,
        IndicatorStatus::Neutral => BadgeColor::Informative,
    }
}

/// Tinted badge for a record status
#[component]
pub fn StatusBadge(#[prop(into)] label: String, status: IndicatorStatus) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=badge_color(status)>
            {label}
        </Badge>
    }
}

/// Badge for any [`BadgeTone`] value
pub fn tone_badge(value: &impl BadgeTone) -> impl IntoView {
    view! { <StatusBadge label=value.badge_label() status=value.tone() /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_tone_escalates() {
        assert_eq!(Severity::Low.tone(), IndicatorStatus::Neutral);
        assert_eq!(Severity::Medium.tone(), IndicatorStatus::Warning);
        assert_eq!(Severity::Critical.tone(), IndicatorStatus::Bad);
    }

    #[test]
    fn test_closed_outcomes() {
        assert_eq!(ApplicationStatus::Approved.tone(), IndicatorStatus::Good);
        assert_eq!(CaseStatus::Resolved.tone(), IndicatorStatus::Good);
        assert_eq!(PermitStatus::Revoked.tone(), IndicatorStatus::Bad);
    }
}
