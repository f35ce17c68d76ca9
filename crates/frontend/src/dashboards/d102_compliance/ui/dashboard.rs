use super::super::mock;
use crate::usecases::u202_compliance_monitoring::ComplianceMonitoringView;
use leptos::prelude::*;

/// Landing page of compliance officers and reviewers
#[component]
pub fn ComplianceDashboard() -> impl IntoView {
    view! {
        <div id="d102_compliance--dashboard">
            <ComplianceMonitoringView cases=mock::cases() title="Compliance monitoring" />
        </div>
    }
}
