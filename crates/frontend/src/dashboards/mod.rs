pub mod d100_commission_admin;
pub mod d101_company_admin;
pub mod d102_compliance;
pub mod d103_local_content;
pub mod d104_personnel;
pub mod d105_jv_coordinator;
pub mod d106_immigration;
pub mod d107_finance;

pub use d100_commission_admin::ui::CommissionAdminDashboard;
pub use d101_company_admin::ui::CompanyAdminDashboard;
pub use d102_compliance::ui::ComplianceDashboard;
pub use d103_local_content::ui::LocalContentDashboard;
pub use d104_personnel::ui::PersonnelDashboard;
pub use d105_jv_coordinator::ui::JvCoordinatorDashboard;
pub use d106_immigration::ui::ImmigrationDashboard;
pub use d107_finance::ui::FinanceDashboard;
