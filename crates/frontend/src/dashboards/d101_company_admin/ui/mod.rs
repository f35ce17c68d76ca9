mod dashboard;

pub use dashboard::CompanyAdminDashboard;
