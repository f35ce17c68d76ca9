mod dashboard;

pub use dashboard::ComplianceDashboard;
