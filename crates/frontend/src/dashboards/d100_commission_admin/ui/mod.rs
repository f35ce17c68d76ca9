mod dashboard;

pub use dashboard::CommissionAdminDashboard;
