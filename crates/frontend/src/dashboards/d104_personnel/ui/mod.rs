mod dashboard;

pub use dashboard::PersonnelDashboard;
