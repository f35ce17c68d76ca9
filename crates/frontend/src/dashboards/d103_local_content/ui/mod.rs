mod dashboard;

pub use dashboard::LocalContentDashboard;
