mod dashboard;

pub use dashboard::JvCoordinatorDashboard;
