mod dashboard;

pub use dashboard::ImmigrationDashboard;
