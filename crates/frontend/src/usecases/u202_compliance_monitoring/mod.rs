pub mod filter;
pub mod view;

pub use view::ComplianceMonitoringView;
