pub mod u201_add_personnel;
pub mod u202_compliance_monitoring;
