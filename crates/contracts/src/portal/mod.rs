//! Records shown on the role dashboards.
//!
//! The portal has no backend: every list is an inline mock array built by the
//! frontend. These types keep the mock data typed and carry the small amount
//! of arithmetic the dashboards need (status counts, renewal windows, shares).

pub mod applications;
pub mod compliance;
pub mod finance;
pub mod joint_ventures;
pub mod local_content;
pub mod permits;
pub mod personnel;
pub mod stats;
pub mod work_permits;
