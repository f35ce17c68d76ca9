mod profile;
mod role;

pub use profile::{ProfileError, UserProfile};
pub use role::RoleCode;
