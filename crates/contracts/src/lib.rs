pub mod portal;
pub mod system;
