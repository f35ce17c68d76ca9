pub mod page_header;
pub mod stat_card;
pub mod status_badge;

pub use page_header::{PageHeader, Section};
pub use stat_card::{StatCard, StatGrid};
pub use status_badge::{tone_badge, BadgeTone, StatusBadge};
