pub mod roster;
pub mod view;
pub mod wizard;

pub use roster::{provide_personnel_roster, use_personnel_roster, PersonnelRoster};
pub use view::AddPersonnelView;
