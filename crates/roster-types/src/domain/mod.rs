mod bracket;
mod member;
mod role;
mod unit;

pub use bracket::AgeBracket;
pub use member::Member;
pub use role::Role;
pub use unit::{OrganizationUnit, UnitKind, UnitRef};
