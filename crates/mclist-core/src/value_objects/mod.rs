//! Value objects - immutable types that represent domain concepts

mod ids;
mod month_window;
mod role;

pub use ids::{IdParseError, ServerId, TagId, UserId, VersionId, VoteId};
pub use month_window::MonthWindow;
pub use role::{Role, RoleParseError};
