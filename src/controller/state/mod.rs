//! Controller sub-states

mod form_state;
mod notifications;
mod pagination;

pub use form_state::{FormDraft, FormField};
pub use notifications::{Notification, Notifications};
pub use pagination::Pagination;
