pub mod form_store;
pub mod state;

pub use form_store::FormStore;
pub use state::{reduce, validate, FormAction, FormState, Notice, NoticeSource, ValidationErrors};
