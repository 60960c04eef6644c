pub mod backend;
pub mod errors;
pub mod id;

pub use backend::Backend;
pub use errors::{ConfigError, TutorError};
pub use id::{new_id, SessionId};
