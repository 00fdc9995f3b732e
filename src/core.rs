pub mod error;
pub mod http;
pub mod traits;
pub mod types;

pub use self::error::CoachError;
pub use self::http::HttpClient;
pub use self::traits::PlanGenerator;
pub use self::types::{ChatRole, Message};
