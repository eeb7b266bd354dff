pub mod authenticated_user;
pub mod authentication_request;

pub use authenticated_user::{AuthRejection, AuthenticatedUser, OptionalUser};
pub use authentication_request::AuthMode;
