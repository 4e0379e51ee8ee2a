pub mod oauth;
pub mod timestamp;
pub mod user;

pub use oauth::OAuthProvider;
pub use timestamp::Timestamp;
pub use user::User;
