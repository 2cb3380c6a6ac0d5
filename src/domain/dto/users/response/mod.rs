pub mod login_response;
pub mod user_response;

pub use login_response::LoginResponse;
pub use user_response::UserResponse;
