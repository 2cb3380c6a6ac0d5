pub mod login_request;

pub use login_request::LoginRequest;
