pub mod email;
pub mod facebook;
pub mod notify;
pub mod oauth;
mod user_communication;
