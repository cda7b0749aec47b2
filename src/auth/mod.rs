pub mod dto;
pub mod password;
pub mod service;

pub use service::AuthService;
