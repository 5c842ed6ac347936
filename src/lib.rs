pub mod application;
pub mod dto;
pub mod error;
pub mod routing;
pub mod service;
