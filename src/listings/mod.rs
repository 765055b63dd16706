pub mod dtos;
pub mod handlers;
pub mod service;

pub use service::{GenerateError, Generated, from_markup, generate};
