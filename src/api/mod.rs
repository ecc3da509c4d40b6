//! API Module - browser event names and payload DTOs

pub mod dto;
pub mod events;

pub use dto::*;
