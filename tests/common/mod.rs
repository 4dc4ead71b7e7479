#![allow(dead_code)]

pub mod mock_client;
pub mod mock_handler;
pub mod strategies;

pub use mock_client::*;
pub use mock_handler::*;
pub use strategies::*;
