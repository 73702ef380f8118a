pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::codec::VarintCodec;
pub use application::error::{CodecError, Result};
