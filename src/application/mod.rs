pub mod codec;
pub mod error;

pub use codec::VarintCodec;
pub use error::{CodecError, Result};
