pub mod incoming;
pub mod outgoing;

pub use incoming::{AsyncByteSource, ByteSource};
pub use outgoing::ByteSink;
