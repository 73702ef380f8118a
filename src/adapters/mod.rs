pub mod async_stream;
pub mod buffer;
pub mod cli_runner;
pub mod stream;

pub use async_stream::AsyncStreamSource;
pub use buffer::{BufSink, BufSource, GetVarint32, PutVarint32};
pub use stream::{StreamSink, StreamSource};
