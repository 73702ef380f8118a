pub mod byte_sink;

pub use byte_sink::ByteSink;
