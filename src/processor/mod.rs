mod stream;

pub use stream::StreamProcessor;
