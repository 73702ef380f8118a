use async_trait::async_trait;
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::ports::AsyncByteSource;
use crate::Result;

/// `tokio::io::AsyncRead` 위의 비동기 입력 소스
#[derive(Debug)]
pub struct AsyncStreamSource<R> {
    inner: R,
}

impl<R: AsyncRead + Unpin + Send> AsyncStreamSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<R: AsyncRead + Unpin + Send> AsyncByteSource for AsyncStreamSource<R> {
    async fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte).await {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}
