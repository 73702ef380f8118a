use async_trait::async_trait;
use crate::Result;

/// 바이트를 하나씩 순차적으로 읽어오는 입력 소스
///
/// `Ok(None)` 은 입력이 끝났음을 의미하고, 하위 I/O 에러는 그대로 전달된다.
pub trait ByteSource {
    fn read_byte(&mut self) -> Result<Option<u8>>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        (**self).read_byte()
    }
}

/// 비동기 버전의 입력 소스
#[async_trait]
pub trait AsyncByteSource: Send {
    async fn read_byte(&mut self) -> Result<Option<u8>>;
}
