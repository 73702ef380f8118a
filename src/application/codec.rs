use bytes::Buf;
use std::io::{Read, Write};
use tokio::io::AsyncRead;

use crate::adapters::{AsyncStreamSource, BufSource, StreamSink, StreamSource};
use crate::domain;
use crate::Result;

/// varint32 / packed short 코덱
///
/// 상태가 없으므로 복사해서 여러 스레드에서 그대로 사용해도 된다.
/// 각 호출은 자기 자신의 소스/싱크만 건드린다.
#[derive(Debug, Default, Clone, Copy)]
pub struct VarintCodec;

impl VarintCodec {
    pub fn new() -> Self {
        Self
    }

    pub fn encode32<W: Write>(&self, output: W, value: u32) -> Result<()> {
        domain::encode32(&mut StreamSink::new(output), value)
    }

    pub fn encode_i32<W: Write>(&self, output: W, value: i32) -> Result<()> {
        domain::encode_i32(&mut StreamSink::new(output), value)
    }

    pub fn encoded_len32(&self, value: u32) -> usize {
        domain::encoded_len32(value)
    }

    /// 스트림에서 varint32 하나를 읽는다
    pub fn decode32<R: Read>(&self, input: R) -> Result<u32> {
        domain::decode32(&mut StreamSource::new(input))
    }

    /// 버퍼에서 varint32 하나를 읽고 커서를 그만큼 전진시킨다
    pub fn decode32_buf<B: Buf + ?Sized>(&self, buf: &mut B) -> Result<u32> {
        domain::decode32(&mut BufSource::new(buf))
    }

    pub async fn decode32_async<R: AsyncRead + Unpin + Send>(&self, input: R) -> Result<u32> {
        domain::decode32_async(&mut AsyncStreamSource::new(input)).await
    }

    pub fn pack_short<W: Write>(&self, output: W, value: u16) -> Result<()> {
        domain::pack_short(&mut StreamSink::new(output), value)
    }

    pub fn unpack_short(&self, hi: u8, lo: u8) -> Result<u16> {
        domain::unpack_short(hi, lo)
    }
}
