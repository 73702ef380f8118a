use bytes::{Buf, BufMut};
use std::io;

use crate::application::error::CodecError;
use crate::domain::{decode32, encode32_to_array, read_short, MAX_SHORT};
use crate::ports::{ByteSink, ByteSource};
use crate::Result;

/// `bytes::Buf` 위의 입력 소스. 읽은 만큼 버퍼의 커서가 전진한다.
#[derive(Debug)]
pub struct BufSource<B> {
    inner: B,
}

impl<B: Buf> BufSource<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }
}

impl<B: Buf> ByteSource for BufSource<B> {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        if !self.inner.has_remaining() {
            return Ok(None);
        }
        Ok(Some(self.inner.get_u8()))
    }
}

/// `bytes::BufMut` 위의 출력 싱크
#[derive(Debug)]
pub struct BufSink<B> {
    inner: B,
}

impl<B: BufMut> BufSink<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }

    fn ensure_remaining_mut(&self, required: usize) -> Result<()> {
        if self.inner.remaining_mut() < required {
            return Err(CodecError::Io(io::Error::new(
                io::ErrorKind::WriteZero,
                format!(
                    "buffer too small: need {} bytes but has {}",
                    required,
                    self.inner.remaining_mut()
                ),
            )));
        }
        Ok(())
    }
}

impl<B: BufMut> ByteSink for BufSink<B> {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.ensure_remaining_mut(1)?;
        self.inner.put_u8(byte);
        Ok(())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.ensure_remaining_mut(bytes.len())?;
        self.inner.put_slice(bytes);
        Ok(())
    }
}

/// `BufMut` 에 varint32 / packed short 를 바로 쓰기 위한 확장 trait
pub trait PutVarint32: BufMut {
    /// `put_u8` 과 마찬가지로 공간이 부족하면 panic
    fn put_varint32(&mut self, value: u32) {
        let (bytes, len) = encode32_to_array(value);
        self.put_slice(&bytes[..len]);
    }

    fn put_short(&mut self, value: u16) -> Result<()> {
        if value > MAX_SHORT {
            return Err(CodecError::InvalidArgument(format!(
                "short value out of range [0, {}]: {}",
                MAX_SHORT, value
            )));
        }
        self.put_u16(value);
        Ok(())
    }
}

impl<B: BufMut + ?Sized> PutVarint32 for B {}

/// `Buf` 에서 varint32 / packed short 를 읽기 위한 확장 trait
pub trait GetVarint32: Buf {
    fn get_varint32(&mut self) -> Result<u32> {
        decode32(&mut BufSource::new(self))
    }

    fn get_short(&mut self) -> Result<u16> {
        read_short(&mut BufSource::new(self))
    }
}

impl<B: Buf + ?Sized> GetVarint32 for B {}
