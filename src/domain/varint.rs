use crate::application::error::CodecError;
use crate::ports::{AsyncByteSource, ByteSink, ByteSource};
use crate::Result;

pub const CONTINUATION_BIT: u8 = 0x80;
pub const PAYLOAD_MASK: u8 = 0x7F;

/// u32 하나를 표현하는 데 필요한 최대 그룹 바이트 수
pub const MAX_VARINT32_LEN: usize = 5;

/// 32비트를 넘는 값(64비트 인코딩 등)에서 버리고 넘어갈 수 있는 최대 바이트 수
pub const DISCARD_WINDOW: usize = 5;

/// `encode32` 가 출력할 바이트 수
pub fn encoded_len32(value: u32) -> usize {
    let bits = (u32::BITS - value.leading_zeros()) as usize;
    bits.div_ceil(7).max(1)
}

/// 스택 버퍼에 인코딩하고 (버퍼, 길이) 를 반환
pub fn encode32_to_array(mut value: u32) -> ([u8; MAX_VARINT32_LEN], usize) {
    let mut out = [0u8; MAX_VARINT32_LEN];
    let mut len = 0;
    while value & !(PAYLOAD_MASK as u32) != 0 {
        out[len] = (value as u8 & PAYLOAD_MASK) | CONTINUATION_BIT;
        value >>= 7;
        len += 1;
    }
    out[len] = value as u8;
    (out, len + 1)
}

/// base-128 varint 로 인코딩해 싱크에 기록 (1~5 바이트)
pub fn encode32<S: ByteSink + ?Sized>(sink: &mut S, value: u32) -> Result<()> {
    let (bytes, len) = encode32_to_array(value);
    sink.write_bytes(&bytes[..len])
}

/// 부호 있는 값을 받는 호출자를 위한 진입점. 음수는 호출자 버그로 취급한다.
pub fn encode_i32<S: ByteSink + ?Sized>(sink: &mut S, value: i32) -> Result<()> {
    let value = u32::try_from(value).map_err(|_| {
        CodecError::InvalidArgument(format!("varint value must be non-negative, got {}", value))
    })?;
    encode32(sink, value)
}

/// 바이트를 하나씩 받아 varint32 를 복원하는 디코더
///
/// 동기/비동기, 스트림/버퍼 디코딩이 모두 이 상태 기계를 공유한다.
/// 값이 완성되거나 에러가 난 뒤에는 더 이상 바이트를 넣으면 안 된다.
#[derive(Debug, Default, Clone)]
pub struct Varint32Decoder {
    result: u32,
    read: usize,
}

impl Varint32Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 바이트 하나를 넣는다. 종료 바이트를 만나면 `Some(value)`.
    pub fn push(&mut self, byte: u8) -> Result<Option<u32>> {
        if self.read < MAX_VARINT32_LEN {
            // 다섯 번째 그룹(shift 28)은 하위 4비트만 u32 에 들어간다
            let shift = 7 * self.read as u32;
            self.result |= ((byte & PAYLOAD_MASK) as u32) << shift;
        }
        self.read += 1;

        if byte & CONTINUATION_BIT == 0 {
            return Ok(Some(self.result));
        }
        if self.read >= MAX_VARINT32_LEN + DISCARD_WINDOW {
            return Err(CodecError::MalformedVarint { read: self.read });
        }
        Ok(None)
    }

    /// 값이 완성되기 전에 입력이 끝났을 때의 에러
    ///
    /// 이미 32비트를 넘어선 상태(버리는 구간)에서 끝났다면 종료 바이트를
    /// 찾지 못한 것이므로 malformed 로 본다.
    pub fn eof_error(&self) -> CodecError {
        if self.read >= MAX_VARINT32_LEN {
            CodecError::MalformedVarint { read: self.read }
        } else {
            CodecError::UnexpectedEof { consumed: self.read }
        }
    }
}

pub fn decode32<S: ByteSource + ?Sized>(source: &mut S) -> Result<u32> {
    let mut decoder = Varint32Decoder::new();
    loop {
        match source.read_byte()? {
            Some(byte) => {
                if let Some(value) = decoder.push(byte)? {
                    return Ok(value);
                }
            }
            None => return Err(decoder.eof_error()),
        }
    }
}

pub async fn decode32_async<S: AsyncByteSource + ?Sized>(source: &mut S) -> Result<u32> {
    let mut decoder = Varint32Decoder::new();
    loop {
        match source.read_byte().await? {
            Some(byte) => {
                if let Some(value) = decoder.push(byte)? {
                    return Ok(value);
                }
            }
            None => return Err(decoder.eof_error()),
        }
    }
}
