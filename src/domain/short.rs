use crate::application::error::CodecError;
use crate::ports::{ByteSink, ByteSource};
use crate::Result;

/// 2바이트 short 로 표현 가능한 최대값 (부호 비트는 항상 0)
pub const MAX_SHORT: u16 = i16::MAX as u16;

const SIGN_BIT: u16 = 0x8000;

/// big-endian 두 바이트를 [0, 32767] 범위의 값으로 합친다
pub fn unpack_short(hi: u8, lo: u8) -> Result<u16> {
    let value = u16::from_be_bytes([hi, lo]);
    if value & SIGN_BIT != 0 {
        return Err(CodecError::InvalidArgument(format!(
            "packed short has its sign bit set: {:02x}{:02x}",
            hi, lo
        )));
    }
    Ok(value)
}

/// 상위 바이트, 하위 바이트 순서로 기록
pub fn pack_short<S: ByteSink + ?Sized>(sink: &mut S, value: u16) -> Result<()> {
    if value > MAX_SHORT {
        return Err(CodecError::InvalidArgument(format!(
            "short value out of range [0, {}]: {}",
            MAX_SHORT, value
        )));
    }
    sink.write_bytes(&value.to_be_bytes())
}

pub fn read_short<S: ByteSource + ?Sized>(source: &mut S) -> Result<u16> {
    let hi = source
        .read_byte()?
        .ok_or(CodecError::UnexpectedEof { consumed: 0 })?;
    let lo = source
        .read_byte()?
        .ok_or(CodecError::UnexpectedEof { consumed: 1 })?;
    unpack_short(hi, lo)
}
