use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Malformed varint: no terminating byte after {read} bytes")]
    MalformedVarint { read: usize },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Unexpected end of input after {consumed} bytes")]
    UnexpectedEof { consumed: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CodecError {
    /// 값을 하나도 읽기 전에 입력이 끝난 경우 (스트림의 정상 종료)
    pub fn is_clean_eof(&self) -> bool {
        matches!(self, CodecError::UnexpectedEof { consumed: 0 })
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
