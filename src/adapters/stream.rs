use std::io::{self, Read, Write};

use crate::ports::{ByteSink, ByteSource};
use crate::Result;

/// `std::io::Read` 위의 입력 소스
///
/// 한 번에 한 바이트만 읽으므로 버퍼링은 호출자가 (`BufReader` 등으로) 책임진다.
#[derive(Debug)]
pub struct StreamSource<R> {
    inner: R,
}

impl<R: Read> StreamSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: Read> ByteSource for StreamSource<R> {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// `std::io::Write` 위의 출력 싱크
#[derive(Debug)]
pub struct StreamSink<W> {
    inner: W,
}

impl<W: Write> StreamSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ByteSink for StreamSink<W> {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.inner.write_all(&[byte])?;
        Ok(())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::CodecError;
    use crate::domain::{decode32, encode32};
    use std::io::Cursor;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// 항상 지정한 종류의 I/O 에러를 돌려주는 reader
    struct FailingReader {
        kind: io::ErrorKind,
    }

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(self.kind, "connection reset"))
        }
    }

    /// 첫 read 에서 Interrupted 를 한 번 돌려주는 reader
    struct InterruptOnce {
        interrupted: bool,
        inner: Cursor<Vec<u8>>,
    }

    impl Read for InterruptOnce {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            self.inner.read(buf)
        }
    }

    #[test]
    fn test_stream_roundtrip() {
        let mut sink = StreamSink::new(Vec::new());
        encode32(&mut sink, 16384).unwrap();
        let bytes = sink.into_inner();
        assert_eq!(bytes, vec![0x80, 0x80, 0x01]);

        let mut source = StreamSource::new(Cursor::new(bytes));
        assert_eq!(decode32(&mut source).unwrap(), 16384);
    }

    #[test]
    fn test_sink_error_propagates() {
        let mut sink = StreamSink::new(FailingWriter);
        match encode32(&mut sink, 1).unwrap_err() {
            CodecError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_interrupted_read_is_retried() {
        let reader = InterruptOnce {
            interrupted: false,
            inner: Cursor::new(vec![0xac, 0x02]),
        };
        let mut source = StreamSource::new(reader);
        assert_eq!(decode32(&mut source).unwrap(), 300);
    }

    #[test]
    fn test_source_error_propagates() {
        // UnexpectedEof 종류의 에러도 입력 종료가 아니라 I/O 실패로 전달돼야 함
        for kind in [io::ErrorKind::ConnectionReset, io::ErrorKind::UnexpectedEof] {
            let mut source = StreamSource::new(FailingReader { kind });
            match decode32(&mut source).unwrap_err() {
                CodecError::Io(e) => assert_eq!(e.kind(), kind),
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }
}
