use anyhow::{bail, Context};
use bytes::{Buf, Bytes};
use std::io::Write;
use tokio::io::{AsyncRead, BufReader};

use crate::adapters::AsyncStreamSource;
use crate::application::VarintCodec;
use crate::config::{AppConfig, Commands};
use crate::domain::decode32_async;

/// `varint-tool` 서브커맨드 실행기
///
/// 결과는 `out` 에 한 줄씩, 진행 로그는 stderr 에 출력한다.
pub struct CliRunner {
    config: AppConfig,
    codec: VarintCodec,
}

impl CliRunner {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            codec: VarintCodec::new(),
        }
    }

    pub async fn run<R, W>(&self, cmd: Commands, stdin: R, out: &mut W) -> anyhow::Result<()>
    where
        R: AsyncRead + Unpin + Send,
        W: Write,
    {
        match cmd {
            Commands::Encode { values } => self.encode(&values, out),
            Commands::Decode { hex: Some(hex), .. } => self.decode_hex(&hex, out),
            Commands::Decode { hex: None, .. } => self.decode_stream(stdin, out).await,
            Commands::PackShort { value } => self.pack_short(value, out),
            Commands::UnpackShort { hex } => self.unpack_short(&hex, out),
        }
    }

    fn encode<W: Write>(&self, values: &[u32], out: &mut W) -> anyhow::Result<()> {
        let mut encoded = Vec::with_capacity(5);
        for &value in values {
            encoded.clear();
            self.codec.encode32(&mut encoded, value)?;
            writeln!(out, "{}", self.config.render_hex(&encoded))?;
        }
        Ok(())
    }

    fn decode_hex<W: Write>(&self, hex: &str, out: &mut W) -> anyhow::Result<()> {
        let raw = hex::decode(hex.trim()).context("invalid hex input")?;
        let mut buf = Bytes::from(raw);
        let mut offset = 0;

        while buf.has_remaining() {
            let before = buf.remaining();
            let value = self
                .codec
                .decode32_buf(&mut buf)
                .with_context(|| format!("failed to decode varint at byte offset {}", offset))?;
            offset += before - buf.remaining();
            writeln!(out, "{}", value)?;
        }
        Ok(())
    }

    async fn decode_stream<R, W>(&self, stdin: R, out: &mut W) -> anyhow::Result<()>
    where
        R: AsyncRead + Unpin + Send,
        W: Write,
    {
        let reader = BufReader::with_capacity(self.config.read_buffer_size, stdin);
        let mut source = AsyncStreamSource::new(reader);
        let mut count = 0usize;

        loop {
            match decode32_async(&mut source).await {
                Ok(value) => {
                    writeln!(out, "{}", value)?;
                    count += 1;
                }
                Err(e) if e.is_clean_eof() => break,
                Err(e) => {
                    return Err(e).with_context(|| format!("failed to decode value #{}", count + 1))
                }
            }
        }

        eprintln!("[DECODE] {} values read from stdin", count);
        Ok(())
    }

    fn pack_short<W: Write>(&self, value: u16, out: &mut W) -> anyhow::Result<()> {
        let mut packed = Vec::with_capacity(2);
        self.codec.pack_short(&mut packed, value)?;
        writeln!(out, "{}", self.config.render_hex(&packed))?;
        Ok(())
    }

    fn unpack_short<W: Write>(&self, hex: &str, out: &mut W) -> anyhow::Result<()> {
        let raw = hex::decode(hex.trim()).context("invalid hex input")?;
        let &[hi, lo] = raw.as_slice() else {
            bail!("packed short must be exactly 2 bytes, got {}", raw.len());
        };
        let value = self.codec.unpack_short(hi, lo)?;
        writeln!(out, "{}", value)?;
        Ok(())
    }
}
