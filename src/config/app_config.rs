use super::cli::Cli;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexCase {
    Lower,
    Upper,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub hex_case: HexCase,
    pub read_buffer_size: usize, // stdin 읽기 버퍼 크기
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            hex_case: HexCase::Lower,
            read_buffer_size: 64 * 1024, // 64KB
        }
    }
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let hex_case = if cli.upper { HexCase::Upper } else { HexCase::Lower };
        Self {
            hex_case,
            ..Self::default()
        }
    }

    pub fn render_hex(&self, bytes: &[u8]) -> String {
        match self.hex_case {
            HexCase::Lower => hex::encode(bytes),
            HexCase::Upper => hex::encode_upper(bytes),
        }
    }
}
