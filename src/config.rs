use anyhow::{Context, bail};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BASE_DIR: &str = ".";

/// Startup configuration, built once from `program [port] [directory]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub base_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            base_dir: DEFAULT_BASE_DIR.to_string(),
        }
    }
}

impl Config {
    /// Reads the process arguments, skipping the program name.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_args(std::env::args().skip(1))
    }

    /// Builds a config from positional arguments. Anything past the second
    /// argument is ignored.
    pub fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut args = args.into_iter().map(Into::<String>::into);
        let mut cfg = Self::default();

        if let Some(port) = args.next() {
            cfg.port = port
                .parse::<u16>()
                .with_context(|| {
                    format!("usage: staticd [port] [directory]: invalid port {port:?}")
                })?;
            if cfg.port == 0 {
                bail!("usage: staticd [port] [directory]: port must be non-zero");
            }
        }

        if let Some(dir) = args.next() {
            cfg.base_dir = dir;
        }

        Ok(cfg)
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
