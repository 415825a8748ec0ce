//! Server configuration from flags and environment.
//!
//! | Flag      | Env           | Default     |
//! |-----------|---------------|-------------|
//! | `--host`  | `PAINT_HOST`  | `127.0.0.1` |
//! | `--port`  | `PAINT_PORT`  | `5000`      |
//! | `--debug` | `PAINT_DEBUG` | off         |
//!
//! `RUST_LOG`, when set, overrides the log filter chosen by `--debug`.

use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "paint_web", version, about = "Serve the room painting estimate form")]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, env = "PAINT_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PAINT_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Verbose request logging
    #[arg(long, env = "PAINT_DEBUG", value_parser = clap::builder::BoolishValueParser::new())]
    pub debug: bool,
}

impl ServerConfig {
    /// `host:port` for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Log filter used when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "debug,paint_web=trace,tower_http=debug"
        } else {
            "info,paint_web=info"
        }
    }
}
