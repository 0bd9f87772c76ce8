//! Configuration for the message service.
//!
//! CLI arguments with environment variable fallbacks, using clap.

use std::net::SocketAddr;

use clap::Parser;

use crate::paging::DEFAULT_PAGE_SIZE;

/// Versioned hypermedia message API
#[derive(Parser, Debug, Clone)]
#[command(name = "hateoas-messages")]
#[command(about = "Versioned hypermedia message API over an in-memory store")]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "LISTEN", default_value = "0.0.0.0:8080")]
    pub listen: SocketAddr,

    /// Number of messages per page
    #[arg(long, env = "PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Base URL used in hypermedia links instead of the request's Host header
    #[arg(long, env = "PUBLIC_URL")]
    pub public_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 {
            return Err("PAGE_SIZE must be a positive number".to_string());
        }
        if let Some(url) = &self.public_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(format!("PUBLIC_URL must be an http(s) URL, got '{}'", url));
            }
        }
        Ok(())
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            listen: self.listen,
            page_size: self.page_size,
            public_url: self.public_url.clone(),
        }
    }
}

/// Settings the server needs once arguments are validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub listen: SocketAddr,
    pub page_size: usize,
    pub public_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 8080)),
            page_size: DEFAULT_PAGE_SIZE,
            public_url: None,
        }
    }
}
