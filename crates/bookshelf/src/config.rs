use clap::Parser;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 9000;

/// Server settings, from flags or the environment.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "bookshelf-server", version, about = "In-memory bookshelf HTTP API")]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "BOOKSHELF_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "BOOKSHELF_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
