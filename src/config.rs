use std::path::PathBuf;

const LISTEN_ADDR: &str = "127.0.0.1:8080";
const DOCUMENT_ROOT: &str = "www/";
const SERVER_NAME: &str = "staticd/0.1";
const RECV_BUFFER_SIZE: usize = 1024;

/// Fixed server settings.
///
/// Everything here is a compile-time constant: there are no flags,
/// environment variables, or config files. The value is cloned into each
/// connection task so request handling never reads shared mutable state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the listener binds to
    pub listen_addr: String,

    /// Directory below which every served file must resolve
    pub document_root: PathBuf,

    /// Product string sent in the `Server` header
    pub server_name: String,

    /// Chunk size for the request receive loop
    pub recv_buffer_size: usize,
}

impl Config {
    pub fn load() -> Self {
        Self {
            listen_addr: LISTEN_ADDR.to_string(),
            document_root: PathBuf::from(DOCUMENT_ROOT),
            server_name: SERVER_NAME.to_string(),
            recv_buffer_size: RECV_BUFFER_SIZE,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load()
    }
}
