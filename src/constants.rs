/// Default base URL for the Wykop REST API
pub const DEFAULT_BASE_URL: &str = "https://wykop.pl/api/v3";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default page number for tag stream requests
pub const DEFAULT_PAGE: u32 = 1;
/// Default number of items per page in tag stream requests
pub const DEFAULT_PAGE_SIZE: u32 = 25;
/// User agent string used in HTTP requests to identify this client to the Wykop API
pub const USER_AGENT: &str = concat!("Rust-Wykop-Client/", env!("CARGO_PKG_VERSION"));
