mod doh_resolver;
mod http_transport;
mod system_resolver;

pub use doh_resolver::DohResolver;
pub use http_transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use system_resolver::SystemResolver;

// Re-export for convenience
pub use doh_client_domain::DohQuery;
