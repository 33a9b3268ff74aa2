//! GREEN-API integration layer: endpoint templates and call transports.

mod endpoint;
mod http;
mod simulated;

pub use endpoint::Endpoint;
pub use http::HttpTransport;
pub use simulated::SimulatedTransport;

/// Returns the api module name for smoke checks.
pub fn module_name() -> &'static str {
    "api"
}
