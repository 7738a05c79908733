//! HTTP surface of the gitgate gateway.
//!
//! One route matters: `GET /blob/<ref-or-hash>[/<path>]`. The dispatcher
//! enumerates references, finds the reference boundary in the URL (falling
//! back to hash-literal interpretation), walks the residual path, and
//! writes back blob bytes or an HTML listing. Reference-enumeration
//! failures are 500s; everything else the user can provoke is a 404.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayResult};
pub use router::build_router;
pub use server::GatewayServer;
