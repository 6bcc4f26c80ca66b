//! Typed bindings over a dynamically loaded `libwayland-client`: compile-time
//! interface descriptors, RAII ownership of protocol objects, and one-call
//! resolution of the server's advertised globals.

pub mod libwayland;

mod connection;
mod handle;
mod interface;
mod registry;
mod shm;

pub use connection::{Connection, ConnectionError};
pub use handle::{Handle, InvalidHandleError, ListenerError};
pub use interface::Interface;
pub use registry::{Globals, ResolveError};
pub use shm::{ShmAllocator, ShmBuffer, ShmError, run_fill};
