//! Class diagram plugin
//!
//! One document per model covering the whole package tree:
//! ```text
//! @startuml Demo
//! skinparam componentstyle uml2
//! package Demo <<Folder>> {
//!     class Top {
//!         +count: int
//!         #send(to: Addr, data: byte[8]): bool
//!     }
//! }
//! @enduml
//! ```

mod renderer;

pub use renderer::ClassRenderer;
