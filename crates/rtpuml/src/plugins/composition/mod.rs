//! Composition diagram plugin
//!
//! One document per capsule showing its parts, ports and connectors:
//! ```text
//! @startuml Top-composition
//! skinparam componentstyle uml2
//! component Top {
//!     component worker #line.dashed {
//!         port "cmd" as App__Worker__cmd
//!     }
//!     port "ctl" as App__Top__ctl
//!     App__Top__ctl -u0)- App__Worker__cmd
//! }
//! @enduml
//! ```

mod renderer;

pub use renderer::CompositionRenderer;
