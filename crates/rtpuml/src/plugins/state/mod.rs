//! State machine diagram plugin
//!
//! One document per capsule that declares a state machine:
//! ```text
//! @startuml Ctrl-statemachine
//! skinparam componentstyle uml2
//! state "Idle" as App__Ctrl__Idle
//! state "Busy" as App__Ctrl__Busy {
//!     state "Working" as App__Ctrl__Busy__Working
//!     [*] --> App__Ctrl__Busy__Working
//! }
//! [*] --> App__Ctrl__Idle
//! App__Ctrl__Idle --> App__Ctrl__Busy : start
//! @enduml
//! ```

mod renderer;

pub use renderer::StateRenderer;
