//=========================================================================
// Platform Bridge
//=========================================================================
//
// Connects the native event source (owned by the graphics backend) to the
// orchestrator's loop.
//
// Components:
// - `interface`: event and error types (the contract)
// - `event_queue`: core-side queue drained once per loop iteration
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_queue;
pub(crate) mod interface;

//=== Public API ==========================================================

pub use interface::{EventSink, PlatformError, PlatformEvent};

//=== Internal API ========================================================

pub(crate) use event_queue::{EventQueue, TickControl};
