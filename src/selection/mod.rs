//! Selection module — the one piece of mutable state on the comparison page.
//! It lives in WASM memory (thread_local) for the lifetime of the worker and
//! is rebuilt from defaults whenever the view is reset.

pub mod snapshot;
pub mod state;
