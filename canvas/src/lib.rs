//! Interactive editing-tool dispatch for the drawing editor.
//!
//! This crate turns normalized input events into document edits. The host
//! (a browser surface, a script runner, a test) converts raw pointer,
//! keyboard and command-line input into [`event::Event`]s and hands them to
//! an [`editor::Editor`]. The editor routes them to the single active
//! [`tool::Tool`], whose gesture state machine calls into an
//! [`engine::Engine`] to create and patch geometry and to request renders.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`editor`] | Dispatcher owning the active tool and the viewport |
//! | [`tool`] | Tool trait, built-in tools, tool factory, command tool |
//! | [`event`] | The closed input event union |
//! | [`viewport`] | Pan/zoom state and client ↔ canvas conversion |
//! | [`engine`] | Contract the editor and tools call into |
//! | [`doc`] | In-memory document implementing [`engine::Engine`] |
//! | [`consts`] | Shared numeric constants (zoom limits, defaults) |

pub mod consts;
pub mod doc;
pub mod editor;
pub mod engine;
pub mod event;
pub mod tool;
pub mod viewport;
