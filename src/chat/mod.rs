//! Conversational support pipeline: history -> context -> reply
//!
//! The service loads a user's recent exchanges, flattens them into
//! chronological turns, prepends the system directive and hands the
//! assembled conversation to the configured LLM provider. Persistence
//! of the resulting exchange stays with the HTTP layer.

mod context;
mod service;

pub use context::ContextAssembler;
pub use service::ChatService;
