//! # forum-pseudonym
//!
//! Anonymous display names of the form `"Quiet Fox #123"`.
//!
//! - [`PseudonymRegistry`] remembers every name handed out for the life of
//!   the process; construct one and share it, there is no global.
//! - [`PseudonymGenerator`] draws candidates from an injected RNG and claims
//!   them in the registry, retrying on collision.
//! - [`color_for`] maps a name to one of six avatar colors by length.

pub mod avatar;
pub mod error;
pub mod generator;
pub mod pseudonym;
pub mod registry;
pub mod vocabulary;

pub use avatar::{ColorToken, PALETTE, color_for};
pub use error::PseudonymError;
pub use generator::{DEFAULT_MAX_ATTEMPTS, PseudonymGenerator, seeded_rng};
pub use pseudonym::Pseudonym;
pub use registry::PseudonymRegistry;
pub use vocabulary::Vocabulary;
