//! # lumen-shared
//!
//! Domain vocabulary shared by the Lumen client core: roles, message
//! classification enums, time-derived message identifiers, and the
//! constants that drive the simulated backend.

pub mod constants;
pub mod types;

pub use types::{DeliveryStatus, MessageId, MessageIdAllocator, MessageKind, Role, Sender};
