//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the signed-in identity for the life of the tab. It is the
//! only writer; pages and components read snapshots through the store
//! handle provided via context.

pub mod session;
