//! # Station Commands Module
//!
//! The entire inbound operation surface. A UI shell (Tauri, axum, CLI)
//! wires these functions to its own transport; nothing else reaches the
//! cafe state.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── rooms.rs     ◄─── Booking, drink orders, live charge, checkout
//! ├── drinks.rs    ◄─── Drink menu CRUD and import
//! ├── customers.rs ◄─── Customer admin CRUD and directory lookup
//! ├── rates.rs     ◄─── Rate table retrieval and update
//! └── history.rs   ◄─── Checkout history queries
//! ```
//!
//! ## Conventions
//! - Commands take `&CafeState` (plus the directory where a lookup is
//!   needed) and return `Result<Dto, ApiError>`
//! - Collaborator I/O resolves before the state lock is taken
//! - `debug!` on entry, `info!` when state changed

pub mod customers;
pub mod drinks;
pub mod history;
pub mod rates;
pub mod rooms;
