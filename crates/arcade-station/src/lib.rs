//! # arcade-station: Terminal Orchestration Layer
//!
//! The layer between a UI shell and `arcade-core`. The shell (a desktop
//! terminal, a web API, a test harness) owns rendering and transport;
//! this crate owns everything between the transport and the business
//! logic.
//!
//! ## Module Organization
//! ```text
//! arcade_station/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── state.rs        ◄─── Arc<Mutex<Cafe>> single-writer container
//! ├── clock.rs        ◄─── Injectable time source
//! ├── providers.rs    ◄─── Customer directory + menu import boundary
//! ├── telemetry.rs    ◄─── Tracing subscriber setup
//! ├── error.rs        ◄─── ApiError for command responses
//! └── commands/
//!     ├── rooms.rs     ◄─── book, order, live charge, checkout
//!     ├── drinks.rs    ◄─── menu CRUD + import
//!     ├── customers.rs ◄─── customer admin + lookup
//!     ├── rates.rs     ◄─── rate table
//!     └── history.rs   ◄─── history queries
//! ```
//!
//! ## Concurrency Model
//! One mutex guards the whole cafe. Checkout moves room, ledger and
//! history in a single locked step, so concurrent terminals can never
//! observe a half-applied checkout. Collaborator I/O (directory lookups)
//! always resolves before the lock is taken; nothing blocks under it.
//!
//! ## Example
//! ```rust
//! use arcade_station::commands::{drinks, rooms};
//! use arcade_station::clock::ManualClock;
//! use arcade_station::state::CafeState;
//! use chrono::{Duration, TimeZone, Utc};
//! use std::sync::Arc;
//!
//! let clock = Arc::new(ManualClock::at(
//!     Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap(),
//! ));
//! let state = CafeState::with_clock(clock.clone());
//!
//! drinks::add_drink(&state, "Coffee".to_string(), 15).unwrap();
//! assert_eq!(rooms::list_rooms(&state).len(), 6);
//! ```

pub mod clock;
pub mod commands;
pub mod error;
pub mod providers;
pub mod state;
pub mod telemetry;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{ApiError, ErrorCode};
pub use providers::{CustomerDirectory, CustomerRecord, DirectoryError, MenuItemRecord};
pub use state::CafeState;
