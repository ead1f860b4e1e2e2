//! Session-local dashboard state.
//!
//! Each browser session owns one [`DashboardState`](crate::router::DashboardState),
//! kept in memory only. Sessions are identified by UUID and expire after a
//! period of inactivity.
//!
//! # Architecture
//!
//! - [`Session`]: One visitor's state and activity timestamps
//! - [`SessionStore`]: Thread-safe store for all active sessions
//!
//! # Example
//!
//! ```rust
//! use methodology_dashboard::data::MockDataProvider;
//! use methodology_dashboard::router::{DashboardState, View};
//! use methodology_dashboard::session::SessionStore;
//!
//! let store = SessionStore::new();
//! let state = DashboardState::seed(&MockDataProvider::new(), "projects").unwrap();
//! let session = store.create(state);
//!
//! let view = session.update(|state| {
//!     let view = state.selector.view();
//!     (state, view)
//! });
//! assert_eq!(view, Some(View::Projects));
//! ```

mod store;

pub use store::{DEFAULT_SESSION_TIMEOUT, Session, SessionStore};
