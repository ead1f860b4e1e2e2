//! View router.
//!
//! Holds the single "current view" selector and, on every interaction,
//! re-renders the whole page with exactly one view branch selected. The whole
//! thing is an explicit state-threading function:
//!
//! ```rust
//! use methodology_dashboard::data::MockDataProvider;
//! use methodology_dashboard::router::{render, DashboardState, Event, RenderContext, View};
//!
//! let provider = MockDataProvider::new();
//! let ctx = RenderContext {
//!     provider: &provider,
//!     now: chrono::NaiveDateTime::default(),
//!     version: "3.0",
//! };
//! let state = DashboardState::seed(&provider, "dashboard").unwrap();
//! let (state, page) = render(state, Event::Navigate("Projects".into()), &ctx);
//! assert_eq!(page.body.map(|b| b.view()), Some(View::Projects));
//! assert_eq!(state.projects.len(), 3);
//! ```
//!
//! # Structure
//!
//! - [`view`]: the view set and the selector
//! - [`event`]: interactions and form values
//! - [`settings`]: settings widget values
//! - [`state`]: session-local state
//! - [`page`]: the rendered view tree
//! - [`render`](mod@render): the render pass

pub mod event;
pub mod page;
pub mod render;
pub mod settings;
pub mod state;
pub mod view;

pub use event::{CreateProject, CustomReport, Event, QuickReport, ReportFormat, ReportType};
pub use page::{Notice, NoticeKind, Page, ViewBody};
pub use render::{RenderContext, render};
pub use settings::{AiSettings, DashboardPreferences, RefreshRate, Theme};
pub use state::DashboardState;
pub use view::{View, ViewSelector};
