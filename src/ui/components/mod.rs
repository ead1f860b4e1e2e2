//! Reusable dashboard widgets.
//!
//! The widget kinds the dashboard needs, rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`Card`], [`CardHeader`], [`CardStat`]: Project cards
//! - [`Badge`]: Status badge
//! - [`Button`]: Submit button with variants
//! - [`MetricTile`], [`MetricRow`]: KPI tiles
//! - [`ProgressBar`]: Progress column
//! - [`DataTable`]: Text table
//! - [`TabList`], [`TabPanel`]: Tabs
//! - [`Expander`]: Collapsible section
//! - [`TextInput`], [`Select`], [`Checkbox`], [`Slider`]: Form widgets
//! - [`NoticeBanner`]: Success banner
//! - [`Separator`]: Horizontal rule

mod badge;
mod button;
mod card;
mod expander;
mod input;
mod metric;
mod notice;
mod progress;
mod separator;
mod table;
mod tabs;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonVariant};
pub use card::{Card, CardHeader, CardStat};
pub use expander::Expander;
pub use input::{Checkbox, Select, SelectOption, Slider, TextInput};
pub use metric::{MetricRow, MetricTile};
pub use notice::NoticeBanner;
pub use progress::ProgressBar;
pub use separator::Separator;
pub use table::DataTable;
pub use tabs::{TabList, TabPanel};
