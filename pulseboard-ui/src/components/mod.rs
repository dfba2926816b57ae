//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod alert_table;
pub mod chart;
pub mod loading;
pub mod nav;

pub use alert_table::AlertTable;
pub use chart::{Chart, ChartKind};
pub use loading::DashboardSkeleton;
pub use nav::Sidebar;
