pub mod dashboard;

pub use dashboard::ConsoleDashboard;
