pub mod d100_console_stats;

pub use d100_console_stats::ui::ConsoleDashboard;
