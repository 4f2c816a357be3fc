pub mod d100_console_stats;
