// ═══════════════════════════════════════════════════════════════════════════════
// 📦 ui/mod.rs - Terminal User Interface Module
// ═══════════════════════════════════════════════════════════════════════════════
// This module implements the TUI using Ratatui.
// Features:
// - Dock layout over the whole terminal with one 50/50 split
// - Search window (recipe list) and display window (recipe text)
// - Key hints on each window border
// ═══════════════════════════════════════════════════════════════════════════════

mod controls;
pub mod display_panel;
pub mod docking;
mod helpers;
pub mod search_panel;

pub use docking::create_default_layout;
