// src/gui/components/mod.rs
pub mod action_bar;
pub mod data_table;
pub mod filter_panel;
pub mod report_cards;
pub mod tabs;
