// src/config/mod.rs
//! ゲームの定数置き場だよ！

pub mod ui;
