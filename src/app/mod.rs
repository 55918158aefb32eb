// src/app/mod.rs
//! GameApp の DOM まわりのロジックを役割ごとに分割して置くモジュールだよ！

pub mod click_handler;
pub mod dom;
pub mod renderer;
