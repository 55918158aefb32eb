// src/logic/mod.rs
//! ゲームの純粋なロジックを置くモジュールだよ！
//! ここのコードはブラウザ無しの `cargo test` でそのまま動く。

pub mod board;
pub mod deal;
pub mod deck;
