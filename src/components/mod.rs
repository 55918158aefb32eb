// src/components/mod.rs
//! ゲームの純粋なデータ部品を置くモジュールだよ！

pub mod card;
pub mod player;

pub use card::Card;
pub use player::PlayerSide;
