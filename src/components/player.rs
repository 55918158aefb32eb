// src/components/player.rs

// serde を使う宣言！スナップショットにどっちのプレイヤーか入れたくなるかも！
use serde::{Deserialize, Serialize};

/// どっちのプレイヤーか、を表す列挙型だよ！👤👤
///
/// 元々は 0/1 の数字を「配列の添字」「プレイヤーの役割」「通知のペイロード」の
/// 3役で使い回してたんだけど、それだと添字の取り違えに気付けないので、
/// ちゃんと2択の型にしたよ。賢いっしょ？😎
///
/// - `Host`: 画面上側 (コンテナ id は `bot` / `botBoard`)
/// - `Guest`: 画面下側 (コンテナ id は `player` / `playerBoard`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSide {
    Host,
    Guest,
}

impl PlayerSide {
    /// 両サイドを順番に回したいとき用。配る順番もこの順 (Host が先攻) だよ。
    pub const ALL: [PlayerSide; 2] = [PlayerSide::Host, PlayerSide::Guest];

    /// `[T; 2]` の配列にアクセスするための添字。Host = 0, Guest = 1 固定！
    pub fn index(self) -> usize {
        match self {
            PlayerSide::Host => 0,
            PlayerSide::Guest => 1,
        }
    }

    /// JS から来た数字をサイドに変換する。0/1 以外は `None`。
    pub fn from_index(index: usize) -> Option<PlayerSide> {
        match index {
            0 => Some(PlayerSide::Host),
            1 => Some(PlayerSide::Guest),
            _ => None,
        }
    }

    /// 相手側のサイドを返すよ。
    pub fn opponent(self) -> PlayerSide {
        match self {
            PlayerSide::Host => PlayerSide::Guest,
            PlayerSide::Guest => PlayerSide::Host,
        }
    }
}
