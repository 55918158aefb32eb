// src/logic/board.rs
//! 8マス固定の置き場 (ボード) を管理するモジュールだよ！
//! ここも DOM のことは知らない純ロジック。

use crate::components::Card;
use crate::config::ui::BOARD_SLOT_COUNT;
use serde::{Deserialize, Serialize};
use std::fmt;
use wasm_bindgen::JsValue;

/// ボードまわりのエラー。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// `[0, 7]` の外のスロットにカードを置こうとした。
    /// 黙って無視したり配列が伸びたりはせず、必ずこのエラーで弾くよ。
    IndexOutOfRange { index: usize, slot_count: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::IndexOutOfRange { index, slot_count } => write!(
                f,
                "slot index {} is out of range (board has {} slots)",
                index, slot_count
            ),
        }
    }
}

impl std::error::Error for BoardError {}

// wasm の境界でそのまま JS へ投げられるようにしておくよ。
impl From<BoardError> for JsValue {
    fn from(err: BoardError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// 片方のプレイヤーのボードだよ！
///
/// - `slots`: 8マス固定。各マスは空 (`None`) か、カード1枚 (`Some`)。
///   一度埋まったマスも `make_move` で置き換えられる (取り除く操作はない)。
/// - `active`: ハイライト中かどうか。対応する手札の選択イベントで
///   トグルされるフラグだよ。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardState {
    slots: Vec<Option<Card>>,
    active: bool,
}

impl BoardState {
    /// 8マス全部空っぽ、ハイライトなしのボードを作るよ。
    pub fn new() -> Self {
        BoardState {
            slots: vec![None; BOARD_SLOT_COUNT],
            active: false,
        }
    }

    pub fn slots(&self) -> &[Option<Card>] {
        &self.slots
    }

    /// `index` のマスに `card` を置くよ。置けたら置いた先の添字を返す。
    ///
    /// マスが埋まってたら上書き。範囲外なら状態には一切触らずエラー！
    /// 描画はここではやらない。呼び出し側 (GameApp) が置いた直後に
    /// 必ず再描画する決まりになってるよ。
    pub fn make_move(&mut self, card: Card, index: usize) -> Result<usize, BoardError> {
        if index >= self.slots.len() {
            log::warn!(
                "make_move: slot index {} out of range (board has {} slots)",
                index,
                self.slots.len()
            );
            return Err(BoardError::IndexOutOfRange {
                index,
                slot_count: self.slots.len(),
            });
        }
        self.slots[index] = Some(card);
        Ok(index)
    }

    /// ハイライト状態をトグルして、トグル後の値を返すよ。
    /// 2回呼べば元通り (トグルはそれ自身が逆操作)！
    pub fn toggle_active(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
