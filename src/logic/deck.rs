// src/logic/deck.rs
//! 片方のプレイヤーの手札と「どのカードを選択中か」を管理するモジュールだよ！
//! DOM のことは一切知らない純ロジック。描画は app::renderer の仕事！

use crate::components::Card;
use serde::{Deserialize, Serialize};
use std::fmt;
use wasm_bindgen::JsValue;

/// 手札の選択状態だよ。状態はこの2つしかない！
///
/// DOM の `selected` クラスを走査して選択状態を推測するんじゃなくて、
/// こっちの状態機械が唯一の真実。描画は毎回これに合わせるだけ。
///
/// - `NoneSelected`: 何も選択してない
/// - `OneSelected(i)`: 手札の i 番目だけを選択中 (同時に2枚は絶対に選べない)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    NoneSelected,
    OneSelected(usize),
}

/// `toggle_select` が起こした遷移の種類。
/// 通知を飛ばすかどうかの判断は呼び出し側がこれを見て決めるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// 何もない状態から i 番目を選択した (これだけが通知対象！)
    Selected(usize),
    /// 選択中のカードを別のカードに切り替えた
    Switched { from: usize, to: usize },
    /// 選択中のカードをもう一度クリックして解除した
    Cleared(usize),
}

impl SelectionChange {
    /// この遷移でボード側へ通知するべきか？
    ///
    /// 「選択が無い状態から1枚選択になった瞬間」だけ通知するよ。
    /// 通知先はハイライトの *トグル* なので、切り替えのたびに飛ばすと
    /// カードを選んでるのにハイライトが消える、という変なことになっちゃう。
    pub fn should_broadcast(&self) -> bool {
        matches!(self, SelectionChange::Selected(_))
    }
}

/// 手札まわりのエラー。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    /// 手札の範囲外の添字でカードを触ろうとした
    CardIndexOutOfRange { index: usize, hand_size: usize },
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::CardIndexOutOfRange { index, hand_size } => write!(
                f,
                "card index {} is out of range (hand has {} cards)",
                index, hand_size
            ),
        }
    }
}

impl std::error::Error for DeckError {}

// wasm の境界でそのまま JS へ投げられるようにしておくよ。
impl From<DeckError> for JsValue {
    fn from(err: DeckError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// 片方のプレイヤーの手札だよ！🖐️
///
/// - `hand`: 配られたカードの列。配布中に追記されるだけで、上限は設けてない
/// - `selection`: 上で説明した選択状態機械
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckState {
    hand: Vec<Card>,
    selection: Selection,
}

impl DeckState {
    pub fn new() -> Self {
        DeckState {
            hand: Vec::new(),
            selection: Selection::NoneSelected,
        }
    }

    /// 手札の末尾にカードを追加するよ。配布のときに呼ばれる。
    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// 選択中のカードがあれば返すよ。
    pub fn selected_card(&self) -> Option<&Card> {
        match self.selection {
            Selection::NoneSelected => None,
            Selection::OneSelected(index) => self.hand.get(index),
        }
    }

    /// 手札の i 番目がクリックされたときの遷移を実行するよ。
    ///
    /// - 未選択 → i を選択 (`Selected`)
    /// - i を選択中にもう一度 i → 解除 (`Cleared`)
    /// - j を選択中に i (≠ j) → i に切り替え (`Switched`)、j の選択は自動で外れる
    ///
    /// クリックは描画済みのカード要素からしか来ないはずだけど、
    /// 範囲外の添字は黙って壊れるんじゃなくてエラーで弾くよ。
    pub fn toggle_select(&mut self, index: usize) -> Result<SelectionChange, DeckError> {
        if index >= self.hand.len() {
            log::warn!(
                "toggle_select: index {} out of range (hand size {})",
                index,
                self.hand.len()
            );
            return Err(DeckError::CardIndexOutOfRange {
                index,
                hand_size: self.hand.len(),
            });
        }

        let change = match self.selection {
            Selection::NoneSelected => {
                self.selection = Selection::OneSelected(index);
                SelectionChange::Selected(index)
            }
            Selection::OneSelected(current) if current == index => {
                self.selection = Selection::NoneSelected;
                SelectionChange::Cleared(index)
            }
            Selection::OneSelected(current) => {
                self.selection = Selection::OneSelected(index);
                SelectionChange::Switched {
                    from: current,
                    to: index,
                }
            }
        };
        Ok(change)
    }
}
