// src/config/ui.rs
//! 画面まわりの定数を定義するよ！
//! コンテナ要素の id と、見た目の状態を表す CSS クラス名。
//! テストハーネスもこの語彙を見てるので、ここを変えたら HTML/CSS も忘れずに！

// --- コンテナ要素の id ---
pub const HOST_DECK_ID: &str = "bot"; // ホスト側の手札コンテナ
pub const GUEST_DECK_ID: &str = "player"; // ゲスト側の手札コンテナ
pub const HOST_BOARD_ID: &str = "botBoard"; // ホスト側のボードコンテナ
pub const GUEST_BOARD_ID: &str = "playerBoard"; // ゲスト側のボードコンテナ

// --- CSS クラス ---
pub const CARD_CLASS: &str = "card"; // カード1枚分の見た目
pub const PLACEHOLDER_CLASS: &str = "placeholder"; // 空きスロットの見た目
pub const SELECTED_CLASS: &str = "selected"; // 手札で選択中のカード
pub const ACTIVE_CLASS: &str = "active"; // ハイライト中のボード

// --- ゲームの固定サイズ ---
pub const BOARD_SLOT_COUNT: usize = 8; // ボードの置き場は8マス固定
pub const POOL_SIZE: usize = 6; // 配り合うカードは全部で6枚
