// src/logic/deal.rs
//! ゲーム開始時の配布ロジックだよ！🎲
//! 共有プールの6枚を、ランダムに引きながら2つの手札へ交互に配る。

use crate::components::{Card, PlayerSide};
use crate::config::ui::POOL_SIZE;
use crate::logic::deck::DeckState;
use itertools::Itertools;
use rand::Rng;

/// 配布プールの元ネタ、識別子 `"1"` 〜 `"6"` を作るよ。
///
/// グローバルなプール配列は持たない。呼び出しごとに新しい所有値を返して、
/// それを `fill_decks` に渡し切る。定数とライブ状態が同じ配列を共有しない！
pub fn starting_pool() -> Vec<String> {
    (1..=POOL_SIZE).map(|n| n.to_string()).collect()
}

/// プールが空になるまで、ランダムに1枚引いては交互に配るよ。
///
/// - 引く位置は残りプールに対する一様乱数 (`rng` はテストから差し替え可能)
/// - 配り先は Host から始まる厳密な交互。6枚ならきっちり3枚ずつになる
/// - プールは所有権ごと受け取って使い切る。毎周必ず1枚減るから絶対に止まるし、
///   最初から空のプールなら何も配らずに終わる
///
/// 描画はここではしない！手札が出揃ったあとに GameApp が一度だけ描画するよ。
pub fn fill_decks<R: Rng>(decks: &mut [DeckState; 2], mut pool: Vec<String>, rng: &mut R) {
    let mut turn = PlayerSide::Host;

    while !pool.is_empty() {
        let drawn = rng.gen_range(0..pool.len());
        let name = pool.remove(drawn);
        decks[turn.index()].add_card(Card::new(name));
        turn = turn.opponent();
    }

    log::debug!(
        "fill_decks: host=[{}] guest=[{}]",
        decks[0].hand().iter().map(|card| card.name.as_str()).join(", "),
        decks[1].hand().iter().map(|card| card.name.as_str()).join(", "),
    );
}
