// src/app/click_handler.rs
//! 手札のカード要素にクリックリスナーを付けるロジックだよ！
//!
//! クロージャから手札と Observer を安全に触るために `Arc<Mutex<...>>` を
//! クローンして持ち込む、いつものパターン。作った `Closure` は返すので、
//! GameApp 側で保持しておかないとリスナーが即死しちゃうよ！⚠️

use std::sync::{Arc, Mutex};

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event};

use crate::app::renderer;
use crate::components::PlayerSide;
use crate::logic::deck::DeckState;
use crate::observer::Observer;
use crate::{error, log};

/// 描画済みのカード要素それぞれに click リスナーを付けるよ。
///
/// # 引数
/// * `side`: この手札がどっちのプレイヤーのものか。通知のペイロードになる。
/// * `card_elements`: `renderer::render_deck` が作った要素列 (手札と同じ並び)。
/// * `deck_arc`: クリックで選択状態を進める手札。
/// * `observer_arc`: 「新規に1枚選択になった」ときだけ side を broadcast する先。
///
/// # 戻り値
/// 付けたリスナーの `Closure` たち。ドロップされるとリスナーも無効になるので、
/// 呼び出し側が生かしておくこと。
pub(crate) fn attach_card_click_handlers(
    side: PlayerSide,
    card_elements: &[Element],
    deck_arc: Arc<Mutex<DeckState>>,
    observer_arc: Arc<Mutex<Observer<PlayerSide>>>,
) -> Result<Vec<Closure<dyn FnMut(Event)>>, JsValue> {
    let mut closures = Vec::with_capacity(card_elements.len());

    for (index, element) in card_elements.iter().enumerate() {
        // クロージャ用に Arc と要素列をクローン
        let deck_arc = Arc::clone(&deck_arc);
        let observer_arc = Arc::clone(&observer_arc);
        let siblings: Vec<Element> = card_elements.to_vec();

        let closure = Closure::wrap(Box::new(move |_event: Event| {
            handle_card_click(side, index, &siblings, &deck_arc, &observer_arc);
        }) as Box<dyn FnMut(Event)>);

        element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closures.push(closure);
    }

    log(&format!(
        "ClickHandler: attached {} listeners for {:?} deck",
        closures.len(),
        side
    ));
    Ok(closures)
}

/// クリック1回ぶんの処理。
/// 選択状態を進める → `selected` クラスを同期する → 必要なときだけ broadcast。
/// 手札のロックは broadcast の前に手放すよ (購読者の中で別のロックを取るからね)。
fn handle_card_click(
    side: PlayerSide,
    index: usize,
    siblings: &[Element],
    deck_arc: &Arc<Mutex<DeckState>>,
    observer_arc: &Arc<Mutex<Observer<PlayerSide>>>,
) {
    log(&format!("ClickHandler: card {} clicked on {:?} deck", index, side));

    let change = {
        let mut deck = match deck_arc.lock() {
            Ok(deck) => deck,
            Err(e) => {
                error(&format!("ClickHandler: failed to lock deck for {:?}: {:?}", side, e));
                return;
            }
        };
        let change = match deck.toggle_select(index) {
            Ok(change) => change,
            Err(e) => {
                error(&format!("ClickHandler: toggle_select failed: {}", e));
                return;
            }
        };
        if let Err(e) = renderer::sync_deck_selection(siblings, deck.selection()) {
            error(&format!("ClickHandler: failed to sync selection classes: {:?}", e));
        }
        change
    }; // <-- ここで手札のロック解放

    if change.should_broadcast() {
        match observer_arc.lock() {
            Ok(mut observer) => observer.broadcast(side),
            Err(e) => error(&format!(
                "ClickHandler: failed to lock observer for {:?}: {:?}",
                side, e
            )),
        }
    }
}
