// src/app/renderer.rs
//! 手札とボードを DOM に描画するロジックだよ！
//!
//! 方針はひとつだけ: 「見た目は常にデータの写し」。
//! どの描画関数もコンテナを一度空にしてから作り直すので、何回呼んでも
//! 二重描画にならない。状態を変えたら対応する描画/同期関数を必ず呼ぶこと！

use crate::app::dom;
use crate::config::ui::{ACTIVE_CLASS, CARD_CLASS, PLACEHOLDER_CLASS, SELECTED_CLASS};
use crate::log;
use crate::logic::board::BoardState;
use crate::logic::deck::{DeckState, Selection};
use wasm_bindgen::JsValue;
use web_sys::Element;

/// 手札を描画するよ。カード1枚 = `span.card` 1個、中身はカード名。
///
/// 作った要素の列をそのまま返すので、呼び出し側はこれに
/// クリックハンドラを付けたり、選択状態の同期に使い回したりする。
pub(crate) fn render_deck(container: &Element, deck: &DeckState) -> Result<Vec<Element>, JsValue> {
    container.set_inner_html(""); // 先に空っぽへ。再描画しても増殖しない！
    let document = dom::document()?;

    let mut card_elements = Vec::with_capacity(deck.hand().len());
    for card in deck.hand() {
        let card_span = document.create_element("span")?;
        card_span.class_list().add_1(CARD_CLASS)?;
        card_span.set_text_content(Some(&card.name));
        container.append_child(&card_span)?;
        card_elements.push(card_span);
    }

    sync_deck_selection(&card_elements, deck.selection())?;
    log(&format!(
        "Renderer: rendered {} cards into #{}",
        card_elements.len(),
        container.id()
    ));
    Ok(card_elements)
}

/// 手札の `selected` クラスを選択状態に合わせるよ。
/// 選択中の1枚にだけ付けて、それ以外からは外す。DOM を走査して
/// 「他に選択があったか」を推測したりはしない。状態機械が真実！
pub(crate) fn sync_deck_selection(
    card_elements: &[Element],
    selection: Selection,
) -> Result<(), JsValue> {
    for (index, element) in card_elements.iter().enumerate() {
        let is_selected = matches!(selection, Selection::OneSelected(selected) if selected == index);
        if is_selected {
            element.class_list().add_1(SELECTED_CLASS)?;
        } else {
            element.class_list().remove_1(SELECTED_CLASS)?;
        }
    }
    Ok(())
}

/// ボードを描画するよ。スロット1マス = `span` 1個。
/// カード入りなら `span.card` + カード名、空きなら `span.placeholder`。
///
/// `make_move` のあとは必ずこれを呼び直すこと！
/// ボードのデータと見た目がズレた瞬間にバグ扱いだからね。
pub(crate) fn render_board(container: &Element, board: &BoardState) -> Result<(), JsValue> {
    container.set_inner_html("");
    let document = dom::document()?;

    for slot in board.slots() {
        let slot_span = document.create_element("span")?;
        match slot {
            Some(card) => {
                slot_span.class_list().add_1(CARD_CLASS)?;
                slot_span.set_text_content(Some(&card.name));
            }
            None => {
                slot_span.class_list().add_1(PLACEHOLDER_CLASS)?;
            }
        }
        container.append_child(&slot_span)?;
    }
    Ok(())
}

/// ボードコンテナの `active` クラスを状態に合わせるよ。
/// classList.toggle で盲目的に反転するんじゃなくて、`BoardState` 側の
/// フラグを正として add/remove する。これでデータと見た目が絶対ズレない。
pub(crate) fn sync_board_active(container: &Element, active: bool) -> Result<(), JsValue> {
    if active {
        container.class_list().add_1(ACTIVE_CLASS)?;
    } else {
        container.class_list().remove_1(ACTIVE_CLASS)?;
    }
    Ok(())
}
