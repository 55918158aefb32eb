// src/app/dom.rs
//! DOM のコンテナ要素を探すヘルパーだよ！
//! ゲームは起動時に4つのコンテナ (手札×2、ボード×2) を id で引いてくる。

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// `window.document` を取得するよ。wasm がブラウザ外で動いてたら当然失敗する。
pub(crate) fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("Failed to get window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("Failed to get document"))
}

/// id でコンテナ要素を探すよ。見つからなかったらエラー (パニックはしない！)。
/// HTML 側に `#bot` `#player` `#botBoard` `#playerBoard` が揃ってる前提だからね。
pub(crate) fn find_container(id: &str) -> Result<Element, JsValue> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Container element not found: #{}", id)))
}
