// tests/dom.rs
//! 実際のブラウザ DOM に対する描画・配線のテストだよ！
//! `wasm-pack test --headless --chrome` で動かす想定。
//! (ネイティブの `cargo test` ではこのファイルは空っぽにコンパイルされる)
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

use wasm_card_duel::GameApp;

wasm_bindgen_test_configure!(run_in_browser);

const CONTAINER_IDS: [&str; 4] = ["bot", "player", "botBoard", "playerBoard"];

fn document() -> Document {
    web_sys::window().expect("window がない！").document().expect("document がない！")
}

/// 前のテストのコンテナが残ってると id が被っちゃうので、
/// 毎回作り直すヘルパー。4つの空コンテナを body にぶら下げるよ。
fn setup_containers() -> Document {
    let document = document();
    let body = document.body().expect("body がない！");

    for id in CONTAINER_IDS {
        if let Some(stale) = document.get_element_by_id(id) {
            stale.remove();
        }
        let container = document.create_element("div").expect("div が作れない！");
        container.set_id(id);
        body.append_child(&container).expect("body に追加できない！");
    }
    document
}

fn container(document: &Document, id: &str) -> Element {
    document.get_element_by_id(id).expect("コンテナが見つからない！")
}

fn child(element: &Element, index: u32) -> Element {
    element
        .children()
        .item(index)
        .unwrap_or_else(|| panic!("{} 番目の子要素がない！", index))
}

fn click(element: &Element) {
    element
        .dyn_ref::<HtmlElement>()
        .expect("HtmlElement じゃない！")
        .click();
}

#[wasm_bindgen_test]
fn initial_render_shows_hands_and_empty_boards() {
    let document = setup_containers();
    let app = GameApp::new().expect("GameApp の初期化に失敗！");

    // 手札: 2つ合わせて6枚、それぞれ span.card で描画されてるはず
    let host_deck = container(&document, "bot");
    let guest_deck = container(&document, "player");
    assert_eq!(host_deck.children().length(), 3);
    assert_eq!(guest_deck.children().length(), 3);
    for deck in [&host_deck, &guest_deck] {
        for index in 0..deck.children().length() {
            let card = child(deck, index);
            assert!(card.class_list().contains("card"), "手札の子要素に card クラスがない！");
            assert!(!card.class_list().contains("selected"), "最初から selected が付いてる！");
        }
    }

    // ボード: 8マス全部 placeholder、ハイライトなし
    for id in ["botBoard", "playerBoard"] {
        let board = container(&document, id);
        assert_eq!(board.children().length(), 8);
        for index in 0..8 {
            assert!(
                child(&board, index).class_list().contains("placeholder"),
                "{} のスロットが placeholder じゃない！",
                id
            );
        }
        assert!(!board.class_list().contains("active"));
    }

    // 配線も生きてるはず (ボードのハイライト購読が1本)
    assert_eq!(app.subscriber_count_debug(), 1);
}

#[wasm_bindgen_test]
fn clicking_cards_drives_selection_and_board_highlight() {
    let document = setup_containers();
    let app = GameApp::new().expect("GameApp の初期化に失敗！");

    let host_deck = container(&document, "bot");
    let host_board = container(&document, "botBoard");
    let first_card = child(&host_deck, 0);
    let second_card = child(&host_deck, 1);

    // 1クリック目: 選択が付いて、同じサイドのボードがハイライトされる
    click(&first_card);
    assert!(first_card.class_list().contains("selected"));
    assert!(host_board.class_list().contains("active"), "選択したのにハイライトされてない！");
    assert!(app.selected_card_debug(0).is_some());

    // 別のカードへ切り替え: 選択は移るけど、ハイライトはトグルされない
    click(&second_card);
    assert!(!first_card.class_list().contains("selected"), "前の選択が残ってる！");
    assert!(second_card.class_list().contains("selected"));
    assert!(host_board.class_list().contains("active"), "切り替えでハイライトが消えた！");

    // もう一度クリックで解除: selected は消える (broadcast はしない)
    click(&second_card);
    assert!(!second_card.class_list().contains("selected"));
    assert_eq!(app.selected_card_debug(0), None);

    // ゲスト側のボードは一度も触ってないので素のまま
    assert!(!container(&document, "playerBoard").class_list().contains("active"));
}

#[wasm_bindgen_test]
fn make_move_rerenders_the_board_immediately() {
    let document = setup_containers();
    let app = GameApp::new().expect("GameApp の初期化に失敗！");

    let placed = app.make_move(0, "9".to_string(), 2).expect("スロット2は置けるはず！");
    assert_eq!(placed, 2);

    // 置いた直後に DOM が新しい状態を映してること！
    let host_board = container(&document, "botBoard");
    let slot = child(&host_board, 2);
    assert!(slot.class_list().contains("card"));
    assert_eq!(slot.text_content().as_deref(), Some("9"));
    // 残りのマスは placeholder のまま
    for index in [0u32, 1, 3, 4, 5, 6, 7] {
        assert!(child(&host_board, index).class_list().contains("placeholder"));
    }

    // 範囲外のスロットはエラー、DOM も無傷
    assert!(app.make_move(0, "9".to_string(), 8).is_err());
    assert_eq!(host_board.children().length(), 8);
}

#[wasm_bindgen_test]
fn manual_activation_toggle_is_its_own_inverse() {
    let document = setup_containers();
    let app = GameApp::new().expect("GameApp の初期化に失敗！");

    let guest_board = container(&document, "playerBoard");
    assert!(app.activate_board(1).expect("トグルできるはず！"));
    assert!(guest_board.class_list().contains("active"));
    assert!(!app.activate_board(1).expect("トグルできるはず！"));
    assert!(!guest_board.class_list().contains("active"), "2回トグルで元に戻ってない！");

    // 0/1 以外のプレイヤーはエラー
    assert!(app.activate_board(2).is_err());
}
