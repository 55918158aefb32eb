// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 標準ライブラリから、スレッドセーフな共有ポインタとミューテックスを使うよ。
// DOM イベントのコールバックからでも安全に状態を共有・変更するために必要！
use std::sync::{Arc, Mutex};

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod logic;
pub mod observer;

// 各モジュールから必要な型をインポート！
use crate::app::{click_handler, dom, renderer};
use crate::components::{Card, PlayerSide};
use crate::config::ui;
use crate::logic::board::BoardState;
use crate::logic::deal;
use crate::logic::deck::DeckState;
use crate::observer::Observer;
use rand::thread_rng;
use serde::Serialize;
use web_sys::{Element, Event};

// JavaScript の console.log / console.error を Rust から呼び出すための準備 (extern ブロック)。
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn error(s: &str);
}

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
    log("Panic hook set!");
}

/// デバッグ用スナップショットの形。`state_json` で JSON になって JS へ渡るよ。
#[derive(Serialize)]
struct StateSnapshot {
    decks: Vec<DeckState>,
    boards: Vec<BoardState>,
}

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
//
// 役割は3つ:
// 1. 起動時にプール ("1"〜"6") を2つの手札へ配りきって、一度だけ描画する
// 2. 手札の選択イベントを Observer 経由で同じサイドのボードのハイライトに繋ぐ
// 3. JS からの makeMove / activate を受けて、状態を変えたら必ず再描画する
#[wasm_bindgen]
pub struct GameApp {
    decks: [Arc<Mutex<DeckState>>; 2],
    boards: [Arc<Mutex<BoardState>>; 2],
    board_containers: [Element; 2],
    selection_observer: Arc<Mutex<Observer<PlayerSide>>>,
    // click リスナーの Closure はここで生かしておく。ドロップ＝リスナー死！
    _click_closures: Vec<Closure<dyn FnMut(Event)>>,
}

// GameApp 構造体のメソッドを実装していくよ！
#[wasm_bindgen]
impl GameApp {
    /// ゲームを丸ごと組み立てるコンストラクタ。
    /// コンテナ探し → 配線 → 配布 → 描画、の順で一気にやるよ。
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<GameApp, JsValue> {
        let started_at = js_sys::Date::now();
        log("GameApp: Initializing...");

        // --- 1. コンテナ要素を id で引いてくる ---
        let deck_containers = [
            dom::find_container(ui::HOST_DECK_ID)?,
            dom::find_container(ui::GUEST_DECK_ID)?,
        ];
        let board_containers = [
            dom::find_container(ui::HOST_BOARD_ID)?,
            dom::find_container(ui::GUEST_BOARD_ID)?,
        ];

        // --- 2. 配布。Arc に包む前の素の状態に配りきっちゃうのが楽！ ---
        let mut deck_states = [DeckState::new(), DeckState::new()];
        {
            let mut rng = thread_rng();
            deal::fill_decks(&mut deck_states, deal::starting_pool(), &mut rng);
        }
        let [host_deck, guest_deck] = deck_states;
        let decks = [
            Arc::new(Mutex::new(host_deck)),
            Arc::new(Mutex::new(guest_deck)),
        ];
        let boards = [
            Arc::new(Mutex::new(BoardState::new())),
            Arc::new(Mutex::new(BoardState::new())),
        ];

        // --- 3. 配線: 選択イベント → 同じサイドのボードのハイライトをトグル ---
        let selection_observer = Arc::new(Mutex::new(Observer::new()));
        {
            let boards_for_subscriber = [Arc::clone(&boards[0]), Arc::clone(&boards[1])];
            let containers_for_subscriber =
                [board_containers[0].clone(), board_containers[1].clone()];
            let mut observer = selection_observer
                .lock()
                .map_err(|_| JsValue::from_str("GameApp: observer mutex poisoned"))?;
            observer.subscribe(move |side: PlayerSide| {
                let index = side.index();
                match boards_for_subscriber[index].lock() {
                    Ok(mut board) => {
                        let active = board.toggle_active();
                        log(&format!("GameApp: {:?} board active = {}", side, active));
                        if let Err(e) =
                            renderer::sync_board_active(&containers_for_subscriber[index], active)
                        {
                            error(&format!("GameApp: failed to sync active class: {:?}", e));
                        }
                    }
                    Err(e) => error(&format!(
                        "GameApp: failed to lock {:?} board in subscriber: {:?}",
                        side, e
                    )),
                }
            });
        }

        // --- 4. 描画は手札が出揃ったここで一度だけ。ついでに click を配線 ---
        let mut click_closures = Vec::new();
        for side in PlayerSide::ALL {
            let index = side.index();

            let card_elements = {
                let deck = decks[index]
                    .lock()
                    .map_err(|_| JsValue::from_str("GameApp: deck mutex poisoned"))?;
                renderer::render_deck(&deck_containers[index], &deck)?
            };
            let mut attached = click_handler::attach_card_click_handlers(
                side,
                &card_elements,
                Arc::clone(&decks[index]),
                Arc::clone(&selection_observer),
            )?;
            click_closures.append(&mut attached);

            let board = boards[index]
                .lock()
                .map_err(|_| JsValue::from_str("GameApp: board mutex poisoned"))?;
            renderer::render_board(&board_containers[index], &board)?;
            renderer::sync_board_active(&board_containers[index], board.is_active())?;
        }

        log(&format!(
            "GameApp: Initialization complete in {:.1} ms.",
            js_sys::Date::now() - started_at
        ));
        Ok(GameApp {
            decks,
            boards,
            board_containers,
            selection_observer,
            _click_closures: click_closures,
        })
    }

    /// 指定サイドのボードの `slot_index` マスに、`card_name` のカードを置くよ。
    /// 置けたら置いた先の添字を返す。範囲外のスロットはエラーで弾く！
    /// 置いた直後にボードを再描画するので、見た目が古いままにはならない。
    #[wasm_bindgen]
    pub fn make_move(
        &self,
        player_index: usize,
        card_name: String,
        slot_index: usize,
    ) -> Result<usize, JsValue> {
        let side = PlayerSide::from_index(player_index)
            .ok_or_else(|| JsValue::from_str(&format!("invalid player index: {}", player_index)))?;
        log(&format!(
            "GameApp: make_move({:?}, {:?}, slot {})",
            side, card_name, slot_index
        ));

        let mut board = self.boards[side.index()]
            .lock()
            .map_err(|_| JsValue::from_str("GameApp: board mutex poisoned"))?;
        let placed = board.make_move(Card::new(card_name), slot_index)?;
        renderer::render_board(&self.board_containers[side.index()], &board)?;
        Ok(placed)
    }

    /// 指定サイドのボードのハイライトを手動でトグルするよ (JS のデバッグ用)。
    /// トグル後の状態を返す。2回呼べば元通り！
    #[wasm_bindgen]
    pub fn activate_board(&self, player_index: usize) -> Result<bool, JsValue> {
        let side = PlayerSide::from_index(player_index)
            .ok_or_else(|| JsValue::from_str(&format!("invalid player index: {}", player_index)))?;

        let mut board = self.boards[side.index()]
            .lock()
            .map_err(|_| JsValue::from_str("GameApp: board mutex poisoned"))?;
        let active = board.toggle_active();
        renderer::sync_board_active(&self.board_containers[side.index()], active)?;
        Ok(active)
    }

    /// デバッグ用: 指定サイドの選択中カード名を返すよ。未選択なら None。
    #[wasm_bindgen]
    pub fn selected_card_debug(&self, player_index: usize) -> Option<String> {
        let side = PlayerSide::from_index(player_index)?;
        let deck = self.decks[side.index()].lock().ok()?;
        deck.selected_card().map(|card| card.name.clone())
    }

    /// デバッグ用: 購読者数を返すよ (配線が生きてるかの確認に)。
    #[wasm_bindgen]
    pub fn subscriber_count_debug(&self) -> usize {
        match self.selection_observer.lock() {
            Ok(observer) => observer.subscriber_count(),
            Err(_) => 0,
        }
    }

    /// 手札とボードの今の状態を JSON で返すよ。デバッグとテストハーネス用！
    #[wasm_bindgen]
    pub fn state_json(&self) -> Result<String, JsValue> {
        let mut snapshot = StateSnapshot {
            decks: Vec::with_capacity(2),
            boards: Vec::with_capacity(2),
        };
        for side in PlayerSide::ALL {
            let deck = self.decks[side.index()]
                .lock()
                .map_err(|_| JsValue::from_str("GameApp: deck mutex poisoned"))?;
            snapshot.decks.push(deck.clone());
            let board = self.boards[side.index()]
                .lock()
                .map_err(|_| JsValue::from_str("GameApp: board mutex poisoned"))?;
            snapshot.boards.push(board.clone());
        }
        serde_json::to_string(&snapshot)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize state: {}", e)))
    }
}
