// src/observer.rs
//! 汎用の publish/subscribe 部品だよ！
//! 手札の選択イベントをボード側へ届けるのに使ってる。

/// `subscribe` が返す購読チケット。🎫
///
/// 解除はコールバックの「参照の同一性」じゃなくて、このチケットの一致で行うよ。
/// (Rust だとクロージャ同士を `==` で比べられないから、発行した ID を鍵にするんだ)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

/// 多数の購読者へイベントを同期的にばらまく Observer だよ！📣
///
/// - 購読は登録順に保持される (重複チェックはしない)
/// - `broadcast` は登録順に、その場で全員を呼ぶ
/// - 解除は一致するチケットの分だけ。知らないチケットなら何もしない
pub struct Observer<T> {
    subscriptions: Vec<(SubscriptionId, Box<dyn FnMut(T)>)>,
    next_id: usize,
}

impl<T: Clone> Observer<T> {
    pub fn new() -> Self {
        Observer {
            subscriptions: Vec::new(),
            next_id: 0,
        }
    }

    /// コールバックを購読リストの末尾に追加して、解除用のチケットを返すよ。
    /// 同じクロージャを2回登録したら、2回呼ばれる。それが仕様！
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(T) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push((id, Box::new(callback)));
        id
    }

    /// チケットが一致する購読だけを取り除く。
    /// 登録されてないチケットを渡されても黙って無視するよ (エラーにしない)。
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscriptions.retain(|(sub_id, _)| *sub_id != id);
    }

    /// 現在の購読者全員を、登録順に同期呼び出しするよ。
    /// シングルスレッドの run-to-completion 前提なので、ガードは何もなし。
    pub fn broadcast(&mut self, data: T) {
        for (_, callback) in self.subscriptions.iter_mut() {
            callback(data.clone());
        }
    }

    /// 今の購読者数。テストとデバッグログで使うよ。
    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.len()
    }
}

impl<T: Clone> Default for Observer<T> {
    fn default() -> Self {
        Self::new()
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn broadcast_reaches_all_subscribers_in_order() {
        let mut observer: Observer<u32> = Observer::new();
        let received = Rc::new(RefCell::new(Vec::new()));

        let received_a = Rc::clone(&received);
        observer.subscribe(move |value| received_a.borrow_mut().push(("a", value)));
        let received_b = Rc::clone(&received);
        observer.subscribe(move |value| received_b.borrow_mut().push(("b", value)));

        observer.broadcast(7);

        // 登録順 (a → b) に呼ばれてるはず！
        assert_eq!(*received.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn unsubscribe_removes_only_the_matching_subscription() {
        let mut observer: Observer<u32> = Observer::new();
        let received = Rc::new(RefCell::new(Vec::new()));

        let received_a = Rc::clone(&received);
        let id_a = observer.subscribe(move |value| received_a.borrow_mut().push(("a", value)));
        let received_b = Rc::clone(&received);
        observer.subscribe(move |value| received_b.borrow_mut().push(("b", value)));

        assert_eq!(observer.subscriber_count(), 2);
        observer.unsubscribe(id_a);
        assert_eq!(observer.subscriber_count(), 1);

        observer.broadcast(1);
        assert_eq!(*received.borrow(), vec![("b", 1)], "a は解除済みのはず！");
    }

    #[test]
    fn unsubscribe_unknown_id_is_a_silent_noop() {
        let mut observer: Observer<u32> = Observer::new();
        let id = observer.subscribe(|_| {});

        // 一度解除したチケットをもう一度使っても何も起きない
        observer.unsubscribe(id);
        observer.unsubscribe(id);
        assert_eq!(observer.subscriber_count(), 0);

        // 空っぽの Observer への broadcast も無害
        observer.broadcast(99);
    }

    #[test]
    fn duplicate_subscriptions_both_fire() {
        let mut observer: Observer<()> = Observer::new();
        let count = Rc::new(RefCell::new(0));

        for _ in 0..2 {
            let count = Rc::clone(&count);
            observer.subscribe(move |_| *count.borrow_mut() += 1);
        }

        observer.broadcast(());
        assert_eq!(*count.borrow(), 2, "重複登録は2回とも呼ばれる仕様だよ！");
    }
}
