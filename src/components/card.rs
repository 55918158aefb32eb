// src/components/card.rs

// serde を使う宣言！カード情報をデバッグ用スナップショットで JSON にする時に使うよ！
use serde::{Deserialize, Serialize};

/// カードそのものを表すデータだよ！🃏
///
/// 振る舞いは一切持たない、ただの値オブジェクト。
/// プールから配られた後は、一度もフィールドを書き換えない約束！
///
/// - `name`: カードの名前 (今のプールだと `"1"` 〜 `"6"`)
/// - `description`: カードの説明文 (あってもなくてもいい)
/// - `kind`: カードの種類。JSON 上では `type` という名前になるよ。
///   (※ 種類ごとの効果はまだ何も実装されてない。フィールドだけ先にある状態！)
///
/// #[derive(...)] のおまじない！
/// - Debug: デバッグ表示用
/// - Clone: コピー可能に
/// - PartialEq, Eq: 等しいか比較できるように (`==`)
/// - Serialize, Deserialize: JSON などに変換できるように
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl Card {
    /// 名前だけのカードを作るよ。配るときはこれで十分！
    pub fn new(name: impl Into<String>) -> Self {
        Card {
            name: name.into(),
            description: None,
            kind: None,
        }
    }

    /// 説明と種類も付けたいときはこっち。
    pub fn with_details(
        name: impl Into<String>,
        description: Option<String>,
        kind: Option<String>,
    ) -> Self {
        Card {
            name: name.into(),
            description,
            kind,
        }
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_card() {
        let card = Card::new("3");

        // 値がちゃんと設定されてるか確認
        assert_eq!(card.name, "3");
        assert_eq!(card.description, None);
        assert_eq!(card.kind, None);

        println!("作成したカード: {:?}", card);
    }

    #[test]
    fn create_card_with_details() {
        let card = Card::with_details(
            "6",
            Some("つよいカード".to_string()),
            Some("attack".to_string()),
        );

        assert_eq!(card.name, "6");
        assert_eq!(card.description.as_deref(), Some("つよいカード"));
        assert_eq!(card.kind.as_deref(), Some("attack"));
    }

    #[test]
    fn kind_serializes_as_type() {
        // `kind` フィールドは JSON では `type` という名前になるはず！
        let card = Card::with_details("1", None, Some("spell".to_string()));
        let json = serde_json::to_string(&card).expect("Card のシリアライズに失敗！");

        assert!(json.contains("\"type\":\"spell\""), "JSON に type が出てない: {}", json);
        assert!(!json.contains("\"kind\""), "JSON に kind がそのまま出ちゃってる: {}", json);

        let back: Card = serde_json::from_str(&json).expect("Card のデシリアライズに失敗！");
        assert_eq!(back, card);
    }
}
