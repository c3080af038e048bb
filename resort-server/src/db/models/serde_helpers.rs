//! Serde 辅助函数

use serde::{Deserialize, Deserializer};

/// 区分"字段缺省"与"显式 null"。
///
/// serde 默认把 JSON null 反序列化为外层 None，导致 PATCH 风格的更新
/// 无法表达"清空该字段"。挂上本函数后：字段缺省 → `None`，
/// `null` → `Some(None)`，有值 → `Some(Some(v))`。
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "double_option")]
        note: Option<Option<String>>,
    }

    #[test]
    fn missing_null_and_value_are_distinct() {
        let missing: Payload = serde_json::from_str("{}").unwrap();
        assert!(missing.note.is_none());

        let cleared: Payload = serde_json::from_str(r#"{"note": null}"#).unwrap();
        assert_eq!(cleared.note, Some(None));

        let set: Payload = serde_json::from_str(r#"{"note": "hi"}"#).unwrap();
        assert_eq!(set.note, Some(Some("hi".to_string())));
    }
}
