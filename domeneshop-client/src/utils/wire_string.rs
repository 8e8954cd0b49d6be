//! 数字字段的字符串化反序列化工具
//!
//! The API documents `priority`, `weight` and `port` as strings, but numbers
//! show up in responses as well. Both are accepted and normalised to a
//! `String`; `null` becomes an empty string.

use serde::{Deserialize, Deserializer};

/// 反序列化：支持 JSON 字符串、整数或 null
pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        U64(u64),
        I64(i64),
    }

    Ok(match Option::<StringOrNumber>::deserialize(deserializer)? {
        Some(StringOrNumber::String(s)) => s,
        Some(StringOrNumber::U64(n)) => n.to_string(),
        Some(StringOrNumber::I64(n)) => n.to_string(),
        None => String::new(),
    })
}
