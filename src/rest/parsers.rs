/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::Deserialize;

// Unwraps Flickr's {"_content": ...} wrapper fields
pub fn from_content<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Content {
        #[serde(default, rename = "_content")]
        content: String,
    }

    let wrapper = Content::deserialize(deserializer)?;
    Ok(wrapper.content)
}

// Parses the raw visibility flags which the service returns as 0/1,
// "0"/"1" or booleans depending on context
pub fn from_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: serde_json::Value = Deserialize::deserialize(deserializer)?;
    Ok(match raw {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        serde_json::Value::String(s) => !s.is_empty() && s != "0",
        _ => false,
    })
}
