use std::collections::HashMap;

/// Information about a supported language
#[derive(PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "en",
            LanguageInfo {
                code: "en",
                translation: include_str!("../translations/en.json"),
                native_name: "English",
            },
        ),
        (
            "zh-TW",
            LanguageInfo {
                code: "zh-TW",
                translation: include_str!("../translations/zh-TW.json"),
                native_name: "繁體中文",
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translations_are_valid_json_with_shared_keys() {
        let languages = supported_languages();
        assert!(languages.contains_key("en"));
        assert!(languages.contains_key("zh-TW"));

        for info in languages.values() {
            let parsed: serde_json::Value = serde_json::from_str(info.translation)
                .expect("translation bundle should be valid JSON");
            assert!(parsed.get("app").is_some());
            assert!(parsed.get("nav").is_some());
            assert!(parsed["nav"].get("logout_notice").is_some());
        }
    }

    #[test]
    fn language_codes_match_map_keys() {
        for (key, info) in supported_languages() {
            assert_eq!(key, info.code);
        }
    }
}
