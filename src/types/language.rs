//! Languages the forecast summaries can be written in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A language supported for the `summary` texts of a forecast.
///
/// Serializes as its API shortcode, e.g. `"nb"` for [`Language::Norwegian`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "az")]
    Azerbaijani,
    #[serde(rename = "be")]
    Belarusian,
    #[serde(rename = "bg")]
    Bulgarian,
    #[serde(rename = "bs")]
    Bosnian,
    #[serde(rename = "ca")]
    Catalan,
    #[serde(rename = "cs")]
    Czech,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "el")]
    Greek,
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "et")]
    Estonian,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "hr")]
    Croatian,
    #[serde(rename = "hu")]
    Hungarian,
    #[serde(rename = "id")]
    Indonesian,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "is")]
    Icelandic,
    #[serde(rename = "kw")]
    Cornish,
    #[serde(rename = "nb")]
    Norwegian,
    #[serde(rename = "nl")]
    Dutch,
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "sk")]
    Slovak,
    #[serde(rename = "sl")]
    Slovenian,
    #[serde(rename = "sr")]
    Serbian,
    #[serde(rename = "sv")]
    Swedish,
    #[serde(rename = "tet")]
    Tetum,
    #[serde(rename = "tr")]
    Turkish,
    #[serde(rename = "uk")]
    Ukrainian,
    #[serde(rename = "x-pig-latin")]
    IgpayAtinlay,
    #[serde(rename = "zh")]
    SimplifiedChinese,
    #[serde(rename = "zh-tw")]
    TraditionalChinese,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Language; 34] = [
        Language::Arabic,
        Language::Azerbaijani,
        Language::Belarusian,
        Language::Bulgarian,
        Language::Bosnian,
        Language::Catalan,
        Language::Czech,
        Language::German,
        Language::Greek,
        Language::English,
        Language::Spanish,
        Language::Estonian,
        Language::French,
        Language::Croatian,
        Language::Hungarian,
        Language::Indonesian,
        Language::Italian,
        Language::Icelandic,
        Language::Cornish,
        Language::Norwegian,
        Language::Dutch,
        Language::Polish,
        Language::Portuguese,
        Language::Russian,
        Language::Slovak,
        Language::Slovenian,
        Language::Serbian,
        Language::Swedish,
        Language::Tetum,
        Language::Turkish,
        Language::Ukrainian,
        Language::IgpayAtinlay,
        Language::SimplifiedChinese,
        Language::TraditionalChinese,
    ];

    /// Identifier sent as the `lang` query parameter.
    pub fn shortcode(&self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::Azerbaijani => "az",
            Language::Belarusian => "be",
            Language::Bulgarian => "bg",
            Language::Bosnian => "bs",
            Language::Catalan => "ca",
            Language::Czech => "cs",
            Language::German => "de",
            Language::Greek => "el",
            Language::English => "en",
            Language::Spanish => "es",
            Language::Estonian => "et",
            Language::French => "fr",
            Language::Croatian => "hr",
            Language::Hungarian => "hu",
            Language::Indonesian => "id",
            Language::Italian => "it",
            Language::Icelandic => "is",
            Language::Cornish => "kw",
            Language::Norwegian => "nb",
            Language::Dutch => "nl",
            Language::Polish => "pl",
            Language::Portuguese => "pt",
            Language::Russian => "ru",
            Language::Slovak => "sk",
            Language::Slovenian => "sl",
            Language::Serbian => "sr",
            Language::Swedish => "sv",
            Language::Tetum => "tet",
            Language::Turkish => "tr",
            Language::Ukrainian => "uk",
            Language::IgpayAtinlay => "x-pig-latin",
            Language::SimplifiedChinese => "zh",
            Language::TraditionalChinese => "zh-tw",
        }
    }

    pub fn human_name(&self) -> &'static str {
        match self {
            Language::Arabic => "Arabic",
            Language::Azerbaijani => "Azerbaijani",
            Language::Belarusian => "Belarusian",
            Language::Bulgarian => "Bulgarian",
            Language::Bosnian => "Bosnian",
            Language::Catalan => "Catalan",
            Language::Czech => "Czech",
            Language::German => "German",
            Language::Greek => "Greek",
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::Estonian => "Estonian",
            Language::French => "French",
            Language::Croatian => "Croatian",
            Language::Hungarian => "Hungarian",
            Language::Indonesian => "Indonesian",
            Language::Italian => "Italian",
            Language::Icelandic => "Icelandic",
            Language::Cornish => "Cornish",
            Language::Norwegian => "Norwegian Bokmål",
            Language::Dutch => "Dutch",
            Language::Polish => "Polish",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::Slovak => "Slovak",
            Language::Slovenian => "Slovenian",
            Language::Serbian => "Serbian",
            Language::Swedish => "Swedish",
            Language::Tetum => "Tetum",
            Language::Turkish => "Turkish",
            Language::Ukrainian => "Ukrainian",
            Language::IgpayAtinlay => "Igpay Atinlay",
            Language::SimplifiedChinese => "simplified Chinese",
            Language::TraditionalChinese => "traditional Chinese",
        }
    }

    /// Looks up a language by its exact shortcode.
    pub fn from_shortcode(shortcode: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|language| language.shortcode() == shortcode)
    }

    /// Picks the supported language that appears first in `preferred`, a list of
    /// language codes ordered from most to least preferred. Falls back to English.
    ///
    /// # Examples
    ///
    /// ```
    /// use vremeto::Language;
    ///
    /// assert_eq!(Language::preferred(&["fy", "nl", "en"]), Language::Dutch);
    /// assert_eq!(Language::preferred(&["tlh"]), Language::English);
    /// ```
    pub fn preferred<S: AsRef<str>>(preferred: &[S]) -> Self {
        preferred
            .iter()
            .find_map(|code| Self::from_shortcode(code.as_ref()))
            .unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.human_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_shortcodes_are_unique_and_resolvable() {
        let codes: HashSet<_> = Language::ALL.iter().map(Language::shortcode).collect();
        assert_eq!(codes.len(), Language::ALL.len());
        for language in Language::ALL {
            assert_eq!(Language::from_shortcode(language.shortcode()), Some(language));
        }
        assert_eq!(Language::from_shortcode("klingon"), None);
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::default().shortcode(), "en");
    }

    #[test]
    fn test_serde_uses_shortcode() {
        let json = serde_json::to_string(&Language::TraditionalChinese).unwrap();
        assert_eq!(json, "\"zh-tw\"");
        let parsed: Language = serde_json::from_str("\"x-pig-latin\"").unwrap();
        assert_eq!(parsed, Language::IgpayAtinlay);
        assert_eq!(parsed.to_string(), "Igpay Atinlay");
    }

    #[test]
    fn test_preferred_takes_first_supported() {
        assert_eq!(Language::preferred(&["tet", "de"]), Language::Tetum);
        assert_eq!(Language::preferred::<&str>(&[]), Language::English);
    }
}
