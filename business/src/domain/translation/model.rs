use std::collections::BTreeMap;

/// Message key to message text for one language.
pub type Messages = BTreeMap<String, String>;

/// Language code to [`Messages`], in the order the languages were stored.
///
/// Flat: no nesting and no fallback language. Tables hold a handful of
/// languages, so lookups scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationTable(Vec<(String, Messages)>);

impl TranslationTable {
    pub fn new(languages: impl IntoIterator<Item = (String, Messages)>) -> Self {
        let mut table = Self::default();
        for (language, messages) in languages {
            table.insert(language, messages);
        }
        table
    }

    /// A language added twice keeps its first position and its last messages.
    pub fn insert(&mut self, language: String, messages: Messages) {
        match self.0.iter_mut().find(|(code, _)| *code == language) {
            Some((_, existing)) => *existing = messages,
            None => self.0.push((language, messages)),
        }
    }

    pub fn get(&self, language: &str) -> Option<&Messages> {
        self.0
            .iter()
            .find(|(code, _)| code == language)
            .map(|(_, messages)| messages)
    }

    /// Supported language codes, in stored order.
    pub fn languages(&self) -> Vec<String> {
        self.0.iter().map(|(code, _)| code.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Messages resolved for a requested language.
#[derive(Debug, Clone, PartialEq)]
pub struct Translations {
    pub language: String,
    pub messages: Messages,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(key: &str, text: &str) -> Messages {
        Messages::from([(key.to_string(), text.to_string())])
    }

    fn table() -> TranslationTable {
        TranslationTable::new([
            ("en".to_string(), messages("cart", "Cart")),
            ("az".to_string(), messages("cart", "Səbət")),
        ])
    }

    #[test]
    fn should_look_up_language_by_exact_code() {
        let table = table();

        assert_eq!(table.get("az").unwrap()["cart"], "Səbət");
        assert!(table.get("AZ").is_none());
    }

    #[test]
    fn should_list_languages_in_stored_order() {
        assert_eq!(table().languages(), vec!["en", "az"]);
    }

    #[test]
    fn should_replace_messages_of_repeated_language_in_place() {
        let mut table = table();

        table.insert("en".to_string(), messages("cart", "Basket"));

        assert_eq!(table.languages(), vec!["en", "az"]);
        assert_eq!(table.get("en").unwrap()["cart"], "Basket");
    }
}
