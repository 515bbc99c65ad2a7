//! Localized strings for export output and share dialogs.
//!
//! String tables are JSON files embedded at compile time, one per locale.
//! Keys are nested and addressed with dot paths (`share.dialog.trip.pdf`);
//! values may carry `{token}` placeholders filled at lookup time.
//!
//! Resolution order for a key: requested locale → default locale (`en`) →
//! the key itself. The last step means a typo'd key shows up verbatim in
//! output instead of panicking or vanishing, which is the failure mode you
//! want in a share artifact.
//!
//! [`Translations`] is passed explicitly down the renderer call chain — no
//! module-level locale state — so every renderer stays a pure function of
//! its arguments.

use serde_json::Value;
use std::sync::OnceLock;

const EN: &str = include_str!("../static/locales/en.json");
const DE: &str = include_str!("../static/locales/de.json");

pub const DEFAULT_LOCALE: &str = "en";

/// Locales with an embedded string table.
pub fn available_locales() -> &'static [&'static str] {
    &["en", "de"]
}

fn parse_table(raw: &str) -> Value {
    // Embedded assets are validated by the i18n tests; a parse failure here
    // is a broken build, not a runtime condition.
    serde_json::from_str(raw).expect("embedded locale table is valid JSON")
}

fn en_table() -> &'static Value {
    static TABLE: OnceLock<Value> = OnceLock::new();
    TABLE.get_or_init(|| parse_table(EN))
}

fn de_table() -> &'static Value {
    static TABLE: OnceLock<Value> = OnceLock::new();
    TABLE.get_or_init(|| parse_table(DE))
}

/// A resolved locale: the requested table plus the default-locale fallback.
#[derive(Debug, Clone, Copy)]
pub struct Translations {
    locale: &'static str,
    table: &'static Value,
    fallback: &'static Value,
}

impl Translations {
    /// Resolve a locale tag to its string table. Region subtags are
    /// stripped (`de-AT` → `de`); unknown locales fall back to `en`.
    pub fn for_locale(tag: &str) -> Self {
        let base = tag.split(['-', '_']).next().unwrap_or(tag);
        match base {
            "de" => Translations {
                locale: "de",
                table: de_table(),
                fallback: en_table(),
            },
            _ => Translations {
                locale: "en",
                table: en_table(),
                fallback: en_table(),
            },
        }
    }

    pub fn locale(&self) -> &'static str {
        self.locale
    }

    /// Look up a dot-path key, substituting `{token}` placeholders from
    /// `params`. Missing keys fall back to the default locale, then to the
    /// key itself.
    pub fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        let template = lookup(self.table, key)
            .or_else(|| lookup(self.fallback, key))
            .unwrap_or(key);

        let mut out = template.to_string();
        for (name, value) in params {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        out
    }
}

/// Walk a nested JSON table along a dot path, returning the leaf string.
fn lookup<'v>(table: &'v Value, key: &str) -> Option<&'v str> {
    let mut node = table;
    for part in key.split('.') {
        node = node.get(part)?;
    }
    node.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_key_lookup() {
        let t = Translations::for_locale("en");
        assert_eq!(t.translate("export.stats.cities", &[]), "Cities");
    }

    #[test]
    fn token_substitution() {
        let t = Translations::for_locale("en");
        assert_eq!(
            t.translate("export.more", &[("count", "3")]),
            "+3 more"
        );
    }

    #[test]
    fn multiple_tokens_in_dialog_title() {
        let t = Translations::for_locale("en");
        let title = t.translate("share.dialog.trip.pdf", &[("name", "Japan 2024")]);
        assert_eq!(title, "Share the \"Japan 2024\" travel guide");
    }

    #[test]
    fn german_table_used_when_key_present() {
        let t = Translations::for_locale("de");
        assert_eq!(t.translate("export.stats.cities", &[]), "Städte");
    }

    #[test]
    fn missing_key_falls_back_to_default_locale() {
        // de.json has no export.attribution — must resolve through en.
        let t = Translations::for_locale("de");
        assert_eq!(
            t.translate("export.attribution", &[("app", "Tripcard")]),
            "Shared from Tripcard"
        );
    }

    #[test]
    fn unknown_key_returns_key_itself() {
        let t = Translations::for_locale("en");
        assert_eq!(t.translate("export.nope.missing", &[]), "export.nope.missing");
    }

    #[test]
    fn region_subtag_stripped() {
        assert_eq!(Translations::for_locale("de-AT").locale(), "de");
        assert_eq!(Translations::for_locale("de_CH").locale(), "de");
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        let t = Translations::for_locale("pt-BR");
        assert_eq!(t.locale(), "en");
        assert_eq!(t.translate("export.no_entries", &[]), "No entries yet.");
    }

    #[test]
    fn embedded_tables_parse() {
        // Forces both OnceLocks; a malformed asset fails here, not in prod.
        let _ = Translations::for_locale("en");
        let _ = Translations::for_locale("de");
    }
}
