// File: src/locale.rs
// Static per-language tables: month names, sentinel phrases, the lemma
// exception and glyph dictionaries, and the title/filename terms. All of it
// is data, loaded once from the embedded JSON locale files.
use anyhow::{Result, anyhow};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use strum::EnumIter;

const LOCALE_SOURCES: &[&str] = &[
    include_str!("../locales/en.json"),
    include_str!("../locales/es.json"),
];

#[derive(Debug, Deserialize)]
pub struct LocaleProfile {
    pub tag: String,
    pub months: Vec<String>,
    /// Phrases whose presence in a line ends description accumulation.
    pub sentinels: Vec<String>,
    #[serde(default)]
    lemma_exceptions: HashMap<String, String>,
    /// `:base-word:` shortcode → glyph.
    #[serde(default)]
    glyphs: HashMap<String, String>,
    meal_terms: HashMap<String, String>,
    level_terms: HashMap<String, String>,
    title_template: String,
    pub filename_prefix: String,
}

static REGISTRY: OnceLock<HashMap<String, LocaleProfile>> = OnceLock::new();

fn registry() -> &'static HashMap<String, LocaleProfile> {
    REGISTRY.get_or_init(|| {
        LOCALE_SOURCES
            .iter()
            .map(|src| {
                let profile: LocaleProfile =
                    serde_json::from_str(src).expect("embedded locale file must be valid JSON");
                (profile.tag.clone(), profile)
            })
            .collect()
    })
}

impl LocaleProfile {
    /// Looks up a locale by its language tag ("en", "es"). An unknown tag is
    /// an unsupported-locale error, never a fallback.
    pub fn get(tag: &str) -> Result<&'static LocaleProfile> {
        registry()
            .get(tag)
            .ok_or_else(|| anyhow!("Unsupported locale '{}'", tag))
    }

    /// 1-based month number for an exact, case-sensitive month name.
    pub fn month_number(&self, name: &str) -> Option<u32> {
        self.months
            .iter()
            .position(|m| m == name)
            .map(|i| i as u32 + 1)
    }

    pub fn month_name(&self, month: u32) -> Option<&str> {
        self.months
            .get(month.checked_sub(1)? as usize)
            .map(|s| s.as_str())
    }

    /// Reduces a lower-cased token to its dictionary base form. The exception
    /// table wins; a few fixed suffix rules then cover regular plurals.
    pub fn lemmatize(&self, token: &str) -> String {
        if let Some(base) = self.lemma_exceptions.get(token) {
            return base.clone();
        }
        if let Some(stem) = token.strip_suffix("ies")
            && !stem.is_empty()
        {
            return format!("{stem}y");
        }
        if ["ches", "shes", "sses", "xes", "zes"]
            .iter()
            .any(|suffix| token.ends_with(suffix))
        {
            return token[..token.len() - 2].to_string();
        }
        if let Some(stem) = token.strip_suffix('s')
            && !stem.is_empty()
            && !stem.ends_with('s')
        {
            return stem.to_string();
        }
        token.to_string()
    }

    /// Resolves a `:base:` shortcode through the glyph table.
    pub fn glyph(&self, key: &str) -> Option<&str> {
        self.glyphs.get(key).map(|s| s.as_str())
    }

    /// Builds the event title shared by every event of one document.
    pub fn event_title(&self, level: Level, meal: Meal) -> Result<String> {
        let level_term = self.level_terms.get(level.key()).ok_or_else(|| {
            anyhow!("Locale '{}' has no term for level '{}'", self.tag, level)
        })?;
        let meal_term = self
            .meal_terms
            .get(meal.key())
            .ok_or_else(|| anyhow!("Locale '{}' has no term for meal '{}'", self.tag, meal))?;
        Ok(self
            .title_template
            .replace("{level}", level_term)
            .replace("{meal}", meal_term))
    }

    /// Output filename for a generated calendar, e.g. `english_k12_lunch.ics`.
    pub fn output_filename(&self, level: Level, meal: Meal) -> String {
        format!("{}_{}_{}.ics", self.filename_prefix, level.key(), meal.key())
    }

    /// Key used to route a menu to its calendar id in the config.
    pub fn menu_key(&self, level: Level, meal: Meal) -> String {
        format!("{}_{}_{}", self.filename_prefix, level.key(), meal.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Level {
    K12,
    Elementary,
    Middle,
    High,
    Bic,
    PreK,
}

impl Level {
    pub fn key(self) -> &'static str {
        match self {
            Level::K12 => "k12",
            Level::Elementary => "elementary",
            Level::Middle => "middle",
            Level::High => "high",
            Level::Bic => "bic",
            Level::PreK => "prek",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Level {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "k12" | "k-12" => Ok(Level::K12),
            "elementary" | "es" => Ok(Level::Elementary),
            "middle" | "ms" => Ok(Level::Middle),
            "high" | "hs" => Ok(Level::High),
            "bic" | "classroom" => Ok(Level::Bic),
            "prek" | "pre-k" => Ok(Level::PreK),
            other => Err(anyhow!("Unknown school level '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Meal {
    Breakfast,
    Lunch,
    AfterschoolSnack,
    Snack,
}

impl Meal {
    pub fn key(self) -> &'static str {
        match self {
            Meal::Breakfast => "breakfast",
            Meal::Lunch => "lunch",
            Meal::AfterschoolSnack => "afterschoolsnack",
            Meal::Snack => "snack",
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Meal {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(Meal::Breakfast),
            "lunch" => Ok(Meal::Lunch),
            "afterschoolsnack" | "assp" => Ok(Meal::AfterschoolSnack),
            "snack" => Ok(Meal::Snack),
            other => Err(anyhow!("Unknown meal type '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_lookup_by_tag() {
        assert_eq!(LocaleProfile::get("en").unwrap().tag, "en");
        assert_eq!(LocaleProfile::get("es").unwrap().tag, "es");
    }

    #[test]
    fn test_unknown_tag_is_an_error() {
        let err = LocaleProfile::get("fr").unwrap_err();
        assert!(err.to_string().contains("Unsupported locale"));
    }

    #[test]
    fn test_month_tables_are_complete() {
        for tag in ["en", "es"] {
            let locale = LocaleProfile::get(tag).unwrap();
            assert_eq!(locale.months.len(), 12);
            for (i, name) in locale.months.iter().enumerate() {
                assert_eq!(locale.month_number(name), Some(i as u32 + 1));
                assert_eq!(locale.month_name(i as u32 + 1), Some(name.as_str()));
            }
        }
        assert_eq!(LocaleProfile::get("es").unwrap().month_number("March"), None);
    }

    #[test]
    fn test_every_level_and_meal_has_a_term_in_both_locales() {
        for tag in ["en", "es"] {
            let locale = LocaleProfile::get(tag).unwrap();
            for level in Level::iter() {
                for meal in Meal::iter() {
                    let title = locale.event_title(level, meal).unwrap();
                    assert!(!title.contains('{'), "unfilled template: {title}");
                }
            }
        }
    }

    #[test]
    fn test_event_titles() {
        let en = LocaleProfile::get("en").unwrap();
        assert_eq!(
            en.event_title(Level::Elementary, Meal::Lunch).unwrap(),
            "Elementary School Lunch Menu"
        );
        let es = LocaleProfile::get("es").unwrap();
        assert_eq!(
            es.event_title(Level::High, Meal::Breakfast).unwrap(),
            "Menú Desayuno Escuela Secundaria"
        );
    }

    #[test]
    fn test_output_filename() {
        let en = LocaleProfile::get("en").unwrap();
        assert_eq!(
            en.output_filename(Level::K12, Meal::AfterschoolSnack),
            "english_k12_afterschoolsnack.ics"
        );
        let es = LocaleProfile::get("es").unwrap();
        assert_eq!(es.output_filename(Level::PreK, Meal::Snack), "spanish_prek_snack.ics");
    }

    #[test]
    fn test_lemmatize_regular_plurals() {
        let en = LocaleProfile::get("en").unwrap();
        assert_eq!(en.lemmatize("grapes"), "grape");
        assert_eq!(en.lemmatize("berries"), "berry");
        assert_eq!(en.lemmatize("peaches"), "peach");
        assert_eq!(en.lemmatize("milk"), "milk");
        // Trailing "ss" is not a plural marker.
        assert_eq!(en.lemmatize("swiss"), "swiss");
    }

    #[test]
    fn test_lemmatize_exceptions_win() {
        let en = LocaleProfile::get("en").unwrap();
        assert_eq!(en.lemmatize("potatoes"), "potato");
        assert_eq!(en.lemmatize("tomatoes"), "tomato");
        let es = LocaleProfile::get("es").unwrap();
        assert_eq!(es.lemmatize("panes"), "pan");
        assert_eq!(es.lemmatize("manzanas"), "manzana");
    }

    #[test]
    fn test_level_and_meal_parsing() {
        assert_eq!("K-12".parse::<Level>().unwrap(), Level::K12);
        assert_eq!("Pre-K".parse::<Level>().unwrap(), Level::PreK);
        assert!("college".parse::<Level>().is_err());
        assert_eq!("ASSP".parse::<Meal>().unwrap(), Meal::AfterschoolSnack);
        assert!("dinner".parse::<Meal>().is_err());
    }
}
