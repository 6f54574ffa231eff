// File: src/model/segment.rs
use crate::locale::LocaleProfile;
use crate::model::MenuEvent;
use crate::model::annotate::annotate;
use crate::model::date::parse_date_line;
use chrono::NaiveDate;

/// Cuts extracted document text into one all-day event per date line.
///
/// Single forward pass: every line that parses as a date (in the date
/// locale) starts an event; the following lines are annotated (in the
/// content locale) and accumulated into its description until the next date
/// line, a sentinel phrase, or the end of the text. The terminating line is
/// never consumed into the event, so a new date line is re-evaluated by the
/// outer loop. Events come back in source order; no re-sorting.
///
/// Lines that match the date pattern but name an impossible calendar day are
/// dropped: undercounting, not crashing, is the intended failure mode for
/// noisy extractions.
pub fn segment(
    text: &str,
    title: &str,
    content_locale: &LocaleProfile,
    date_locale: &LocaleProfile,
    year: i32,
) -> Vec<MenuEvent> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut events = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let Some((y, month, day)) = parse_date_line(lines[i], date_locale, year) else {
            i += 1;
            continue;
        };
        let Some(date) = NaiveDate::from_ymd_opt(y, month, day) else {
            log::debug!("dropping impossible date line {:?}", lines[i].trim());
            i += 1;
            continue;
        };
        let mut description = String::new();
        while i + 1 < lines.len()
            && parse_date_line(lines[i + 1], date_locale, year).is_none()
            && !contains_sentinel(lines[i + 1], date_locale)
        {
            description.push_str(&annotate(lines[i + 1].trim(), content_locale));
            description.push('\n');
            i += 1;
        }
        events.push(MenuEvent {
            title: title.to_string(),
            date,
            description,
        });
        i += 1;
    }
    events
}

fn contains_sentinel(line: &str, locale: &LocaleProfile) -> bool {
    locale.sentinels.iter().any(|phrase| line.contains(phrase.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LocaleProfile;

    fn en() -> &'static LocaleProfile {
        LocaleProfile::get("en").unwrap()
    }

    #[test]
    fn test_two_dates_with_trailing_sentinel() {
        let text = "March 3\nPizza\nMarch 4\nPrices subject to change";
        let events = segment(text, "Lunch Menu", en(), en(), 2026);

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "Lunch Menu");
        assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2026, 3, 3).unwrap());
        assert_eq!(events[0].description, "Pizza🍕\n");
        assert_eq!(events[1].date, NaiveDate::from_ymd_opt(2026, 3, 4).unwrap());
        assert_eq!(events[1].description, "");
    }

    #[test]
    fn test_description_accumulates_until_next_date() {
        let text = "April 1\nCheese Pizza\nGarden Salad\nMilk\nApril 2\nTacos";
        let events = segment(text, "Menu", en(), en(), 2026);

        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0].description,
            "Cheese Pizza🧀🍕\nGarden Salad🥗\nMilk🥛\n"
        );
        assert_eq!(events[1].description, "Tacos🌮\n");
    }

    #[test]
    fn test_consecutive_date_lines_yield_empty_descriptions() {
        let events = segment("May 1\nMay 2\nMay 3", "Menu", en(), en(), 2026);
        assert_eq!(events.len(), 3);
        assert!(events.iter().all(|e| e.description.is_empty()));
        assert_eq!(events[2].date, NaiveDate::from_ymd_opt(2026, 5, 3).unwrap());
    }

    #[test]
    fn test_sentinel_line_is_not_consumed_or_misparsed() {
        let text = "June 5\nPrices may vary\nJune 6\nCorn";
        let events = segment(text, "Menu", en(), en(), 2026);

        // The sentinel ends the first event without joining any description,
        // and the following date still starts a fresh event.
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].description, "");
        assert_eq!(events[1].description, "Corn🌽\n");
    }

    #[test]
    fn test_leading_noise_is_skipped() {
        let text = "WEEKLY MENU\n\nSeptember 8\nPancakes\n";
        let events = segment(text, "Menu", en(), en(), 2026);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2026, 9, 8).unwrap());
        assert_eq!(events[0].description, "Pancakes🥞\n");
    }

    #[test]
    fn test_impossible_day_is_dropped_without_an_event() {
        let text = "February 99\nPizza\nFebruary 10\nMilk";
        let events = segment(text, "Menu", en(), en(), 2026);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2026, 2, 10).unwrap());
        // "Pizza" belonged to the dropped line and is skipped as noise.
        assert_eq!(events[0].description, "Milk🥛\n");
    }

    #[test]
    fn test_split_date_and_content_locales() {
        // Menus occasionally arrive with Spanish content but English day
        // labels; the two locales are independent inputs.
        let es = LocaleProfile::get("es").unwrap();
        let text = "March 3\nLeche\nTacos";
        let events = segment(text, "Menú", es, en(), 2026);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].description, "Leche🥛\nTacos🌮\n");
    }

    #[test]
    fn test_empty_text_yields_no_events() {
        assert!(segment("", "Menu", en(), en(), 2026).is_empty());
    }
}
