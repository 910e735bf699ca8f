//! Listing order

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::types::{SortBy, ToolRecord};

/// Punctuation and spaces, then digits, then letters
fn weight(c: char) -> (u8, char) {
    let class = if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    };
    (class, c)
}

/// Case-folded with accents dropped
fn base_letters(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(weight)
}

fn accented_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Compare display names the way a reader expects
///
/// Base letters compare first, ignoring case and accents, so "Éclair" sorts
/// with the e's. Ties fall back to accents, unaccented first, and then to
/// code points in reverse so lowercase comes first. This is a total order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| b.cmp(a))
}

fn by_name(a: &&ToolRecord, b: &&ToolRecord) -> Ordering {
    locale_cmp(&a.name, &b.name)
}

/// Sort tools in place
pub fn sort_tools(tools: &mut Vec<&ToolRecord>, sort_by: SortBy) {
    match sort_by {
        // Popular has no usage signal in this layer yet
        SortBy::NameAsc | SortBy::Popular => tools.sort_by(by_name),
        SortBy::NameDesc => {
            tools.sort_by(by_name);
            tools.reverse();
        }
        SortBy::Recent => tools.sort_by(|a, b| b.is_new.cmp(&a.is_new).then_with(|| by_name(a, b))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{fixtures, CatalogRegistry};
    use crate::search::{filter_tools, ToolQuery};

    fn names<'a>(registry: &'a CatalogRegistry, sort_by: SortBy) -> Vec<&'a str> {
        filter_tools(registry, &ToolQuery::new().sort_by(sort_by))
            .into_iter()
            .map(|t| t.name.as_str())
            .collect()
    }

    #[test]
    fn test_locale_cmp_ignores_case_first() {
        assert_eq!(locale_cmp("case converter", "Calorie Calculator"), Ordering::Greater);
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("Same", "Same"), Ordering::Equal);
    }

    #[test]
    fn test_locale_cmp_folds_accents() {
        assert_eq!(locale_cmp("Éclair Timer", "Zebra Striper"), Ordering::Less);
        assert_eq!(locale_cmp("énergie", "Ferris"), Ordering::Less);
        assert_eq!(locale_cmp("Dog", "Éclair Timer"), Ordering::Less);
        // Accent breaks the tie, before case
        assert_eq!(locale_cmp("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_cmp("Resume", "résumé"), Ordering::Less);
        // Precomposed and decomposed forms both follow the bare letter
        assert_eq!(locale_cmp("cafe", "caf\u{e9}"), Ordering::Less);
        assert_eq!(locale_cmp("cafe", "cafe\u{301}"), Ordering::Less);
    }

    #[test]
    fn test_locale_cmp_puts_punctuation_before_alphanumerics() {
        assert_eq!(locale_cmp("~Tilde Tool", "Abacus"), Ordering::Less);
        assert_eq!(locale_cmp("3D Viewer", "Abacus"), Ordering::Less);
        assert_eq!(locale_cmp("case converter", "casement"), Ordering::Less);
    }

    #[test]
    fn test_name_asc_places_accented_names_by_base_letter() {
        let mut def = fixtures::definition();
        def.tools.push(
            ToolRecord::new("eclair-timer", "Éclair Timer", "Time your pastry", "calculators").with_icon("Timer"),
        );
        let logger: crate::logging::SharedLogger = std::sync::Arc::new(crate::logging::NoOpLogger::new());
        let registry = CatalogRegistry::new(def, &logger).unwrap();

        assert_eq!(
            names(&registry, SortBy::NameAsc),
            vec![
                "BMI Calculator",
                "Body Measurement Converter",
                "Calorie Calculator",
                "case converter",
                "Éclair Timer",
                "Orphan Tool",
                "Percentage Calculator",
                "Word Counter",
            ]
        );
        assert_eq!(names(&registry, SortBy::NameDesc)[3], "Éclair Timer");
    }

    #[test]
    fn test_name_asc_is_monotonic() {
        let registry = fixtures::registry();
        let sorted = names(&registry, SortBy::NameAsc);
        assert_eq!(sorted.len(), registry.len());
        for pair in sorted.windows(2) {
            assert_ne!(locale_cmp(pair[0], pair[1]), Ordering::Greater, "{:?}", pair);
        }
        assert_eq!(
            sorted,
            vec![
                "BMI Calculator",
                "Body Measurement Converter",
                "Calorie Calculator",
                "case converter",
                "Orphan Tool",
                "Percentage Calculator",
                "Word Counter",
            ]
        );
    }

    #[test]
    fn test_name_desc_is_exact_reverse() {
        let logger: crate::logging::SharedLogger = std::sync::Arc::new(crate::logging::NoOpLogger::new());
        let registry = CatalogRegistry::builtin(&logger).unwrap();
        let mut asc = names(&registry, SortBy::NameAsc);
        asc.reverse();
        assert_eq!(names(&registry, SortBy::NameDesc), asc);
    }

    #[test]
    fn test_popular_matches_name_asc() {
        let registry = fixtures::registry();
        assert_eq!(names(&registry, SortBy::Popular), names(&registry, SortBy::NameAsc));
    }

    #[test]
    fn test_recent_puts_new_tools_first() {
        let registry = fixtures::registry();
        assert_eq!(
            names(&registry, SortBy::Recent),
            vec![
                "Calorie Calculator",
                "case converter",
                "BMI Calculator",
                "Body Measurement Converter",
                "Orphan Tool",
                "Percentage Calculator",
                "Word Counter",
            ]
        );
    }
}
