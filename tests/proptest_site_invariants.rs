//! Property-based invariant tests for locale resolution and page state.
//!
//! 1. Parameter reader returns the default whenever the parameter is absent
//! 2. A present, plain value is returned as-is
//! 3. Language selection is total and follows the "es" substring rule
//! 4. Translation lookups are pure
//! 5. Both tables expose the same keys
//! 6. Exactly one menu entry is highlighted after any selection sequence
//! 7. Snippet toggling strictly alternates

use std::collections::HashSet;

use proptest::prelude::*;
use tinydev_site::i18n::{select_language, Language, PageContext, ENGLISH_STRINGS, SPANISH_STRINGS};
use tinydev_site::nav::{NavItem, NavMenu};
use tinydev_site::query::get_param;
use tinydev_site::snippet::{SnippetState, DISPLAY_HIDDEN, ICON_HIDDEN, ICON_VISIBLE};

fn nav_item() -> impl Strategy<Value = NavItem> {
    (0..NavItem::ALL.len()).prop_map(|i| NavItem::ALL[i])
}

// 1. Absent parameter yields the default
proptest! {
    #[test]
    fn absent_parameter_yields_default(path in "[a-z/]{0,20}", default in "[a-zA-Z-]{0,8}") {
        let url = format!("https://site/{}?x=1&y=2", path);
        prop_assert_eq!(get_param(&url, "lang", &default), default);
    }
}

// 2. Plain value is returned
proptest! {
    #[test]
    fn plain_value_is_returned(value in "[a-zA-Z0-9-]{1,12}", first in any::<bool>()) {
        let url = if first {
            format!("https://site/?lang={}&x=1", value)
        } else {
            format!("https://site/?x=1&lang={}", value)
        };
        prop_assert_eq!(get_param(&url, "lang", "default"), value);
    }
}

// 3. Language selection is total
proptest! {
    #[test]
    fn language_selection_is_total(locale in ".{0,16}") {
        let language = select_language(&locale);
        if locale.contains("es") {
            prop_assert_eq!(language, Language::SPANISH);
        } else {
            prop_assert_eq!(language, Language::ENGLISH);
        }
    }
}

// 4. Translation is a pure lookup
proptest! {
    #[test]
    fn translation_is_pure(key in "[a-z_0-9]{0,24}", spanish in any::<bool>()) {
        let language = if spanish { Language::SPANISH } else { Language::ENGLISH };
        let ctx = PageContext::new(language);
        prop_assert_eq!(ctx.translate(&key), ctx.translate(&key));
    }
}

// 5. Both tables share their key set
#[test]
fn tables_share_key_set() {
    let en: HashSet<_> = ENGLISH_STRINGS.keys().collect();
    let es: HashSet<_> = SPANISH_STRINGS.keys().collect();
    assert_eq!(en, es);
}

// 6. Single highlighted menu entry
proptest! {
    #[test]
    fn single_menu_highlight(selections in prop::collection::vec(nav_item(), 1..12)) {
        let mut menu = NavMenu::default();
        for item in &selections {
            menu.select(*item);
        }
        let last = *selections.last().unwrap();
        let active: Vec<_> = NavItem::ALL.iter().copied().filter(|i| menu.is_active(*i)).collect();
        prop_assert_eq!(active, vec![last]);
    }
}

// 7. Snippet toggling alternates and the two views agree
proptest! {
    #[test]
    fn snippet_toggle_alternates(start_visible in any::<bool>(), toggles in 0usize..20) {
        let mut state = if start_visible { SnippetState::visible() } else { SnippetState::hidden() };
        for _ in 0..toggles {
            state.toggle();
        }
        let expected = start_visible ^ (toggles % 2 == 1);
        prop_assert_eq!(state.is_visible(), expected);

        let view = state.view();
        let hidden = view.display == DISPLAY_HIDDEN;
        prop_assert_eq!(hidden, !expected);
        prop_assert_eq!(view.icon_class, if expected { ICON_VISIBLE } else { ICON_HIDDEN });
    }
}
