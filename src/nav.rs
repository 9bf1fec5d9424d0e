//! Sidebar navigation menu.
//!
//! The menu entries form a fixed table; exactly one entry is highlighted at a
//! time. Every selection resets all entries to the base style before the
//! highlight is applied, so a stale highlight can never survive.

use crate::error::SiteError;
use tracing::debug;

/// Classes every menu entry carries.
pub const BASE_CLASSES: &str = "w3-bar-item w3-button w3-padding";

/// Class appended to the selected entry.
pub const ACTIVE_CLASS: &str = "w3-blue";

/// One entry of the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavItem {
    News,
    Overview,
    Ide,
    Examples,
    Snippets,
    Requirements,
    Downloads,
    Contact,
}

/// Static data for a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub item: NavItem,
    /// Element id of the menu link
    pub id: &'static str,
    /// Section anchor the link jumps to
    pub anchor: &'static str,
    /// Translation key of the link text
    pub title_key: &'static str,
    /// Font Awesome icon shown next to the text
    pub icon: &'static str,
}

const MENU_LEN: usize = 8;

/// Menu order is the order of this table.
const ENTRIES: [NavEntry; MENU_LEN] = [
    NavEntry { item: NavItem::News, id: "menu_news", anchor: "news", title_key: "title_news", icon: "fa-newspaper-o" },
    NavEntry { item: NavItem::Overview, id: "menu_overview", anchor: "overview", title_key: "title_overview", icon: "fa-eye" },
    NavEntry { item: NavItem::Ide, id: "menu_ide", anchor: "ide", title_key: "title_the_ide", icon: "fa-desktop" },
    NavEntry { item: NavItem::Examples, id: "menu_examples", anchor: "examples", title_key: "title_examples", icon: "fa-gamepad" },
    NavEntry { item: NavItem::Snippets, id: "menu_snippets", anchor: "snippets", title_key: "title_snippets", icon: "fa-code" },
    NavEntry { item: NavItem::Requirements, id: "menu_requirements", anchor: "requirements", title_key: "title_requirements", icon: "fa-check-square-o" },
    NavEntry { item: NavItem::Downloads, id: "menu_downloads", anchor: "downloads", title_key: "title_downloads", icon: "fa-download" },
    NavEntry { item: NavItem::Contact, id: "menu_contact", anchor: "contact", title_key: "title_contact", icon: "fa-envelope" },
];

// Entry lookup indexes the table by variant, so each entry must sit at its
// variant's position.
const _: () = {
    let mut i = 0;
    while i < MENU_LEN {
        assert!(ENTRIES[i].item as usize == i, "ENTRIES out of order with NavItem");
        i += 1;
    }
};

impl NavItem {
    /// All entries, in menu order.
    pub const ALL: [NavItem; MENU_LEN] = {
        let mut items = [NavItem::News; MENU_LEN];
        let mut i = 0;
        while i < MENU_LEN {
            items[i] = ENTRIES[i].item;
            i += 1;
        }
        items
    };

    pub fn entry(self) -> &'static NavEntry {
        &ENTRIES[self.index()]
    }

    /// Position in the menu table.
    fn index(self) -> usize {
        self as usize
    }

    pub fn id(self) -> &'static str {
        self.entry().id
    }

    pub fn anchor(self) -> &'static str {
        self.entry().anchor
    }

    pub fn title_key(self) -> &'static str {
        self.entry().title_key
    }

    /// Find the entry whose element id is `id`.
    pub fn from_id(id: &str) -> Result<NavItem, SiteError> {
        ENTRIES
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.item)
            .ok_or_else(|| SiteError::ElementNotFound(id.to_string()))
    }
}

/// Selection state of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavMenu {
    classes: [String; MENU_LEN],
    selected: NavItem,
}

impl NavMenu {
    /// A menu with `item` highlighted.
    pub fn new(item: NavItem) -> Self {
        let mut menu = Self {
            classes: std::array::from_fn(|_| BASE_CLASSES.to_string()),
            selected: item,
        };
        menu.select(item);
        menu
    }

    /// Highlight `item` and reset every other entry.
    pub fn select(&mut self, item: NavItem) {
        for class in self.classes.iter_mut() {
            *class = BASE_CLASSES.to_string();
        }
        self.classes[item.index()] = format!("{} {}", BASE_CLASSES, ACTIVE_CLASS);
        self.selected = item;
    }

    /// Highlight the entry with element id `id`.
    ///
    /// An unknown id leaves the current selection untouched.
    pub fn select_id(&mut self, id: &str) -> Result<NavItem, SiteError> {
        let item = NavItem::from_id(id)?;
        debug!("Selecting menu entry '{}'", id);
        self.select(item);
        Ok(item)
    }

    pub fn selected(&self) -> NavItem {
        self.selected
    }

    /// Class attribute for `item`.
    pub fn class_name(&self, item: NavItem) -> &str {
        &self.classes[item.index()]
    }

    /// `(item, class attribute)` for every entry, in menu order.
    pub fn classes(&self) -> impl Iterator<Item = (NavItem, &str)> + '_ {
        NavItem::ALL
            .into_iter()
            .map(move |item| (item, self.class_name(item)))
    }

    pub fn is_active(&self, item: NavItem) -> bool {
        self.class_name(item).split_whitespace().any(|c| c == ACTIVE_CLASS)
    }
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::new(NavItem::News)
    }
}
