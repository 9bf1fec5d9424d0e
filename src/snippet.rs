//! Code-snippet blocks.
//!
//! Each snippet has a collapsible code panel and a chevron button. Whether
//! the panel is shown is an explicit boolean; the panel's `display` value and
//! the button's icon class are both derived from it, so they always agree.

use crate::error::SiteError;

/// Icon shown on the button while the code is visible.
pub const ICON_VISIBLE: &str = "fa fa-chevron-up fa-fw";

/// Icon shown on the button while the code is hidden.
pub const ICON_HIDDEN: &str = "fa fa-chevron-down fa-fw";

pub const DISPLAY_VISIBLE: &str = "block";

pub const DISPLAY_HIDDEN: &str = "none";

/// Static definition of a snippet shown in the snippets section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetDef {
    /// Element id of the code panel
    pub id: &'static str,
    /// Translation key of the snippet title
    pub title_key: &'static str,
    /// TinyDev source code
    pub code: &'static str,
    /// Screenshot of the program output
    pub result_image: &'static str,
}

pub static SNIPPETS: &[SnippetDef] = &[SnippetDef {
    id: "snip_1",
    title_key: "snip_1_title",
    code: "font \"Arial\", 48, bold\n\
pen \"gray\"\n\
cursor to 104, 104\n\
print \"TinyDev\"\n\
pen \"blue\"\n\
cursor to 100, 100\n\
print \"TinyDev\"\n\
end",
    result_image: "img/snip_1.png",
}];

/// Look up a snippet definition by its element id.
pub fn find_snippet(id: &str) -> Result<&'static SnippetDef, SiteError> {
    SNIPPETS
        .iter()
        .find(|snippet| snippet.id == id)
        .ok_or_else(|| SiteError::ElementNotFound(id.to_string()))
}

/// What the page shows for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetView {
    /// `display` style of the code panel
    pub display: &'static str,
    /// Class attribute of the button icon
    pub icon_class: &'static str,
}

/// Visibility of one snippet's code panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SnippetState {
    visible: bool,
}

impl SnippetState {
    pub fn hidden() -> Self {
        Self { visible: false }
    }

    pub fn visible() -> Self {
        Self { visible: true }
    }

    /// Infer the state from a `display` value found in markup.
    ///
    /// Only `"none"` means hidden.
    pub fn from_display(display: &str) -> Self {
        Self {
            visible: display != DISPLAY_HIDDEN,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flip the state and return the new view.
    pub fn toggle(&mut self) -> SnippetView {
        self.visible = !self.visible;
        self.view()
    }

    pub fn view(&self) -> SnippetView {
        if self.visible {
            SnippetView {
                display: DISPLAY_VISIBLE,
                icon_class: ICON_VISIBLE,
            }
        } else {
            SnippetView {
                display: DISPLAY_HIDDEN,
                icon_class: ICON_HIDDEN,
            }
        }
    }
}

/// A snippet on the page: its definition, the ids of the paired code panel
/// and button, and the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetBlock {
    pub def: &'static SnippetDef,
    pub state: SnippetState,
}

impl SnippetBlock {
    pub fn new(def: &'static SnippetDef, state: SnippetState) -> Self {
        Self { def, state }
    }

    /// Element id of the code panel
    pub fn content_id(&self) -> &'static str {
        self.def.id
    }

    /// Element id of the toggle button
    pub fn control_id(&self) -> String {
        format!("{}_btn", self.def.id)
    }

    pub fn toggle(&mut self) -> SnippetView {
        self.state.toggle()
    }

    pub fn view(&self) -> SnippetView {
        self.state.view()
    }
}

/// Build the page's snippet blocks, showing those whose ids are in `open`.
///
/// Unknown ids are returned separately so the caller can report them.
pub fn blocks_with_open<'a, I>(open: I) -> (Vec<SnippetBlock>, Vec<SiteError>)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut blocks: Vec<SnippetBlock> = SNIPPETS
        .iter()
        .map(|def| SnippetBlock::new(def, SnippetState::hidden()))
        .collect();
    let mut errors = Vec::new();

    for id in open {
        match find_snippet(id) {
            Ok(def) => {
                if let Some(block) = blocks.iter_mut().find(|b| b.def.id == def.id) {
                    block.state = SnippetState::visible();
                }
            }
            Err(e) => errors.push(e),
        }
    }

    (blocks, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== State Tests ====================

    #[test]
    fn test_hidden_view() {
        let view = SnippetState::hidden().view();
        assert_eq!(view.display, "none");
        assert_eq!(view.icon_class, "fa fa-chevron-down fa-fw");
    }

    #[test]
    fn test_first_toggle_shows() {
        let mut state = SnippetState::hidden();
        let view = state.toggle();
        assert!(state.is_visible());
        assert_eq!(view.display, "block");
        assert_eq!(view.icon_class, "fa fa-chevron-up fa-fw");
    }

    #[test]
    fn test_second_toggle_hides() {
        let mut state = SnippetState::hidden();
        state.toggle();
        let view = state.toggle();
        assert!(!state.is_visible());
        assert_eq!(view, SnippetState::hidden().view());
    }

    #[test]
    fn test_toggles_alternate_from_either_start() {
        for start in [SnippetState::hidden(), SnippetState::visible()] {
            let mut state = start;
            for i in 1..=6 {
                state.toggle();
                let expected = if i % 2 == 1 { !start.is_visible() } else { start.is_visible() };
                assert_eq!(state.is_visible(), expected);
            }
        }
    }

    #[test]
    fn test_from_display() {
        assert!(!SnippetState::from_display("none").is_visible());
        assert!(SnippetState::from_display("block").is_visible());
        // Unset style attribute counts as shown
        assert!(SnippetState::from_display("").is_visible());
    }

    #[test]
    fn test_default_is_hidden() {
        assert_eq!(SnippetState::default(), SnippetState::hidden());
    }

    // ==================== Block Tests ====================

    #[test]
    fn test_block_ids() {
        let block = SnippetBlock::new(&SNIPPETS[0], SnippetState::hidden());
        assert_eq!(block.content_id(), "snip_1");
        assert_eq!(block.control_id(), "snip_1_btn");
    }

    #[test]
    fn test_block_toggle_updates_view() {
        let mut block = SnippetBlock::new(&SNIPPETS[0], SnippetState::hidden());
        block.toggle();
        assert_eq!(block.view().icon_class, ICON_VISIBLE);
    }

    #[test]
    fn test_find_snippet() {
        assert_eq!(find_snippet("snip_1").unwrap().title_key, "snip_1_title");
        assert_eq!(
            find_snippet("snip_9"),
            Err(SiteError::ElementNotFound("snip_9".to_string()))
        );
    }

    #[test]
    fn test_blocks_with_open() {
        let (blocks, errors) = blocks_with_open(["snip_1", "snip_9"]);
        assert_eq!(blocks.len(), SNIPPETS.len());
        assert!(blocks[0].state.is_visible());
        assert_eq!(errors, vec![SiteError::ElementNotFound("snip_9".to_string())]);
    }

    #[test]
    fn test_blocks_default_hidden() {
        let (blocks, errors) = blocks_with_open(std::iter::empty());
        assert!(blocks.iter().all(|b| !b.state.is_visible()));
        assert!(errors.is_empty());
    }
}
