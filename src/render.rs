//! HTML rendering of the TinyDev home page.
//!
//! The page is a single document with a sidebar menu and one section per
//! menu entry. All text comes from the `PageContext`; translation values are
//! inserted verbatim because they carry their own markup.

use crate::i18n::{LanguageRegistry, PageContext};
use crate::nav::{NavItem, NavMenu};
use crate::snippet::SnippetBlock;

const NEWS_ITEMS: usize = 4;
const REPOSITORY_URL: &str = "https://github.com/MiguelVis/TinyDev";

/// Render the full page.
pub fn render_page(ctx: &PageContext, menu: &NavMenu, snippets: &[SnippetBlock]) -> String {
    let lang = ctx.language().code();
    let mut out = String::with_capacity(16 * 1024);

    out.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n\
<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>TinyDev - {}</title>\n\
<link rel=\"stylesheet\" href=\"css/w3.css\">\n\
<link rel=\"stylesheet\" href=\"css/font-awesome.min.css\">\n\
</head>\n<body class=\"w3-light-grey\">\n",
        lang,
        ctx.translate("title_programming_for_kids")
    ));

    out.push_str(&render_menu(ctx, menu, snippets));

    out.push_str("<div class=\"w3-main\" style=\"margin-left:300px\">\n");
    out.push_str(&format!(
        "<header class=\"w3-container\">\n<h1><b>TinyDev</b></h1>\n<p>{}</p>\n{}</header>\n",
        ctx.translate("title_programming_for_kids"),
        render_language_links(ctx, menu, snippets)
    ));

    for item in NavItem::ALL {
        let body = match item {
            NavItem::News => render_news(ctx),
            NavItem::Overview => paragraphs(ctx, &["over_1", "over_2", "over_3", "over_4", "over_5"]),
            NavItem::Ide => render_ide(ctx),
            NavItem::Examples => render_examples(ctx),
            NavItem::Snippets => render_snippets(ctx, menu, snippets),
            NavItem::Requirements => format!(
                "{}{}",
                paragraphs(ctx, &["req_intro"]),
                list(ctx, &["req_1", "req_2"])
            ),
            NavItem::Downloads => paragraphs(ctx, &["down_intro", "down_github"]),
            NavItem::Contact => format!(
                "<p><i class=\"fa fa-github fa-fw\"></i> <a href=\"{0}\" target=\"_blank\">{0}</a></p>\n",
                REPOSITORY_URL
            ),
        };

        out.push_str(&format!(
            "<div class=\"w3-container\" id=\"{}\">\n<h2>{}</h2>\n{}</div>\n",
            item.anchor(),
            ctx.translate(item.title_key()),
            body
        ));
    }

    out.push_str(&format!(
        "<footer class=\"w3-container w3-padding-16\">\n<p>&copy; 2017 FloppySoftware. {}</p>\n</footer>\n",
        ctx.translate("all_rights_reserved")
    ));
    out.push_str("</div>\n</body>\n</html>\n");

    out
}

/// Query string that reproduces the page with the given state.
pub fn page_query(lang: &str, section: NavItem, open: &[&str]) -> String {
    let mut query = format!("?lang={}&section={}", lang, section.id());
    if !open.is_empty() {
        query.push_str("&open=");
        query.push_str(&open.join(","));
    }
    query
}

fn open_ids(snippets: &[SnippetBlock]) -> Vec<&'static str> {
    snippets
        .iter()
        .filter(|block| block.state.is_visible())
        .map(|block| block.content_id())
        .collect()
}

fn render_menu(ctx: &PageContext, menu: &NavMenu, snippets: &[SnippetBlock]) -> String {
    let lang = ctx.language().code();
    let open = open_ids(snippets);

    let mut out = String::from(
        "<nav class=\"w3-sidebar w3-collapse w3-white\" style=\"z-index:3;width:300px;\" id=\"sidebar\">\n",
    );
    out.push_str(&format!(
        "<a href=\"#\" class=\"w3-bar-item w3-button w3-padding w3-hide-large\"><i class=\"fa fa-remove fa-fw\"></i> {}</a>\n",
        ctx.translate("close_menu")
    ));

    for (item, class) in menu.classes() {
        let entry = item.entry();
        out.push_str(&format!(
            "<a href=\"{}#{}\" id=\"{}\" class=\"{}\"><i class=\"fa {} fa-fw\"></i> {}</a>\n",
            page_query(lang, item, &open),
            entry.anchor,
            entry.id,
            class,
            entry.icon,
            ctx.translate(entry.title_key)
        ));
    }

    out.push_str("</nav>\n");
    out
}

fn render_language_links(ctx: &PageContext, menu: &NavMenu, snippets: &[SnippetBlock]) -> String {
    let open = open_ids(snippets);
    let links: Vec<String> = LanguageRegistry::get()
        .list_enabled()
        .into_iter()
        .map(|config| {
            if config.code == ctx.language().code() {
                format!("<b>{}</b>", config.native_name)
            } else {
                format!(
                    "<a href=\"{}\">{}</a>",
                    page_query(config.code, menu.selected(), &open),
                    config.native_name
                )
            }
        })
        .collect();

    format!("<p class=\"w3-right-align\">{}</p>\n", links.join(" | "))
}

fn render_news(ctx: &PageContext) -> String {
    // Newest first
    (1..=NEWS_ITEMS)
        .rev()
        .map(|n| {
            format!(
                "<div class=\"w3-panel w3-white\">\n<h3>{}</h3>\n<p class=\"w3-opacity\">{}</p>\n<p>{}</p>\n</div>\n",
                ctx.translate(&format!("news_{}_title", n)),
                ctx.translate(&format!("news_{}_date", n)),
                ctx.translate(&format!("news_{}_text", n))
            )
        })
        .collect()
}

fn render_ide(ctx: &PageContext) -> String {
    format!(
        "{}{}",
        paragraphs(ctx, &["ide_intro", "ide_1"]),
        list(
            ctx,
            &["ide_2", "ide_3", "ide_4", "ide_5", "ide_6", "ide_7", "ide_8", "ide_9"]
        )
    )
}

fn render_examples(ctx: &PageContext) -> String {
    format!(
        "{}{}",
        paragraphs(ctx, &["ex_intro"]),
        list(ctx, &["ex_1", "ex_2", "ex_3", "ex_4", "ex_5", "ex_6", "ex_7"])
    )
}

fn render_snippets(ctx: &PageContext, menu: &NavMenu, snippets: &[SnippetBlock]) -> String {
    let lang = ctx.language().code();
    let open = open_ids(snippets);

    snippets
        .iter()
        .map(|block| {
            let view = block.view();
            let id = block.content_id();

            // The button links to the page with this snippet flipped
            let toggled: Vec<&str> = if block.state.is_visible() {
                open.iter().copied().filter(|o| *o != id).collect()
            } else {
                open.iter().copied().chain(std::iter::once(id)).collect()
            };
            let href = format!(
                "{}#{}",
                page_query(lang, menu.selected(), &toggled),
                NavItem::Snippets.anchor()
            );

            format!(
                "<div class=\"w3-panel w3-white\">\n\
<h3>{title} <a href=\"{href}\" class=\"w3-button\"><i id=\"{control}\" class=\"{icon}\"></i></a></h3>\n\
<div id=\"{id}\" style=\"display:{display}\">\n\
<p>{code_label}</p>\n<pre class=\"w3-code\">{code}</pre>\n\
<p>{result_label}</p>\n<img src=\"{image}\" alt=\"{id}\">\n\
</div>\n</div>\n",
                title = ctx.translate(block.def.title_key),
                href = href,
                control = block.control_id(),
                icon = view.icon_class,
                id = id,
                display = view.display,
                code_label = ctx.translate("snip_code"),
                code = escape_html(block.def.code),
                result_label = ctx.translate("snip_result"),
                image = block.def.result_image,
            )
        })
        .collect()
}

fn paragraphs(ctx: &PageContext, keys: &[&str]) -> String {
    keys.iter()
        .map(|key| format!("<p>{}</p>\n", ctx.translate(key)))
        .collect()
}

fn list(ctx: &PageContext, keys: &[&str]) -> String {
    let items: String = keys
        .iter()
        .map(|key| format!("<li>{}</li>\n", ctx.translate(key)))
        .collect();
    format!("<ul>\n{}</ul>\n", items)
}

/// Escape text for use inside HTML element content
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
