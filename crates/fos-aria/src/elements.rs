//! HTML Elements
//!
//! Known DOM element names and the implicit roles HTML gives them.

use fos_markup::{read_named, Attribute, AttributeReadResult, Literal};

/// Attribute requirement on an implicit-role entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeConstraint {
    pub name: &'static str,
    pub value: ConstraintValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintValue {
    /// Any literal other than `undefined`
    Present,
    /// Literal equal to this string, ignoring case
    Equals(&'static str),
}

impl AttributeConstraint {
    /// Unknown values never satisfy a constraint
    pub fn matches(&self, attributes: &[Attribute]) -> bool {
        let value = read_named(attributes, self.name);
        match self.value {
            ConstraintValue::Present => {
                matches!(value, AttributeReadResult::Literal(ref lit) if *lit != Literal::Undefined)
            }
            ConstraintValue::Equals(expected) => value.equals_ignore_case(expected),
        }
    }
}

/// One tag → implicit role(s) mapping entry
#[derive(Debug, Clone, Copy)]
pub struct ElementRoleEntry {
    pub tag: &'static str,
    pub constraints: &'static [AttributeConstraint],
    pub roles: &'static [&'static str],
}

impl ElementRoleEntry {
    pub fn matches(&self, attributes: &[Attribute]) -> bool {
        self.constraints.iter().all(|c| c.matches(attributes))
    }
}

const fn plain(tag: &'static str, roles: &'static [&'static str]) -> ElementRoleEntry {
    ElementRoleEntry { tag, constraints: &[], roles }
}

const fn when(
    tag: &'static str,
    constraints: &'static [AttributeConstraint],
    roles: &'static [&'static str],
) -> ElementRoleEntry {
    ElementRoleEntry { tag, constraints, roles }
}

const HAS_HREF: &[AttributeConstraint] = &[AttributeConstraint { name: "href", value: ConstraintValue::Present }];

macro_rules! typed {
    ($value:literal) => {
        &[AttributeConstraint { name: "type", value: ConstraintValue::Equals($value) }]
    };
}

/// Implicit roles of HTML elements
pub static ELEMENT_ROLES: &[ElementRoleEntry] = &[
    when("a", HAS_HREF, &["link"]),
    when("area", HAS_HREF, &["link"]),
    when("link", HAS_HREF, &["link"]),
    plain("article", &["article"]),
    plain("body", &["document"]),
    plain("button", &["button"]),
    plain("datalist", &["listbox"]),
    plain("dd", &["definition"]),
    plain("details", &["group"]),
    plain("dialog", &["dialog"]),
    plain("dt", &["term"]),
    plain("fieldset", &["group"]),
    plain("figure", &["figure"]),
    plain("form", &["form"]),
    plain("h1", &["heading"]),
    plain("h2", &["heading"]),
    plain("h3", &["heading"]),
    plain("h4", &["heading"]),
    plain("h5", &["heading"]),
    plain("h6", &["heading"]),
    plain("hr", &["separator"]),
    when("img", &[AttributeConstraint { name: "alt", value: ConstraintValue::Equals("") }], &["presentation"]),
    plain("img", &["img"]),
    when("input", typed!("button"), &["button"]),
    when("input", typed!("image"), &["button"]),
    when("input", typed!("reset"), &["button"]),
    when("input", typed!("submit"), &["button"]),
    when("input", typed!("checkbox"), &["checkbox"]),
    when("input", typed!("radio"), &["radio"]),
    when("input", typed!("range"), &["slider"]),
    when("input", typed!("number"), &["spinbutton"]),
    when("input", typed!("search"), &["searchbox"]),
    when("input", typed!("email"), &["textbox"]),
    when("input", typed!("tel"), &["textbox"]),
    when("input", typed!("text"), &["textbox"]),
    when("input", typed!("url"), &["textbox"]),
    plain("input", &["textbox"]),
    plain("li", &["listitem"]),
    plain("main", &["main"]),
    plain("math", &["math"]),
    when("menu", typed!("toolbar"), &["toolbar"]),
    when("menuitem", typed!("command"), &["menuitem"]),
    when("menuitem", typed!("checkbox"), &["menuitemcheckbox"]),
    when("menuitem", typed!("radio"), &["menuitemradio"]),
    plain("nav", &["navigation"]),
    plain("ol", &["list"]),
    plain("option", &["option"]),
    plain("progress", &["progressbar"]),
    plain("section", &["region"]),
    plain("select", &["combobox", "listbox"]),
    plain("table", &["table"]),
    plain("tbody", &["rowgroup"]),
    plain("td", &["cell"]),
    plain("textarea", &["textbox"]),
    plain("tfoot", &["rowgroup"]),
    plain("th", &["columnheader"]),
    plain("thead", &["rowgroup"]),
    plain("tr", &["row"]),
    plain("ul", &["list"]),
];

/// Every DOM element name the analysis knows about
pub static DOM_ELEMENTS: &[&str] = &[
    "a", "abbr", "acronym", "address", "applet", "area", "article", "aside", "audio",
    "b", "base", "bdi", "bdo", "big", "blink", "blockquote", "body", "br", "button",
    "canvas", "caption", "center", "cite", "code", "col", "colgroup", "content",
    "data", "datalist", "dd", "del", "details", "dfn", "dialog", "dir", "div", "dl", "dt",
    "em", "embed", "fieldset", "figcaption", "figure", "font", "footer", "form", "frame", "frameset",
    "h1", "h2", "h3", "h4", "h5", "h6", "head", "header", "hgroup", "hr", "html",
    "i", "iframe", "img", "input", "ins", "kbd", "keygen", "label", "legend", "li", "link",
    "main", "map", "mark", "marquee", "menu", "menuitem", "meta", "meter",
    "nav", "noembed", "noscript", "object", "ol", "optgroup", "option", "output",
    "p", "param", "picture", "pre", "progress", "q", "rp", "rt", "rtc", "ruby",
    "s", "samp", "script", "section", "select", "small", "source", "spacer", "span",
    "strike", "strong", "style", "sub", "summary", "sup",
    "table", "tbody", "td", "textarea", "tfoot", "th", "thead", "time", "title", "tr", "track", "tt",
    "u", "ul", "var", "video", "wbr", "xmp",
];

/// Known DOM element, ignoring case. Custom components are not.
pub fn is_dom_element(tag: &str) -> bool {
    DOM_ELEMENTS.iter().any(|known| known.eq_ignore_ascii_case(tag))
}
