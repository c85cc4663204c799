//! One-time binding of fetched fragment markup.
//!
//! The header is parsed once per load into a [`HeaderBindings`] value holding
//! typed handles for its nav links and language options. Rendering for a given
//! path and language works from that value; nothing is re-queried per event.

use std::cell::RefCell;
use std::rc::Rc;

use html5ever::interface::{Attribute, QualName};
use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::{local_name, namespace_url, ns, parse_fragment, LocalName, ParseOpts};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};

use crate::i18n::{t, Lang};
use crate::nav;

const NAV_LINK_CLASS: &str = "nav-link";
const ACTIVE_CLASS: &str = "active";
const LANGUAGE_SELECTOR_CLASS: &str = "language-selector";
const LANGUAGE_OPTION_CLASS: &str = "language-option";
/// Stamped on each bound nav link in the template; indexes `nav_links`.
const NAV_INDEX_ATTR: &str = "data-nav-index";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: String,
    pub label: String,
}

/// Typed handle set for a loaded header fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBindings {
    pub nav_links: Vec<NavLink>,
    pub language_options: Vec<LanguageOption>,
    /// Header markup with the language selector subtree removed; the selector
    /// is rendered natively from `language_options`.
    template: String,
}

impl HeaderBindings {
    /// Parse `markup` and collect nav links and language options.
    pub fn bind(markup: &str) -> Self {
        let dom = parse(markup);
        let Some(root) = fragment_root(&dom) else {
            return Self {
                nav_links: Vec::new(),
                language_options: Vec::new(),
                template: String::new(),
            };
        };

        let mut language_options = Vec::new();
        walk(&root, &mut |node| {
            if has_class(node, LANGUAGE_OPTION_CLASS) {
                if let Some(code) = get_node_attr(node, "data-lang") {
                    language_options.push(LanguageOption {
                        code: code.trim().to_string(),
                        label: text_content(node).trim().to_string(),
                    });
                }
            }
        });

        // Links inside the selector are not navigation.
        remove_where(&root, &|node| has_class(node, LANGUAGE_SELECTOR_CLASS));

        let mut nav_links = Vec::new();
        walk(&root, &mut |node| {
            if get_node_name(node) == Some("a") && has_class(node, NAV_LINK_CLASS) {
                set_node_attr(node, NAV_INDEX_ATTR, &nav_links.len().to_string());
                nav_links.push(NavLink {
                    href: get_node_attr(node, "href").unwrap_or_default(),
                    label: text_content(node).trim().to_string(),
                });
            }
        });

        Self {
            nav_links,
            language_options,
            template: serialize_children(&root),
        }
    }

    /// Header markup with the active link marked and `data-i18n` text applied.
    pub fn render(&self, current_path: &str, lang: Lang) -> String {
        let active = nav::active_indices(
            current_path,
            self.nav_links.iter().map(|link| link.href.as_str()),
        );

        let dom = parse(&self.template);
        let Some(root) = fragment_root(&dom) else {
            return String::new();
        };

        walk(&root, &mut |node| {
            let index = get_node_attr(node, NAV_INDEX_ATTR).and_then(|i| i.parse::<usize>().ok());
            if index.is_some_and(|i| active.contains(&i)) {
                add_class(node, ACTIVE_CLASS);
                set_node_attr(node, "aria-current", "page");
            }
        });
        apply_i18n(&root, lang);

        serialize_children(&root)
    }

    pub fn active_link(&self, current_path: &str) -> Option<&NavLink> {
        nav::active_indices(
            current_path,
            self.nav_links.iter().map(|link| link.href.as_str()),
        )
        .first()
        .and_then(|i| self.nav_links.get(*i))
    }
}

/// Apply the `data-i18n` pass to arbitrary fragment markup (used for the footer).
pub fn localize(markup: &str, lang: Lang) -> String {
    let dom = parse(markup);
    let Some(root) = fragment_root(&dom) else {
        return String::new();
    };
    apply_i18n(&root, lang);
    serialize_children(&root)
}

fn apply_i18n(root: &Handle, lang: Lang) {
    walk(root, &mut |node| {
        if let Some(key) = get_node_attr(node, "data-i18n") {
            let value = t(lang, key.trim());
            // Unknown keys keep the fragment's own text.
            if value != key.trim() {
                set_text(node, &value);
            }
        }
    });
}

fn parse(markup: &str) -> RcDom {
    parse_fragment(
        RcDom::default(),
        ParseOpts::default(),
        QualName::new(None, ns!(html), local_name!("body")),
        vec![],
    )
    .one(markup)
}

/// `parse_fragment` wraps the content in a synthetic `<html>` element.
fn fragment_root(dom: &RcDom) -> Option<Handle> {
    dom.document.children.borrow().first().cloned()
}

fn serialize_children(root: &Handle) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let handle: SerializableHandle = root.clone().into();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };
    if serialize(&mut buf, &handle, opts).is_err() {
        return String::new();
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn walk(node: &Handle, visit: &mut impl FnMut(&Handle)) {
    visit(node);
    let children: Vec<Handle> = node.children.borrow().clone();
    for child in children.iter() {
        walk(child, visit);
    }
}

fn remove_where(node: &Handle, pred: &impl Fn(&Handle) -> bool) {
    node.children.borrow_mut().retain(|child| !pred(child));
    let children: Vec<Handle> = node.children.borrow().clone();
    for child in children.iter() {
        remove_where(child, pred);
    }
}

fn get_node_name(node: &Handle) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == attr_name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

fn set_node_attr(node: &Handle, attr_name: &str, value: &str) {
    if let NodeData::Element { attrs, .. } = &node.data {
        let mut attrs = attrs.borrow_mut();
        match attrs.iter_mut().find(|attr| &*attr.name.local == attr_name) {
            Some(attr) => attr.value = StrTendril::from(value),
            None => attrs.push(Attribute {
                name: QualName::new(None, ns!(), LocalName::from(attr_name)),
                value: StrTendril::from(value),
            }),
        }
    }
}

fn has_class(node: &Handle, class: &str) -> bool {
    get_node_attr(node, "class")
        .map(|classes| classes.split_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

fn add_class(node: &Handle, class: &str) {
    if has_class(node, class) {
        return;
    }
    let classes = match get_node_attr(node, "class") {
        Some(existing) if !existing.trim().is_empty() => format!("{} {class}", existing.trim()),
        _ => class.to_string(),
    };
    set_node_attr(node, "class", &classes);
}

fn text_content(node: &Handle) -> String {
    let mut out = String::new();
    walk(node, &mut |n| {
        if let NodeData::Text { contents } = &n.data {
            out.push_str(&contents.borrow());
        }
    });
    out
}

fn set_text(node: &Handle, text: &str) {
    let text_node = Node::new(NodeData::Text {
        contents: RefCell::new(StrTendril::from(text)),
    });
    text_node.parent.set(Some(Rc::downgrade(node)));

    let mut children = node.children.borrow_mut();
    for child in children.iter() {
        child.parent.set(None);
    }
    children.clear();
    children.push(text_node);
}
