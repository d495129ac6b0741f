use proptest::prelude::*;
use sentrunc::{truncate_html, truncate_plain};

#[derive(Clone, Debug)]
enum Node {
    Text(String),
    Element(&'static str, Vec<Node>),
}

fn render(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text),
        Node::Element(tag, children) => {
            out.push('<');
            out.push_str(tag);
            out.push('>');
            for child in children {
                render(child, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

fn node() -> impl Strategy<Value = Node> {
    let leaf = "[A-Za-z]{1,6}( [a-z0-9]{1,4}(\\.[0-9])?){0,3}[.!?\n]? ?".prop_map(Node::Text);
    leaf.prop_recursive(4, 32, 4, |inner| {
        (
            prop::sample::select(vec!["div", "p", "span", "li", "em"]),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(tag, children)| Node::Element(tag, children))
    })
}

fn fragment() -> impl Strategy<Value = String> {
    prop::collection::vec(node(), 1..4).prop_map(|nodes| {
        let mut out = String::new();
        for node in &nodes {
            render(node, &mut out);
        }
        out
    })
}

/// Every close tag matches the innermost open tag and nothing is left open.
fn is_balanced(html: &str) -> bool {
    let mut open: Vec<&str> = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        let Some(len) = rest[start..].find('>') else {
            return false;
        };
        let tag = &rest[start + 1..start + len];
        match tag.strip_prefix('/') {
            Some(name) => {
                if open.pop() != Some(name) {
                    return false;
                }
            }
            None => open.push(tag),
        }
        rest = &rest[start + len + 1..];
    }
    open.is_empty()
}

proptest! {
    #[test]
    fn non_positive_budget_is_empty(doc in fragment(), n in i64::MIN..=0) {
        prop_assert_eq!(truncate_html(&doc, n), "");
        prop_assert_eq!(truncate_plain(&doc, n), "");
    }

    #[test]
    fn full_budget_returns_input(doc in fragment()) {
        let budget = doc.len() as i64 + 1;
        prop_assert_eq!(truncate_html(&doc, budget), doc);
    }

    #[test]
    fn truncation_is_idempotent(doc in fragment(), n in 1i64..8, extra in 0i64..4) {
        let once = truncate_html(&doc, n);
        prop_assert_eq!(truncate_html(&once, n + extra), once.clone());
    }

    #[test]
    fn output_is_balanced(doc in fragment(), n in 1i64..8) {
        prop_assert!(is_balanced(&doc));
        let out = truncate_html(&doc, n);
        prop_assert!(is_balanced(&out), "unbalanced output: {}", out);
    }
}
