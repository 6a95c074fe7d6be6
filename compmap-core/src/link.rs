//! Doc link resolution — which canonical page a sub belongs to.

use serde::{Deserialize, Serialize};

use crate::index::RelationIndex;

pub const DEFAULT_DOC_BASE_URL: &str = "https://react-spectrum.adobe.com/react-aria/";
pub const DEFAULT_DOC_SUFFIX: &str = ".html";

/// Resolve the page key for `sub`, optionally in the context of the main
/// the user is browsing.
///
/// First match wins:
/// 1. `sub` has its own page (it is also a main) → `sub`
/// 2. `context_main` uses `sub` → `context_main`
/// 3. first main (collation order) using `sub`
/// 4. `context_main` if given, else `sub`
pub fn resolve<'a>(index: &'a RelationIndex, sub: &'a str, context_main: Option<&'a str>) -> &'a str {
    if index.is_main(sub) {
        return sub;
    }

    let users = index.mains_using(sub);
    if let Some(ctx) = context_main {
        if users.iter().any(|m| m == ctx) {
            return ctx;
        }
    }

    match users.first() {
        Some(first) => first.as_str(),
        None => context_main.unwrap_or(sub),
    }
}

/// Turns resolved page keys into navigable references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocLinks {
    pub base_url: String,
    pub suffix: String,
}

impl Default for DocLinks {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_DOC_BASE_URL.to_string(),
            suffix: DEFAULT_DOC_SUFFIX.to_string(),
        }
    }
}

impl DocLinks {
    pub fn new(base_url: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            suffix: suffix.into(),
        }
    }

    pub fn href(&self, key: &str) -> String {
        format!("{}{}{}", self.base_url, key, self.suffix)
    }

    /// Resolve and format in one step.
    pub fn href_for(&self, index: &RelationIndex, sub: &str, context_main: Option<&str>) -> String {
        self.href(resolve(index, sub, context_main))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::SourceMapping;

    fn sample() -> RelationIndex {
        let mut source = SourceMapping::new();
        source.insert("Button".into(), vec!["Label".into(), "Icon".into()]);
        source.insert("Link".into(), vec!["Label".into()]);
        RelationIndex::build(&source)
    }

    #[test]
    fn context_main_is_preferred() {
        let index = sample();
        assert_eq!(resolve(&index, "Label", Some("Link")), "Link");
    }

    #[test]
    fn falls_back_to_first_user() {
        let index = sample();
        assert_eq!(resolve(&index, "Label", None), "Button");
    }

    #[test]
    fn context_not_using_sub_is_ignored() {
        let index = sample();
        assert_eq!(resolve(&index, "Icon", Some("Link")), "Button");
    }

    #[test]
    fn own_page_wins_over_context() {
        let mut source = SourceMapping::new();
        source.insert("ComboBox".into(), vec!["ListBox".into()]);
        source.insert("ListBox".into(), vec!["ListBoxItem".into()]);
        let index = RelationIndex::build(&source);
        assert_eq!(resolve(&index, "ListBox", Some("ComboBox")), "ListBox");
    }

    #[test]
    fn orphan_sub_uses_context_then_itself() {
        let index = sample();
        assert_eq!(resolve(&index, "Ghost", Some("Button")), "Button");
        assert_eq!(resolve(&index, "Ghost", None), "Ghost");
    }

    #[test]
    fn first_user_follows_accent_aware_order() {
        let mut source = SourceMapping::new();
        for main in ["Zeta", "\u{c9}clair", "Fab"] {
            source.insert(main.into(), vec!["Shared".into()]);
        }
        let index = RelationIndex::build(&source);
        assert_eq!(resolve(&index, "Shared", None), "\u{c9}clair");
        assert_eq!(resolve(&index, "Shared", Some("Zeta")), "Zeta");
    }

    #[test]
    fn href_concatenates_base_key_suffix() {
        let links = DocLinks::default();
        assert_eq!(
            links.href_for(&sample(), "Label", Some("Link")),
            "https://react-spectrum.adobe.com/react-aria/Link.html"
        );
        assert_eq!(DocLinks::new("/docs/", "").href("Button"), "/docs/Button");
    }
}
