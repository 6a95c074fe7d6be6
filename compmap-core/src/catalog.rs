//! Grid of main components: filtering and card data.

use serde::Serialize;

use crate::custom::CustomSet;
use crate::index::RelationIndex;

/// One card in the main-component grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCard<'a> {
    pub name: &'a str,
    pub sub_count: usize,
    pub custom: bool,
    pub selected: bool,
}

/// Case-insensitive substring filter. Order is preserved; an empty query
/// keeps everything. Whitespace in the query is matched literally.
pub fn filter_mains<'a>(mains: &[&'a str], query: &str) -> Vec<&'a str> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return mains.to_vec();
    }
    mains
        .iter()
        .copied()
        .filter(|m| m.to_lowercase().contains(&needle))
        .collect()
}

/// Cards for every main matching `query`, in collation order.
pub fn grid_cards<'a>(
    index: &'a RelationIndex,
    customs: &CustomSet,
    query: &str,
    selected_main: Option<&str>,
) -> Vec<GridCard<'a>> {
    filter_mains(&index.main_names(), query)
        .into_iter()
        .map(|name| GridCard {
            name,
            sub_count: index.subs_of(name).len(),
            custom: customs.contains(name),
            selected: selected_main == Some(name),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::SourceMapping;

    fn index() -> RelationIndex {
        let mut source = SourceMapping::new();
        source.insert("Button".into(), vec!["Label".into(), "Icon".into()]);
        source.insert("ToggleButton".into(), vec!["Label".into()]);
        source.insert("Link".into(), vec![]);
        RelationIndex::build(&source)
    }

    #[test]
    fn filter_is_case_insensitive() {
        let mains = vec!["Button", "Link", "ToggleButton"];
        assert_eq!(filter_mains(&mains, "button"), vec!["Button", "ToggleButton"]);
        assert_eq!(filter_mains(&mains, "LIN"), vec!["Link"]);
        assert_eq!(filter_mains(&mains, ""), mains);
        assert!(filter_mains(&mains, "zzz").is_empty());
    }

    #[test]
    fn whitespace_is_part_of_the_query() {
        let mains = vec!["Button", "List Box", "ListBox"];
        assert_eq!(filter_mains(&mains, " box"), vec!["List Box"]);
        assert_eq!(filter_mains(&mains, " "), vec!["List Box"]);
        assert!(filter_mains(&mains, "button ").is_empty());
    }

    #[test]
    fn cards_carry_counts_and_flags() {
        let index = index();
        let customs: CustomSet = ["Link"].into_iter().collect();
        let cards = grid_cards(&index, &customs, "", Some("Button"));

        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].name, "Button");
        assert_eq!(cards[0].sub_count, 2);
        assert!(cards[0].selected);
        assert!(!cards[0].custom);

        let link = cards.iter().find(|c| c.name == "Link").unwrap();
        assert!(link.custom);
        assert_eq!(link.sub_count, 0);
        assert!(!link.selected);
    }
}
