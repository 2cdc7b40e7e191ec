use crate::attributes::{Dimension, PageFilters};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::graph::Graph;
use crate::model::Page;
use crate::selector::{filter_pages, sort_by_display_name, EmptySelection};

/// List every page that passes `filters`, sorted by display name.
pub fn run<G: Graph + ?Sized>(graph: &G, filters: &PageFilters) -> Result<CmdResult> {
    let pages = graph.all_pages()?;
    let mut result = CmdResult::default();

    if pages.is_empty() {
        result.add_message(CmdMessage::warning(EmptySelection::NoPages.to_string()));
        return Ok(result);
    }

    let mut matching = filter_pages(&pages, filters);
    sort_by_display_name(&mut matching);

    result.add_message(CmdMessage::info(format!(
        "{} of {} pages match ({})",
        matching.len(),
        pages.len(),
        dimension_counts(&pages)
    )));
    if matching.is_empty() {
        result.add_message(CmdMessage::warning(
            EmptySelection::NoneAfterFiltering.to_string(),
        ));
    }

    Ok(result.with_listed_pages(matching.into_iter().cloned().collect()))
}

/// `journal: 2, dangling: 5, ...` over the whole population.
fn dimension_counts(pages: &[Page]) -> String {
    Dimension::ALL
        .iter()
        .map(|dim| {
            let n = pages.iter().filter(|page| dim.holds(page)).count();
            format!("{}: {}", dim, n)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::FilterMode;
    use crate::commands::MessageLevel;
    use crate::graph::MemGraph;
    use crate::model::{NamespaceRef, PageFile};
    use std::collections::BTreeMap;

    fn graph() -> MemGraph {
        let mut props = BTreeMap::new();
        props.insert("type".to_string(), serde_json::json!("book"));
        MemGraph::new(vec![
            Page::new("Zeta").with_file(PageFile::at("pages/Zeta.md")),
            Page::new("Projects/Alpha")
                .with_file(PageFile::at("pages/Projects___Alpha.md"))
                .with_namespace(NamespaceRef::named("projects")),
            Page::new("projects"),
            Page::new("Book").with_properties(props),
            Page::new("Jan 2nd, 2024")
                .with_journal(true)
                .with_file(PageFile::at("journals/2024_01_02.md")),
        ])
    }

    fn names(result: &CmdResult) -> Vec<&str> {
        result
            .listed_pages
            .iter()
            .map(|p| p.display_name())
            .collect()
    }

    #[test]
    fn lists_everything_sorted_without_filters() {
        let result = run(&graph(), &PageFilters::new()).unwrap();
        assert_eq!(
            names(&result),
            vec!["Book", "Jan 2nd, 2024", "projects", "Projects/Alpha", "Zeta"]
        );
        assert_eq!(
            result.messages[0].content,
            "5 of 5 pages match (journal: 1, dangling: 2, namespace: 1, properties: 1)"
        );
    }

    #[test]
    fn applies_filters() {
        let filters = PageFilters::new()
            .with(Dimension::Dangling, FilterMode::None)
            .with(Dimension::Journal, FilterMode::None);
        let result = run(&graph(), &filters).unwrap();
        assert_eq!(names(&result), vec!["Projects/Alpha", "Zeta"]);
        assert!(result.messages[0].content.starts_with("2 of 5"));
    }

    #[test]
    fn warns_when_nothing_matches() {
        let filters = PageFilters::new()
            .with(Dimension::Namespace, FilterMode::Only)
            .with(Dimension::Properties, FilterMode::Only);
        let result = run(&graph(), &filters).unwrap();
        assert!(result.listed_pages.is_empty());
        assert_eq!(result.messages[1].level, MessageLevel::Warning);
        assert_eq!(result.messages[1].content, "No pages found after filtering");
    }

    #[test]
    fn warns_on_empty_graph() {
        let result = run(&MemGraph::default(), &PageFilters::new()).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "No pages found");
    }
}
