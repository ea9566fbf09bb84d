//! Result presentation: hop sequence → human-readable lines.

use degrees_core::{Path, PersonId};
use degrees_store::MembershipGraph;

fn person_name<'a>(graph: &'a MembershipGraph, id: &PersonId) -> &'a str {
    graph.person(id).map(|p| p.name.as_str()).unwrap_or("<unknown>")
}

/// Format a found path the way the interactive session prints it:
/// a degree count followed by one `i: X and Y starred in Z` line per hop.
pub fn render_path(graph: &MembershipGraph, source: &PersonId, path: &Path) -> Vec<String> {
    let mut lines = Vec::with_capacity(path.len() + 1);
    lines.push(format!("{} degrees of separation.", path.len()));

    let mut previous = source;
    for (i, hop) in path.hops().iter().enumerate() {
        let title = graph
            .movie(&hop.movie)
            .map(|m| m.title.as_str())
            .unwrap_or("<unknown>");
        lines.push(format!(
            "{}: {} and {} starred in {}",
            i + 1,
            person_name(graph, previous),
            person_name(graph, &hop.person),
            title,
        ));
        previous = &hop.person;
    }

    lines
}
