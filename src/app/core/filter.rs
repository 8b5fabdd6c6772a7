use crate::app::registry::PanelDescriptor;

/// Select the panels matched by a free-text query.
///
/// Case-insensitive substring match against either the title or the
/// description; an empty or whitespace-only query matches everything.
/// Registry order is preserved; results are never re-ranked. Pure and
/// cheap, so it is safe to re-run on every keystroke of the search
/// prompt.
pub fn visible_panels<'a>(registry: &'a [PanelDescriptor], query: &str) -> Vec<&'a PanelDescriptor> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return registry.iter().collect();
    }
    registry
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .collect()
}
