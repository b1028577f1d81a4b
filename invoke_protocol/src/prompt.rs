use crate::PromptItem;

/// Flattens weighted terms into the string form the backend parses.
///
/// A lone term is stored bare; with several terms every one carries its
/// weight, e.g. `"a cat:1 a dog:0.5"`.
pub fn prompt_to_string(items: &[PromptItem]) -> String {
    if let [only] = items {
        return only.text.clone();
    }
    items
        .iter()
        .map(|item| format!("{}:{}", item.text, item.weight))
        .collect::<Vec<_>>()
        .join(" ")
}
