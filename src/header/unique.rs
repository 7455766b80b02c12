use std::collections::HashMap;

/// Describes names that were changed while making column names unique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UniquifyWarning {
    /// Empty names replaced by `Column N` placeholders
    PlaceholderNames { count: usize, first_renamed: String },
    /// Duplicate names given a numeric suffix
    NumberedNames {
        count: usize,
        first_original: String,
        first_renamed: String,
    },
}

/// Tracks every name claimed so far and the next suffix for each of them.
#[derive(Default)]
struct NameRegistry {
    counts: HashMap<String, usize>,
}

impl NameRegistry {
    /// Claims `ideal` if it is free, otherwise the first free `ideal_N`, `ideal_N_M`, ...
    /// where each suffix is the number of earlier claims of its base name.
    fn claim(&mut self, ideal: &str) -> String {
        let mut name = ideal.to_owned();
        loop {
            if let Some(count) = self.counts.get_mut(&name) {
                let suffix = *count;
                *count += 1;
                name = format!("{name}_{suffix}");
                continue;
            }
            self.counts.insert(name.to_owned(), 1);
            return name;
        }
    }
}

/// Turns candidate column names into unique, non-empty names.
///
/// Non-empty names are claimed left to right first. Empty names are then
/// replaced, left to right, by `Column N` (N is the 1-based position) and
/// claimed the same way, so a placeholder never collides with any other name
/// in the result.
pub fn make_unique<S: AsRef<str>>(names: &[S]) -> (Vec<String>, Vec<UniquifyWarning>) {
    let mut registry = NameRegistry::default();
    let mut numbered: Option<UniquifyWarning> = None;
    let mut placeholders: Option<UniquifyWarning> = None;

    let mut unique: Vec<Option<String>> = names
        .iter()
        .map(|name| {
            let ideal = name.as_ref();
            if ideal.is_empty() {
                return None;
            }
            let name = registry.claim(ideal);
            if name != ideal {
                match &mut numbered {
                    Some(UniquifyWarning::NumberedNames { count, .. }) => *count += 1,
                    _ => {
                        numbered = Some(UniquifyWarning::NumberedNames {
                            count: 1,
                            first_original: ideal.to_owned(),
                            first_renamed: name.to_owned(),
                        })
                    }
                }
            }
            Some(name)
        })
        .collect();

    for (index, slot) in unique.iter_mut().enumerate() {
        if slot.is_none() {
            let name = registry.claim(&format!("Column {}", index + 1));
            match &mut placeholders {
                Some(UniquifyWarning::PlaceholderNames { count, .. }) => *count += 1,
                _ => {
                    placeholders = Some(UniquifyWarning::PlaceholderNames {
                        count: 1,
                        first_renamed: name.to_owned(),
                    })
                }
            }
            *slot = Some(name);
        }
    }

    let names = unique.into_iter().flatten().collect();
    let warnings = placeholders.into_iter().chain(numbered).collect();
    (names, warnings)
}
