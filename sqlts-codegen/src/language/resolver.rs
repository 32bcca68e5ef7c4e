//! Per-query identifier de-duplication.

use std::collections::{HashMap, HashSet};

use super::NamingConvention;

/// Assigns unique identifiers to the columns (or parameters) of one query.
///
/// The first occurrence of a base name keeps it; the n-th occurrence becomes
/// `<base>_<n>`. A resolver must not be shared between queries.
#[derive(Debug, Default)]
pub struct NameResolver {
    counts: HashMap<String, usize>,
    taken: HashSet<String>,
}

impl NameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `base` to an identifier not yet handed out by this resolver.
    pub fn resolve(&mut self, base: &str) -> String {
        let mut n = {
            let count = self.counts.entry(base.to_string()).or_insert(0);
            *count += 1;
            *count
        };

        let mut candidate = if n == 1 {
            base.to_string()
        } else {
            format!("{}_{}", base, n)
        };
        // A declared name such as `id_2` may already occupy the suffixed form.
        while self.taken.contains(&candidate) {
            n += 1;
            candidate = format!("{}_{}", base, n);
        }

        self.counts.insert(base.to_string(), n);
        self.taken.insert(candidate.clone());
        candidate
    }
}

/// Resolve an ordered list of optional names into unique field identifiers.
///
/// Declared names go through the convention's field transform; missing names
/// fall back to `<fallback><index>` with a 0-based index.
pub fn resolve_names<'a>(
    naming: &NamingConvention,
    names: impl IntoIterator<Item = Option<&'a str>>,
    fallback: &str,
) -> Vec<String> {
    let mut resolver = NameResolver::new();
    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let base = match name {
                Some(name) => naming.field_name(name),
                None => format!("{}{}", fallback, i),
            };
            resolver.resolve(&base)
        })
        .collect()
}
