//! In-batch name registry for collision resolution.

use std::collections::HashSet;

/// Names already placed in the outputs of the current batch.
#[derive(Debug, Default, Clone)]
pub struct NameRegistry {
    claimed: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The name `candidate` would get: itself if free, else the first free
    /// `"{stem} (N){ext}"` with N = 1, 2, ….
    pub fn resolve(&self, candidate: &str) -> String {
        if !self.claimed.contains(candidate) {
            return candidate.to_string();
        }

        let (stem, ext) = split_extension(candidate);
        (1u32..)
            .map(|n| format!("{stem} ({n}){ext}"))
            .find(|name| !self.claimed.contains(name))
            .unwrap_or_else(|| candidate.to_string())
    }

    /// Resolve `candidate` and record the result as taken.
    pub fn claim(&mut self, candidate: &str) -> String {
        let name = self.resolve(candidate);
        self.claimed.insert(name.clone());
        name
    }

    pub fn contains(&self, name: &str) -> bool {
        self.claimed.contains(name)
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}

/// Split `"a.b.pdf"` into `("a.b", ".pdf")`; names without a dot have no extension.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}
