use std::sync::atomic::{AtomicUsize, Ordering};

// Single static counter for all interactive elements
static NEXT_ELEMENT_ID: AtomicUsize = AtomicUsize::new(1);

/// Identifies an interactive element registered with a dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    pub fn get(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.get())
    }
}

pub fn generate_id() -> ElementId {
    ElementId(NEXT_ELEMENT_ID.fetch_add(1, Ordering::SeqCst))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn test_display_shows_raw_value() {
        let id = generate_id();
        assert_eq!(id.to_string(), format!("#{}", id.get()));
        assert!(id.get() >= 1);
    }
}
