/// The fixed vocabulary shown as selectable chips in the wizard. Custom
/// entries typed by the user are allowed on top of these.
pub const AVAILABLE_INTERESTS: [&str; 18] = [
    "Travel",
    "Photography",
    "Cooking",
    "Music",
    "Dancing",
    "Reading",
    "Fitness",
    "Movies",
    "Art",
    "Nature",
    "Yoga",
    "Gaming",
    "Writing",
    "Sports",
    "Technology",
    "Fashion",
    "Food",
    "Adventure",
];

/// An ordered set of interest names. Insertion order is kept for display;
/// duplicates are never stored.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InterestSet(Vec<String>);

impl InterestSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, interest: &str) -> bool {
        self.0.iter().any(|entry| entry == interest)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }

    /// Adds the interest if absent, removes it if present.
    pub fn toggle(&mut self, interest: &str) {
        match self.0.iter().position(|entry| entry == interest) {
            Some(pos) => {
                self.0.remove(pos);
            }
            None => self.0.push(interest.to_string()),
        }
    }

    /// Adds a free-form interest. Whitespace is trimmed, blank and duplicate
    /// entries are ignored. Returns whether anything was added.
    pub fn add_custom(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }

        self.0.push(trimmed.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut set = InterestSet::default();
        set.toggle("Travel");
        assert!(set.contains("Travel"));
        assert_eq!(set.len(), 1);

        set.toggle("Travel");
        assert!(!set.contains("Travel"));
        assert!(set.is_empty());
    }

    #[test]
    fn custom_entries_are_trimmed_and_deduplicated() {
        let mut set = InterestSet::default();
        assert!(set.add_custom("  Stargazing  "));
        assert!(set.contains("Stargazing"));

        assert!(!set.add_custom("Stargazing"));
        assert!(!set.add_custom("   "));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn insertion_order_is_kept() {
        let mut set = InterestSet::default();
        set.toggle("Music");
        set.toggle("Art");
        set.add_custom("Stargazing");

        let entries: Vec<&str> = set.iter().collect();
        assert_eq!(entries, vec!["Music", "Art", "Stargazing"]);
    }
}
