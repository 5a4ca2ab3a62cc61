//! The fixed set of mental-health categories the classifier predicts.
//!
//! The classifier artifact is trained against exactly these seven labels,
//! in this order. The index ↔ label mapping is a bijection; an index outside
//! `0..=6` coming back from the artifact is a contract violation on its side
//! and is surfaced as an inference error by the caller.

use std::fmt;

/// One of the seven categories the bundled classifier predicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Anxiety,
    Normal,
    Depression,
    Suicidal,
    Stress,
    Bipolar,
    PersonalityDisorder,
}

impl Category {
    /// All categories in class-index order. The position of each entry is
    /// its class index.
    pub const ALL: [Category; 7] = [
        Category::Anxiety,
        Category::Normal,
        Category::Depression,
        Category::Suicidal,
        Category::Stress,
        Category::Bipolar,
        Category::PersonalityDisorder,
    ];

    /// Maps a class index produced by the classifier to its category.
    /// Returns `None` for indices outside the trained label set.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The class index this category occupies in the model's output.
    pub const fn index(self) -> usize {
        match self {
            Category::Anxiety => 0,
            Category::Normal => 1,
            Category::Depression => 2,
            Category::Suicidal => 3,
            Category::Stress => 4,
            Category::Bipolar => 5,
            Category::PersonalityDisorder => 6,
        }
    }

    /// Human-readable label, exactly as served by the API.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Anxiety => "Anxiety",
            Category::Normal => "Normal",
            Category::Depression => "Depression",
            Category::Suicidal => "Suicidal",
            Category::Stress => "Stress",
            Category::Bipolar => "Bipolar",
            Category::PersonalityDisorder => "Personality disorder",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_label_mapping_is_a_bijection() {
        for (position, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), position);
            assert_eq!(Category::from_index(position), Some(*category));
        }
    }

    #[test]
    fn out_of_range_index_maps_to_none() {
        assert_eq!(Category::from_index(7), None);
        assert_eq!(Category::from_index(usize::MAX), None);
    }

    #[test]
    fn labels_match_the_trained_set() {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Anxiety",
                "Normal",
                "Depression",
                "Suicidal",
                "Stress",
                "Bipolar",
                "Personality disorder",
            ]
        );
    }
}
