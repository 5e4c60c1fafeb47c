//! Truth-derived class sets and per-class support.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use mlmetrics_core::Label;

/// The distinct labels of a ground-truth sequence with their supports.
///
/// Classes are kept in order of first appearance in `y_true`, so iteration
/// (and therefore floating-point summation) is deterministic. Labels that
/// only occur in predictions are never members.
#[derive(Debug, Clone)]
pub struct ClassSet<'a, T> {
    index: HashMap<&'a T, usize>,
    classes: Vec<&'a T>,
    support: Vec<usize>,
}

impl<'a, T: Label> ClassSet<'a, T> {
    /// Collect the classes of `y_true` in one pass.
    pub fn from_truth(y_true: &'a [T]) -> Self {
        let mut index: HashMap<&'a T, usize> = HashMap::new();
        let mut classes = Vec::new();
        let mut support = Vec::new();

        for label in y_true {
            match index.entry(label) {
                Entry::Occupied(slot) => support[*slot.get()] += 1,
                Entry::Vacant(slot) => {
                    slot.insert(classes.len());
                    classes.push(label);
                    support.push(1);
                }
            }
        }

        Self {
            index,
            classes,
            support,
        }
    }

    /// Number of distinct classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the truth sequence was empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Ground-truth count of `label`, 0 for labels outside the set.
    pub fn support_of(&self, label: &T) -> usize {
        self.index.get(label).map_or(0, |&i| self.support[i])
    }

    /// Sum of all supports; equals the length of `y_true`.
    pub fn total_support(&self) -> usize {
        self.support.iter().sum()
    }

    /// `(class, support)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a T, usize)> + '_ {
        self.classes.iter().copied().zip(self.support.iter().copied())
    }
}
