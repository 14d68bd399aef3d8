//! Insertion-ordered selection set keyed by composite identifier.

use crate::entry::{RecommendationSnapshot, SelectionEntry};
use indexmap::IndexMap;
use mt_common::RecommendationId;
use serde::{Serialize, Serializer};

/// What a toggle did to the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    /// The identifier was appended at the end.
    Inserted,
    /// The identifier was already a member; its snapshot was kept as is.
    AlreadySelected,
    /// The identifier was removed.
    Removed,
    /// The identifier was not a member; nothing to remove.
    NotSelected,
}

impl ToggleOutcome {
    /// Whether membership changed.
    pub fn changed(&self) -> bool {
        matches!(self, ToggleOutcome::Inserted | ToggleOutcome::Removed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleOutcome::Inserted => "inserted",
            ToggleOutcome::AlreadySelected => "already_selected",
            ToggleOutcome::Removed => "removed",
            ToggleOutcome::NotSelected => "not_selected",
        }
    }
}

impl std::fmt::Display for ToggleOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The recommendations chosen in one working session.
///
/// Set semantics over [`RecommendationId`], iteration in insertion order
/// (oldest first). A removed identifier that is selected again goes to the
/// end of the order, not back to its old position.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    entries: IndexMap<RecommendationId, SelectionEntry>,
}

impl SelectionSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select or deselect `id`.
    ///
    /// Selecting a member is a no-op that keeps the existing snapshot.
    /// Deselecting a non-member is a no-op.
    pub fn toggle(
        &mut self,
        id: RecommendationId,
        selected: bool,
        snapshot: RecommendationSnapshot,
    ) -> ToggleOutcome {
        if selected {
            self.insert(id, snapshot)
        } else {
            self.remove(&id)
        }
    }

    /// Append `id` unless it is already a member.
    pub fn insert(&mut self, id: RecommendationId, snapshot: RecommendationSnapshot) -> ToggleOutcome {
        if self.entries.contains_key(&id) {
            return ToggleOutcome::AlreadySelected;
        }
        self.entries.insert(id, SelectionEntry::new(id, snapshot));
        ToggleOutcome::Inserted
    }

    /// Remove `id`, keeping the relative order of the remaining entries.
    pub fn remove(&mut self, id: &RecommendationId) -> ToggleOutcome {
        match self.entries.shift_remove(id) {
            Some(_) => ToggleOutcome::Removed,
            None => ToggleOutcome::NotSelected,
        }
    }

    pub fn contains(&self, id: &RecommendationId) -> bool {
        self.entries.contains_key(id)
    }

    /// Entries in insertion order, oldest first.
    pub fn list(&self) -> impl ExactSizeIterator<Item = &SelectionEntry> + '_ {
        self.entries.values()
    }

    /// Owned copy of the entries in insertion order.
    pub fn entries(&self) -> Vec<SelectionEntry> {
        self.entries.values().cloned().collect()
    }

    /// Identifiers in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &RecommendationId> + '_ {
        self.entries.keys()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SelectionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mt_common::CategoryKey;

    fn snapshot(choice: &str) -> RecommendationSnapshot {
        RecommendationSnapshot {
            category_title: "NOUN Complete Analysis (NN, NNP, NNS)".to_string(),
            upos: "NOUN".to_string(),
            xpos_tags: vec!["NN".to_string()],
            context: "ctx".to_string(),
            question: "q?".to_string(),
            choice: choice.to_string(),
            xpos: "NN".to_string(),
            feats: "Number=Sing".to_string(),
            condition: "when".to_string(),
            examples: vec![],
            rule: "NN: Number=Sing".to_string(),
            decision_factors: vec![],
        }
    }

    fn id(rec: usize) -> RecommendationId {
        RecommendationId::new(CategoryKey::Noun, 0, rec)
    }

    fn order(set: &SelectionSet) -> Vec<usize> {
        set.ids().map(|id| id.recommendation).collect()
    }

    #[test]
    fn test_new_set_is_empty() {
        let set = SelectionSet::new();
        assert!(set.is_empty());
        assert_eq!(set.count(), 0);
        assert_eq!(set.list().count(), 0);
    }

    #[test]
    fn test_select_twice_keeps_first_snapshot() {
        let mut set = SelectionSet::new();
        assert_eq!(set.toggle(id(0), true, snapshot("first")), ToggleOutcome::Inserted);
        assert_eq!(
            set.toggle(id(0), true, snapshot("second")),
            ToggleOutcome::AlreadySelected
        );
        assert_eq!(set.count(), 1);
        assert_eq!(set.entries()[0].snapshot.choice, "first");
    }

    #[test]
    fn test_deselect_absent_is_noop() {
        let mut set = SelectionSet::new();
        set.toggle(id(0), true, snapshot("a"));
        assert_eq!(set.toggle(id(1), false, snapshot("b")), ToggleOutcome::NotSelected);
        assert_eq!(order(&set), vec![0]);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut set = SelectionSet::new();
        for rec in 0..4 {
            set.toggle(id(rec), true, snapshot("x"));
        }
        assert_eq!(set.remove(&id(1)), ToggleOutcome::Removed);
        assert_eq!(order(&set), vec![0, 2, 3]);
    }

    #[test]
    fn test_reselect_moves_to_end() {
        let mut set = SelectionSet::new();
        set.toggle(id(0), true, snapshot("a"));
        set.toggle(id(1), true, snapshot("b"));
        set.toggle(id(2), true, snapshot("c"));

        set.toggle(id(0), false, snapshot("a"));
        set.toggle(id(0), true, snapshot("a"));

        assert_eq!(order(&set), vec![1, 2, 0]);
    }

    #[test]
    fn test_clear() {
        let mut set = SelectionSet::new();
        set.toggle(id(0), true, snapshot("a"));
        set.toggle(id(1), true, snapshot("b"));
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(&id(0)));
    }

    #[test]
    fn test_outcome_changed() {
        assert!(ToggleOutcome::Inserted.changed());
        assert!(ToggleOutcome::Removed.changed());
        assert!(!ToggleOutcome::AlreadySelected.changed());
        assert!(!ToggleOutcome::NotSelected.changed());
    }
}
