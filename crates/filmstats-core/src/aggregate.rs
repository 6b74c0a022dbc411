// Grouping and per-group aggregates.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Records sharing one key.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<K, R> {
    pub key: K,
    pub records: Vec<R>,
}

impl<K, R> Group<K, R> {
    pub fn count(&self) -> u64 {
        self.records.len() as u64
    }

    /// Distinct values of `value` across the group's records.
    pub fn distinct_set<V, F>(&self, value: F) -> HashSet<V>
    where
        V: Eq + Hash,
        F: Fn(&R) -> V,
    {
        self.records.iter().map(value).collect()
    }

    pub fn distinct_count<V, F>(&self, value: F) -> u64
    where
        V: Eq + Hash,
        F: Fn(&R) -> V,
    {
        self.distinct_set(value).len() as u64
    }
}

/// Groups in the order their keys were first encountered.
#[derive(Debug, Clone)]
pub struct Groups<K, R> {
    groups: Vec<Group<K, R>>,
}

impl<K, R> Groups<K, R> {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group<K, R>> {
        self.groups.iter()
    }

    /// Reduce each group to `(key, metric)`, keeping first-seen order.
    pub fn aggregate<M, F>(self, metric: F) -> Vec<(K, M)>
    where
        F: Fn(&Group<K, R>) -> M,
    {
        self.groups
            .into_iter()
            .map(|group| {
                let value = metric(&group);
                (group.key, value)
            })
            .collect()
    }
}

impl<K, R> IntoIterator for Groups<K, R> {
    type Item = Group<K, R>;
    type IntoIter = std::vec::IntoIter<Group<K, R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Group `records` by `key`. Group order is the order keys first appear.
pub fn group_by<K, R, I, F>(records: I, key: F) -> Groups<K, R>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = R>,
    F: Fn(&R) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Group<K, R>> = Vec::new();

    for record in records {
        let k = key(&record);
        match index.get(&k) {
            Some(&position) => groups[position].records.push(record),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push(Group {
                    key: k,
                    records: vec![record],
                });
            }
        }
    }

    Groups { groups }
}
