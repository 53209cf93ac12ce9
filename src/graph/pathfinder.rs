//! Shortest connecting paths between two persons.
//!
//! ## Policy
//!
//! 1. Lineage pass: parent edges only, and only walks that climb to a
//!    shared ancestor and then descend (`Up* Down*`). A walk through a
//!    shared child is not a blood line.
//! 2. If nothing is found, an unrestricted pass over parent and spouse
//!    edges.
//!
//! Neighbor expansion order is fixed: father, mother, children by
//! ascending id, spouses by ascending id. Among equal-length paths the
//! first one discovered in that order wins. The choice is stable, not
//! culturally canonical.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::types::{KinPath, PersonId, Step};
use super::FamilyGraph;

/// Which edges a search pass may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    /// Parent edges, ascend-then-descend only.
    Lineage,
    /// Parent and spouse edges in any order.
    Any,
}

/// Search state: a person and whether the walk has started descending.
type State = (PersonId, bool);

/// Breadth-first path search over a family graph.
pub struct PathFinder<'g, G: FamilyGraph + ?Sized> {
    graph: &'g G,
    max_length: usize,
}

impl<'g, G: FamilyGraph + ?Sized> PathFinder<'g, G> {
    /// Create a path finder bounded to `max_length` hops.
    pub fn new(graph: &'g G, max_length: usize) -> Self {
        Self { graph, max_length }
    }

    /// Shortest path from `from` to `to`, blood lineage first.
    ///
    /// Returns `None` when either person is unknown or no path exists
    /// within the hop bound. `from == to` yields a zero-length path.
    pub fn shortest_path(&self, from: PersonId, to: PersonId) -> Option<KinPath> {
        self.search(from, to, Pass::Lineage)
            .or_else(|| self.search(from, to, Pass::Any))
    }

    /// Shortest ascend-then-descend path over parent edges only.
    pub fn blood_path(&self, from: PersonId, to: PersonId) -> Option<KinPath> {
        self.search(from, to, Pass::Lineage)
    }

    fn neighbors(&self, id: PersonId, pass: Pass) -> Vec<(PersonId, Step)> {
        let mut out: Vec<(PersonId, Step)> = self
            .graph
            .parents(id)
            .iter()
            .map(|p| (p, Step::Up))
            .collect();
        out.extend(self.graph.children(id).iter().map(|c| (*c, Step::Down)));
        if pass == Pass::Any {
            out.extend(self.graph.spouses(id).iter().map(|s| (*s, Step::Spouse)));
        }
        out
    }

    fn search(&self, from: PersonId, to: PersonId, pass: Pass) -> Option<KinPath> {
        let start = self.graph.person(from)?;
        self.graph.person(to)?;

        if from == to {
            return Some(KinPath::single(start.clone()));
        }

        let origin: State = (from, false);
        let mut seen: BTreeSet<State> = BTreeSet::new();
        let mut came_from: BTreeMap<State, (State, Step)> = BTreeMap::new();
        let mut queue: VecDeque<(State, usize)> = VecDeque::new();
        seen.insert(origin);
        queue.push_back((origin, 0));

        let mut goal: Option<State> = None;
        'bfs: while let Some((state, depth)) = queue.pop_front() {
            if depth >= self.max_length {
                continue;
            }
            let (current, descending) = state;
            for (next, step) in self.neighbors(current, pass) {
                let next_descending = match (pass, step) {
                    (Pass::Any, _) => false,
                    (Pass::Lineage, Step::Up) if descending => continue,
                    (Pass::Lineage, Step::Up) => false,
                    (Pass::Lineage, _) => true,
                };
                let next_state = (next, next_descending);
                if !seen.insert(next_state) {
                    continue;
                }
                came_from.insert(next_state, (state, step));
                if next == to {
                    goal = Some(next_state);
                    break 'bfs;
                }
                queue.push_back((next_state, depth + 1));
            }
        }

        let mut cursor = goal?;
        let mut reversed: Vec<(PersonId, Step)> = Vec::new();
        while cursor != origin {
            let (prev, step) = came_from.get(&cursor).copied()?;
            reversed.push((cursor.0, step));
            cursor = prev;
        }

        let mut path = KinPath::single(start.clone());
        for (id, step) in reversed.into_iter().rev() {
            path.append(step, self.graph.person(id)?.clone());
        }
        Some(path)
    }
}
