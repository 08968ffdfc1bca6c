//! Traversal primitives over the taxonomy graph.
//!
//! [`TraversalEngine`] bundles every graph algorithm the similarity measures
//! consume: depth from root, descendant counting, information content,
//! bidirectional shortest path, ancestor sets, least-common-subsumer
//! discovery, and the direction-constrained search used by Hirst-St-Onge.
//! All operations are pure reads of an immutable [`TaxonomyGraph`]; the only
//! mutable state is the three memoization caches, which grow monotonically
//! and hold values that are identical no matter which thread computes them.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use synsim::taxonomy::{PartOfSpeech, Synset, TaxonomyBuilder};
//! use synsim::traversal::TraversalEngine;
//!
//! let mut builder = TaxonomyBuilder::new();
//! builder.add_synset(Synset::new("root", PartOfSpeech::Noun));
//! builder.add_synset(Synset::new("leaf", PartOfSpeech::Noun));
//! builder.add_relation("leaf", "root", "hypernym");
//! builder.add_relation("root", "leaf", "hyponym");
//!
//! let engine = TraversalEngine::new(Arc::new(builder.build()));
//! assert_eq!(engine.depth("root"), 1);
//! assert_eq!(engine.depth("leaf"), 2);
//! assert_eq!(engine.shortest_path_length("leaf", "root"), Some(1));
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};

use crate::taxonomy::{PartOfSpeech, TaxonomyGraph};
use crate::traversal::cache::MemoCache;

/// Base constant of the Hirst-St-Onge formula.
pub const HSO_CONST_C: usize = 16;
/// Penalty weight per direction change in the Hirst-St-Onge formula.
pub const HSO_CONST_K: usize = 1;
/// Default maximum path length explored by the constrained search.
pub const HSO_MAX_PATH_LENGTH: usize = 8;
/// Default maximum number of direction changes allowed on a path.
pub const HSO_MAX_DIRECTION_CHANGES: usize = 5;

/// A path found by the constrained directional search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectedPath {
    /// Number of edges on the path.
    pub length: usize,
    /// Number of up/down reversals along the path.
    pub direction_changes: usize,
}

impl DirectedPath {
    /// The Hirst-St-Onge strength of this path: `C - length - k * changes`.
    ///
    /// May be negative for long, twisty paths; the measure clamps at zero.
    pub fn strength(&self) -> f64 {
        HSO_CONST_C as f64 - self.length as f64 - (HSO_CONST_K * self.direction_changes) as f64
    }
}

/// Travel direction of one step in the constrained search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

/// Stateless traversal algorithms plus their memoization caches.
#[derive(Debug)]
pub struct TraversalEngine {
    graph: Arc<TaxonomyGraph>,
    depth_cache: MemoCache<usize>,
    descendant_cache: MemoCache<usize>,
    ic_cache: MemoCache<f64>,
}

impl TraversalEngine {
    /// Create an engine over the given graph with empty caches.
    pub fn new(graph: Arc<TaxonomyGraph>) -> Self {
        TraversalEngine {
            graph,
            depth_cache: MemoCache::new(),
            descendant_cache: MemoCache::new(),
            ic_cache: MemoCache::new(),
        }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Arc<TaxonomyGraph> {
        &self.graph
    }

    /// Depth of a synset: 1 for a root (no upward neighbors), otherwise
    /// 1 + the shortest number of upward hops to a root. Memoized.
    ///
    /// When no root is reachable (a hypernym cycle), the depth defaults
    /// to 1.
    pub fn depth(&self, id: &str) -> usize {
        self.depth_cache.get_or_insert_with(id, || {
            let mut visited: AHashSet<String> = AHashSet::new();
            let mut queue: VecDeque<(String, usize)> = VecDeque::new();
            queue.push_back((id.to_string(), 1));

            while let Some((current, depth)) = queue.pop_front() {
                if !visited.insert(current.clone()) {
                    continue;
                }

                let hypernyms = self.graph.upward_neighbors(&current);
                if hypernyms.is_empty() {
                    return depth;
                }

                for hypernym in hypernyms {
                    if !visited.contains(&hypernym) {
                        queue.push_back((hypernym, depth + 1));
                    }
                }
            }

            1
        })
    }

    /// Approximate maximum taxonomy depth per part-of-speech category.
    ///
    /// A fixed table rather than a value computed from the graph.
    pub fn max_depth(&self, pos: PartOfSpeech) -> usize {
        match pos {
            PartOfSpeech::Noun => 20,
            PartOfSpeech::Verb => 15,
            PartOfSpeech::Adjective => 10,
            PartOfSpeech::Adverb => 10,
        }
    }

    /// Number of synsets reachable downward from `id`, including `id`
    /// itself; always at least 1. Memoized.
    pub fn descendant_count(&self, id: &str) -> usize {
        self.descendant_cache.get_or_insert_with(id, || {
            let mut visited: AHashSet<String> = AHashSet::new();
            let mut queue: VecDeque<String> = VecDeque::new();
            queue.push_back(id.to_string());
            let mut count = 0;

            while let Some(current) = queue.pop_front() {
                if !visited.insert(current.clone()) {
                    continue;
                }
                count += 1;

                for hyponym in self.graph.downward_neighbors(&current) {
                    if !visited.contains(&hyponym) {
                        queue.push_back(hyponym);
                    }
                }
            }

            count
        })
    }

    /// Information content: `-ln(descendant_count / (synset_count + 1))`,
    /// or 0.0 when the ratio is non-positive. Memoized.
    ///
    /// A synset with more descendants is less specific and has lower IC.
    pub fn information_content(&self, id: &str) -> f64 {
        self.ic_cache.get_or_insert_with(id, || {
            let count = self.descendant_count(id);
            let total = self.graph.synset_count() + 1;
            let prob = count as f64 / total as f64;
            if prob > 0.0 { -prob.ln() } else { 0.0 }
        })
    }

    /// Length of the shortest path between two synsets, treating upward and
    /// downward edges as one undirected adjacency.
    ///
    /// Bidirectional breadth-first search with alternating frontier
    /// expansion. Returns `Some(0)` when `a == b` and `None` when the two
    /// frontiers never meet (disconnected synsets).
    pub fn shortest_path_length(&self, a: &str, b: &str) -> Option<usize> {
        if a == b {
            return Some(0);
        }

        let mut visited_a: AHashMap<String, usize> = AHashMap::new();
        let mut visited_b: AHashMap<String, usize> = AHashMap::new();
        visited_a.insert(a.to_string(), 0);
        visited_b.insert(b.to_string(), 0);

        let mut queue_a: VecDeque<(String, usize)> = VecDeque::new();
        let mut queue_b: VecDeque<(String, usize)> = VecDeque::new();
        queue_a.push_back((a.to_string(), 0));
        queue_b.push_back((b.to_string(), 0));

        while !queue_a.is_empty() || !queue_b.is_empty() {
            if let Some(found) = Self::expand_frontier(
                &self.graph,
                &mut queue_a,
                &mut visited_a,
                &visited_b,
            ) {
                return Some(found);
            }
            if let Some(found) = Self::expand_frontier(
                &self.graph,
                &mut queue_b,
                &mut visited_b,
                &visited_a,
            ) {
                return Some(found);
            }
        }

        None
    }

    /// Expand one node of a frontier; returns a total distance once the
    /// frontiers touch.
    fn expand_frontier(
        graph: &TaxonomyGraph,
        queue: &mut VecDeque<(String, usize)>,
        own: &mut AHashMap<String, usize>,
        other: &AHashMap<String, usize>,
    ) -> Option<usize> {
        let (current, dist) = queue.pop_front()?;
        if let Some(other_dist) = other.get(&current) {
            return Some(dist + other_dist);
        }

        let mut neighbors = graph.upward_neighbors(&current);
        neighbors.extend(graph.downward_neighbors(&current));

        for neighbor in neighbors {
            if !own.contains_key(&neighbor) {
                own.insert(neighbor.clone(), dist + 1);
                if let Some(other_dist) = other.get(&neighbor) {
                    return Some(dist + 1 + other_dist);
                }
                queue.push_back((neighbor, dist + 1));
            }
        }

        None
    }

    /// All synsets reachable from `id` by repeated upward traversal.
    ///
    /// Recomputed per call; only the least-common-subsumer search uses it.
    pub fn ancestor_set(&self, id: &str) -> AHashSet<String> {
        let mut ancestors: AHashSet<String> = AHashSet::new();
        let mut queue: VecDeque<String> = VecDeque::new();
        queue.push_back(id.to_string());

        while let Some(current) = queue.pop_front() {
            for hypernym in self.graph.upward_neighbors(&current) {
                if ancestors.insert(hypernym.clone()) {
                    queue.push_back(hypernym);
                }
            }
        }

        ancestors
    }

    /// The least common subsumer of two synsets: their deepest common
    /// ancestor (each synset counts as its own ancestor, so `lcs(s, s) = s`).
    ///
    /// Returns `None` when the synsets share no ancestor. When several
    /// common ancestors share the maximal depth, the lexicographically
    /// smallest identifier wins; the tie-break is part of the contract and
    /// keeps results reproducible.
    pub fn least_common_subsumer(&self, a: &str, b: &str) -> Option<String> {
        if a == b {
            return Some(a.to_string());
        }

        let mut ancestors_a = self.ancestor_set(a);
        ancestors_a.insert(a.to_string());
        let mut ancestors_b = self.ancestor_set(b);
        ancestors_b.insert(b.to_string());

        let mut deepest: Option<(usize, String)> = None;
        for id in ancestors_a.intersection(&ancestors_b) {
            let depth = self.depth(id);
            match &deepest {
                Some((best_depth, best_id))
                    if depth < *best_depth || (depth == *best_depth && id >= best_id) => {}
                _ => deepest = Some((depth, id.clone())),
            }
        }

        deepest.map(|(_, id)| id)
    }

    /// Search for the strongest path from `a` to `b` under explicit bounds
    /// on path length and direction changes.
    ///
    /// Breadth-first search where every state carries its own visited set,
    /// so a node may appear on several distinct branches. A step upward
    /// follows a hypernym edge, a step downward a hyponym edge; a direction
    /// change is a reversal relative to the immediately preceding step (the
    /// first step never counts). Among all in-bound paths reaching `b`, the
    /// one maximizing [`DirectedPath::strength`] is returned; `None` when no
    /// such path exists. `a == b` yields a zero-length path.
    pub fn constrained_path(
        &self,
        a: &str,
        b: &str,
        max_path_length: usize,
        max_direction_changes: usize,
    ) -> Option<DirectedPath> {
        if a == b {
            return Some(DirectedPath {
                length: 0,
                direction_changes: 0,
            });
        }

        struct State {
            node: String,
            length: usize,
            changes: usize,
            last: Option<Direction>,
            visited: AHashSet<String>,
        }

        let mut initial_visited = AHashSet::new();
        initial_visited.insert(a.to_string());

        let mut queue: VecDeque<State> = VecDeque::new();
        queue.push_back(State {
            node: a.to_string(),
            length: 0,
            changes: 0,
            last: None,
            visited: initial_visited,
        });

        let mut best: Option<DirectedPath> = None;

        while let Some(state) = queue.pop_front() {
            if state.length > max_path_length || state.changes > max_direction_changes {
                continue;
            }

            for direction in [Direction::Up, Direction::Down] {
                let neighbors = match direction {
                    Direction::Up => self.graph.upward_neighbors(&state.node),
                    Direction::Down => self.graph.downward_neighbors(&state.node),
                };
                let reversal = match (state.last, direction) {
                    (Some(Direction::Down), Direction::Up)
                    | (Some(Direction::Up), Direction::Down) => 1,
                    _ => 0,
                };

                for neighbor in neighbors {
                    if neighbor == b {
                        let candidate = DirectedPath {
                            length: state.length + 1,
                            direction_changes: state.changes + reversal,
                        };
                        if best.is_none_or(|p| candidate.strength() > p.strength()) {
                            best = Some(candidate);
                        }
                        continue;
                    }

                    if !state.visited.contains(&neighbor) {
                        let mut visited = state.visited.clone();
                        visited.insert(neighbor.clone());
                        queue.push_back(State {
                            node: neighbor,
                            length: state.length + 1,
                            changes: state.changes + reversal,
                            last: Some(direction),
                            visited,
                        });
                    }
                }
            }
        }

        best.filter(|p| p.length <= max_path_length && p.direction_changes <= max_direction_changes)
    }
}
