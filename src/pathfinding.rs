//! Dijkstra's shortest paths driven by a [`MinPQ`]
//!
//! The search is generic over the queue variant, so the same relaxation loop
//! runs on [`IndexedMinPQ`](crate::heap::IndexedMinPQ) and on
//! [`NaiveMinPQ`](crate::naive::NaiveMinPQ).
//!
//! # Design
//!
//! Vertices are keyed directly in the queue by identity. Each time a shorter
//! tentative distance is found the vertex is inserted or re-prioritised with
//! `add_or_change_priority`; `remove_min` picks the next vertex to finalize.
//! A finalized vertex is never queued again, so every search terminates.
//! Edge weights must be non-negative for the distances to be shortest; with
//! a negative weight (or a negative cycle) the search still returns, but an
//! improvement into an already finalized vertex is ignored.
//!
//! # Example
//!
//! ```rust
//! use indexed_minpq::pathfinding::{dijkstra, AdjacencyListGraph};
//! use indexed_minpq::IndexedMinPQ;
//!
//! let mut graph = AdjacencyListGraph::new();
//! graph.add_edge('a', 'b', 1.0);
//! graph.add_edge('b', 'c', 1.0);
//! graph.add_edge('a', 'c', 5.0);
//!
//! let paths = dijkstra::<_, _, IndexedMinPQ<_>>(&graph, &'a').unwrap();
//! assert_eq!(paths.distance(&'c'), Some(2.0));
//! assert_eq!(paths.solution(&'c'), vec!['a', 'b', 'c']);
//! ```

use crate::traits::{MinPQ, MinPQError};
use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// A directed, weighted edge
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<V> {
    pub from: V,
    pub to: V,
    pub weight: f64,
}

impl<V> Edge<V> {
    pub fn new(from: V, to: V, weight: f64) -> Self {
        Edge { from, to, weight }
    }
}

/// Trait for graphs that can be searched.
///
/// Implement this for your own graph type; [`AdjacencyListGraph`] is
/// provided for the common case.
pub trait Graph<V> {
    /// Returns every outgoing edge of `vertex`.
    fn neighbors(&self, vertex: &V) -> Vec<Edge<V>>;
}

/// Directed graph stored as per-vertex edge lists
#[derive(Debug, Clone)]
pub struct AdjacencyListGraph<V> {
    adjacency: FxHashMap<V, Vec<Edge<V>>>,
}

impl<V: Eq + Hash + Clone> AdjacencyListGraph<V> {
    pub fn new() -> Self {
        AdjacencyListGraph {
            adjacency: FxHashMap::default(),
        }
    }

    /// Builds a graph from `(from, to, weight)` triples.
    pub fn from_edges(edges: impl IntoIterator<Item = (V, V, f64)>) -> Self {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Adds a directed edge. Both endpoints become vertices of the graph.
    pub fn add_edge(&mut self, from: V, to: V, weight: f64) {
        self.adjacency.entry(to.clone()).or_default();
        self.adjacency
            .entry(from.clone())
            .or_default()
            .push(Edge::new(from, to, weight));
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

impl<V: Eq + Hash + Clone> Default for AdjacencyListGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Eq + Hash + Clone> Graph<V> for AdjacencyListGraph<V> {
    fn neighbors(&self, vertex: &V) -> Vec<Edge<V>> {
        self.adjacency.get(vertex).cloned().unwrap_or_default()
    }
}

/// Shortest-path tree rooted at the search start.
#[derive(Debug, Clone)]
pub struct ShortestPaths<V> {
    start: V,
    /// Best known distance from start
    dist_to: FxHashMap<V, f64>,
    /// Last edge on the best known path (absent for the start)
    edge_to: FxHashMap<V, Edge<V>>,
}

impl<V: Eq + Hash + Clone> ShortestPaths<V> {
    fn new(start: V) -> Self {
        let mut dist_to = FxHashMap::default();
        dist_to.insert(start.clone(), 0.0);
        ShortestPaths {
            start,
            dist_to,
            edge_to: FxHashMap::default(),
        }
    }

    pub fn start(&self) -> &V {
        &self.start
    }

    /// Returns the shortest distance to `goal`, or `None` if unreachable.
    pub fn distance(&self, goal: &V) -> Option<f64> {
        self.dist_to.get(goal).copied()
    }

    /// Returns the vertices on a shortest path from start to `goal`, inclusive.
    ///
    /// Empty when `goal` is unreachable.
    pub fn solution(&self, goal: &V) -> Vec<V> {
        if !self.dist_to.contains_key(goal) {
            return Vec::new();
        }

        let mut path = vec![goal.clone()];
        let mut current = goal;
        while let Some(edge) = self.edge_to.get(current) {
            path.push(edge.from.clone());
            current = &edge.from;
        }
        path.reverse();
        path
    }

    /// Number of vertices reached from start, including start itself.
    pub fn reached(&self) -> usize {
        self.dist_to.len()
    }
}

/// Runs Dijkstra's algorithm from `start` over the whole reachable graph.
///
/// # Type Parameters
/// - `V`: The vertex type
/// - `G`: The graph implementing [`Graph`]
/// - `Q`: The queue variant implementing [`MinPQ`]
///
/// # Errors
/// Queue errors are propagated, though a well-formed graph never produces
/// one: every vertex is queued before it is re-prioritised, and `remove_min`
/// is only called on a non-empty queue. A NaN edge weight surfaces as
/// [`MinPQError::InvalidArgument`].
pub fn dijkstra<V, G, Q>(graph: &G, start: &V) -> Result<ShortestPaths<V>, MinPQError>
where
    V: Eq + Hash + Clone + Debug,
    G: Graph<V>,
    Q: MinPQ<V>,
{
    let mut paths = ShortestPaths::new(start.clone());
    let mut settled: FxHashSet<V> = FxHashSet::default();
    let mut queue = Q::new();
    queue.add(start.clone(), 0.0)?;

    while !queue.is_empty() {
        let from = queue.remove_min()?;
        let from_dist = paths.dist_to[&from];
        trace!("finalized {:?} at distance {}", from, from_dist);
        settled.insert(from.clone());

        for edge in graph.neighbors(&from) {
            if settled.contains(&edge.to) {
                if edge.weight.is_nan() {
                    return Err(MinPQError::InvalidArgument);
                }
                continue;
            }
            let old_dist = paths.dist_to.get(&edge.to).copied().unwrap_or(f64::INFINITY);
            let new_dist = from_dist + edge.weight;
            if new_dist < old_dist {
                queue.add_or_change_priority(edge.to.clone(), new_dist)?;
                paths.dist_to.insert(edge.to.clone(), new_dist);
                paths.edge_to.insert(edge.to.clone(), edge);
            } else if new_dist.is_nan() {
                return Err(MinPQError::InvalidArgument);
            }
        }
    }

    debug!(
        "dijkstra from {:?} reached {} vertices",
        paths.start,
        paths.reached()
    );
    Ok(paths)
}

/// Returns all vertices reachable from `start` within `max_cost`, in
/// non-decreasing order of distance.
///
/// This is useful for "what's nearby" queries.
pub fn reachable_within<V, G, Q>(
    graph: &G,
    start: &V,
    max_cost: f64,
) -> Result<Vec<(V, f64)>, MinPQError>
where
    V: Eq + Hash + Clone + Debug,
    G: Graph<V>,
    Q: MinPQ<V>,
{
    let mut result = Vec::new();
    if max_cost.is_nan() || max_cost < 0.0 {
        return Ok(result);
    }

    let mut dist_to: FxHashMap<V, f64> = FxHashMap::default();
    let mut settled: FxHashSet<V> = FxHashSet::default();
    let mut queue = Q::new();
    dist_to.insert(start.clone(), 0.0);
    queue.add(start.clone(), 0.0)?;

    while !queue.is_empty() {
        let from = queue.remove_min()?;
        let from_dist = dist_to[&from];
        settled.insert(from.clone());

        for edge in graph.neighbors(&from) {
            if settled.contains(&edge.to) {
                continue;
            }
            let new_dist = from_dist + edge.weight;
            if new_dist > max_cost {
                continue;
            }
            let old_dist = dist_to.get(&edge.to).copied().unwrap_or(f64::INFINITY);
            if new_dist < old_dist {
                queue.add_or_change_priority(edge.to.clone(), new_dist)?;
                dist_to.insert(edge.to, new_dist);
            }
        }

        result.push((from, from_dist));
    }

    debug!(
        "{} vertices within {} of {:?}",
        result.len(),
        max_cost,
        start
    );
    Ok(result)
}
