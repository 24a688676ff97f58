//! Shortest-path engines
//!
//! Each engine is an immutable configuration value holding its weight
//! extractor and tuning parameters. All working state lives in the call,
//! so one engine can serve any number of independent queries.

pub mod astar;
pub mod bellman_ford;
pub mod bidirectional;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod johnson;
pub mod queue;
pub mod visitor;
pub mod yen;

pub use astar::AStar;
pub use bellman_ford::BellmanFord;
pub use bidirectional::{BidirectionalDijkstra, Termination};
pub use dijkstra::{Dijkstra, DijkstraStep, DijkstraSteps};
pub use floyd_warshall::FloydWarshall;
pub use johnson::Johnson;
pub use queue::{BinaryHeapFactory, BinaryHeapQueue, PriorityQueue, QueueFactory};
pub use visitor::{NoopVisitor, Visitor};
pub use yen::Yen;
