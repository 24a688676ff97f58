// Re-export key components
pub use crate::routing::{
    AStar, BellmanFord, BidirectionalDijkstra, Dijkstra, FloydWarshall, Johnson, Termination, Yen,
};

// Graph access
pub use crate::graph::{
    BidirectionalGraph, EdgeListGraph, FilteredGraph, GraphBase, IncidenceGraph, VertexListGraph,
    edge_weight,
};

// Results
pub use crate::{
    AllPairsShortestPaths, BellmanFordResult, Cost, Error, Path, ShortestPathsFromSource, Weight,
};

// Extension points
pub use crate::routing::{BinaryHeapFactory, NoopVisitor, PriorityQueue, QueueFactory, Visitor};
