//! Command implementations.

pub mod graph;
pub mod populate;
pub mod show;

pub use self::graph::execute_graph;
pub use self::populate::execute_populate;
pub use self::show::execute_show;
