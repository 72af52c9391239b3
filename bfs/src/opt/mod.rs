pub mod bfs;
pub mod enumerator;
pub mod selector;
