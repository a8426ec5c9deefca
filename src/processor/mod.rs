//! The functional core: script variables, instance classification and the
//! room graph.
pub mod classify;
pub mod code_vars;
pub mod graph;

use crate::model::{RawProject, RoomOrder, WorldGraph};

/// Runs every processing pass and returns a read-only structure for writers.
pub fn run(raw: RawProject) -> WorldGraph {
    let order = RoomOrder::new(raw.room_order);
    let rooms = graph::collect_rooms(raw.rooms);
    graph::build_graph(rooms, order)
}
