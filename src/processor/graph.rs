//! Joins parsed rooms with the manifest order into the final [`WorldGraph`].

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::model::{Room, RoomOrder, UNKNOWN_ROOM_INDEX, WorldGraph};

/// Key rooms by name; a later room replaces an earlier one of the same name.
pub fn collect_rooms(rooms: impl IntoIterator<Item = Room>) -> BTreeMap<String, Room> {
    let mut by_name = BTreeMap::new();
    for room in rooms {
        if let Some(previous) = by_name.insert(room.name.clone(), room) {
            debug!(room = %previous.name, "duplicate room name, keeping the later document");
        }
    }
    by_name
}

/// Assign manifest indices and build the graph.
///
/// Rooms missing from the manifest get [`UNKNOWN_ROOM_INDEX`]. Warp targets
/// are passed through untouched; out-of-range targets are only reported.
pub fn build_graph(mut rooms: BTreeMap<String, Room>, room_order: RoomOrder) -> WorldGraph {
    for room in rooms.values_mut() {
        room.index = match room_order.index_of(&room.name) {
            Some(i) => i as i64,
            None => {
                warn!(room = %room.name, "room is not listed in the manifest");
                UNKNOWN_ROOM_INDEX
            }
        };
    }

    let graph = WorldGraph { rooms, room_order };
    for edge in graph.edges() {
        if !edge.in_range(&graph.room_order) {
            warn!(
                room = %edge.from.name,
                warp = %edge.warp.warp_type,
                target = edge.target,
                "warp target outside the room order"
            );
        }
    }
    graph
}
