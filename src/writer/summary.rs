//! Human readable overview of the extracted rooms. Not part of the JSON
//! contract; the layout may change freely.

use std::fmt::Write;

use crate::model::{CodeValue, WorldGraph};

pub fn render(graph: &WorldGraph) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_summary(graph, &mut out);
    out
}

fn write_summary(graph: &WorldGraph, out: &mut String) -> std::fmt::Result {
    let rooms = graph.rooms_by_index();

    writeln!(out, "=== ROOM SUMMARY ===\n")?;

    let with_spawns: Vec<_> = rooms.iter().filter(|r| !r.spawn_points.is_empty()).collect();
    writeln!(out, "Rooms with spawn points: {}", with_spawns.len())?;
    for room in with_spawns {
        writeln!(
            out,
            "  [{:3}] {}: {} spawn points",
            room.index,
            room.name,
            room.spawn_points.len()
        )?;
    }

    writeln!(out, "\nRooms with collectibles enabled (rm_points=1):")?;
    for room in rooms.iter().filter(|r| r.has_collectibles) {
        writeln!(out, "  [{:3}] {} ({}x{})", room.index, room.name, room.width, room.height)?;
    }

    writeln!(out, "\n=== WARP CONNECTIONS ===\n")?;
    let edges = graph.edges();
    for room in rooms.iter().filter(|r| !r.warps.is_empty()) {
        writeln!(out, "[{:3}] {}:", room.index, room.name)?;
        for edge in edges.iter().filter(|e| e.from.name == room.name) {
            writeln!(
                out,
                "  {} at ({}, {}) -> [{}] {} at ({}, {})",
                edge.warp.warp_type,
                edge.warp.x,
                edge.warp.y,
                edge.target,
                edge.target_name,
                coord(edge.warp.new_x.as_ref()),
                coord(edge.warp.new_y.as_ref()),
            )?;
        }
    }
    Ok(())
}

fn coord(value: Option<&CodeValue>) -> String {
    value.map_or_else(|| "?".to_string(), CodeValue::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Room, RoomOrder, SpawnPoint, Warp};
    use crate::processor::graph::{build_graph, collect_rooms};

    #[test]
    fn test_summary_lists_rooms_and_warps() {
        let mut forest = Room::empty("forest", 640, 480, true);
        forest.spawn_points.push(SpawnPoint { x: 1, y: 2 });
        forest.warps.push(Warp {
            x: 10,
            y: 20,
            warp_type: "warp_hor".into(),
            next_room: Some(CodeValue::Int(4)),
            new_x: Some(CodeValue::Int(300)),
            new_y: None,
            code: String::new(),
        });
        let graph = build_graph(
            collect_rooms(vec![forest]),
            RoomOrder::new(vec!["forest".into()]),
        );

        let text = render(&graph);
        assert!(text.contains("Rooms with spawn points: 1"));
        assert!(text.contains("  [  0] forest: 1 spawn points"));
        assert!(text.contains("  [  0] forest (640x480)"));
        assert!(text.contains("  warp_hor at (10, 20) -> [4] room_4 at (300, ?)"));
    }
}
