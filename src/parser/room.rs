//! Room document parser: one `*.room.gmx` file in, one [`Room`] out.

use std::path::Path;

use roxmltree::{Document, Node};
use tracing::debug;

use super::{child, parse_coordinate, parse_dimension, parse_instance_id};
use crate::error::{DocumentError, DocumentResult};
use crate::model::{CodeValue, CodeVars, Instance, Room, SpawnPoint, Warp};
use crate::processor::classify::{Category, classify};
use crate::processor::code_vars::parse_code_vars;

pub const ROOM_SUFFIX: &str = ".room.gmx";

/// Room-level script marker that allows ad-hoc collectible spawns.
pub const COLLECTIBLES_MARKER: &str = "rm_points = 1";

/// `rooms/forest.room.gmx` → `forest`.
pub fn room_name_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    stem.replace(".room", "")
}

pub fn load_room(path: &Path) -> DocumentResult<Room> {
    let xml = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_room(path, &xml)
}

/// Parse one room document. The index is left at 0 for the aggregator.
pub fn parse_room(path: &Path, xml: &str) -> DocumentResult<Room> {
    let doc = Document::parse(xml).map_err(|source| DocumentError::Markup {
        path: path.to_path_buf(),
        source,
    })?;
    let root = doc.root_element();
    let name = room_name_from_path(path);

    let width = parse_dimension(child(root, "width").and_then(|n| n.text()), "width");
    let height = parse_dimension(child(root, "height").and_then(|n| n.text()), "height");
    let has_collectibles = child(root, "code")
        .and_then(|n| n.text())
        .is_some_and(|code| code.contains(COLLECTIBLES_MARKER));

    let mut room = Room::empty(name, width, height, has_collectibles);

    let Some(instances) = child(root, "instances") else {
        debug!(room = %room.name, "no instance list");
        return Ok(room);
    };

    for inst in instances.children().filter(|n| n.has_tag_name("instance")) {
        add_instance(&mut room, inst);
    }

    debug!(
        room = %room.name,
        spawns = room.spawn_points.len(),
        warps = room.warps.len(),
        npcs = room.npcs.len(),
        shops = room.shops.len(),
        special = room.special_objects.len(),
        "room parsed"
    );
    Ok(room)
}

fn add_instance(room: &mut Room, inst: Node<'_, '_>) {
    let obj_name = inst.attribute("objName").unwrap_or_default();
    let x = parse_coordinate(inst.attribute("x"));
    let y = parse_coordinate(inst.attribute("y"));
    let code = inst.attribute("code").unwrap_or_default();

    let Some(category) = classify(obj_name) else {
        return;
    };

    let instance = || Instance {
        obj_name: obj_name.to_string(),
        x,
        y,
        code: code.to_string(),
        instance_id: parse_instance_id(inst.attribute("id")),
    };

    match category {
        Category::SpawnPoint => room.spawn_points.push(SpawnPoint { x, y }),
        Category::Warp => {
            let mut vars = parse_code_vars(Some(code));
            room.warps.push(Warp {
                x,
                y,
                warp_type: obj_name.to_string(),
                next_room: take_numeric(&mut vars, "next_room"),
                new_x: take_numeric(&mut vars, "new_x"),
                new_y: take_numeric(&mut vars, "new_y"),
                code: code.to_string(),
            });
        }
        Category::Npc => room.npcs.push(instance()),
        Category::Shop(_) => room.shops.push(instance()),
        Category::Special(_) => room.special_objects.push(instance()),
    }
}

fn take_numeric(vars: &mut CodeVars, key: &str) -> Option<CodeValue> {
    vars.remove(key).filter(CodeValue::is_numeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Room {
        parse_room(Path::new("rooms/forest.room.gmx"), xml).expect("valid room")
    }

    #[test]
    fn test_room_name_from_path() {
        assert_eq!(room_name_from_path(Path::new("rooms/forest.room.gmx")), "forest");
        assert_eq!(room_name_from_path(Path::new("town_2.room.gmx")), "town_2");
        assert_eq!(room_name_from_path(Path::new("plain.gmx")), "plain");
    }

    #[test]
    fn test_spawn_point_only_in_spawn_collection() {
        let room = parse(
            r#"<room>
                <width>640</width>
                <height>480</height>
                <instances>
                    <instance objName="obj_slimepoint" x="64" y="32" code="" id="100001"/>
                </instances>
            </room>"#,
        );

        assert_eq!(room.name, "forest");
        assert_eq!(room.index, 0);
        assert_eq!((room.width, room.height), (640, 480));
        assert_eq!(room.spawn_points, vec![SpawnPoint { x: 64, y: 32 }]);
        assert!(room.warps.is_empty());
        assert!(room.npcs.is_empty());
        assert!(room.shops.is_empty());
        assert!(room.special_objects.is_empty());
    }

    #[test]
    fn test_instances_are_classified() {
        let room = parse(
            r#"<room>
                <instances>
                    <instance objName="warp_vert" x="96.7" y="0" code="next_room = 3&#13;&#10;new_x = 120&#13;&#10;new_y = 80.5" id="1"/>
                    <instance objName="NPC_guide" x="10" y="20" code="text = hello" id="2"/>
                    <instance objName="obj_shop_item" x="30" y="40" code="" id="3"/>
                    <instance objName="obj_mailbox" x="50" y="60" id="4"/>
                    <instance objName="obj_tree" x="70" y="80" id="5"/>
                </instances>
            </room>"#,
        );

        assert_eq!(room.warps.len(), 1);
        let warp = &room.warps[0];
        assert_eq!((warp.x, warp.y), (96, 0));
        assert_eq!(warp.warp_type, "warp_vert");
        assert_eq!(warp.next_room, Some(CodeValue::Int(3)));
        assert_eq!(warp.new_x, Some(CodeValue::Int(120)));
        assert_eq!(warp.new_y, Some(CodeValue::Float(80.5)));

        assert_eq!(room.npcs.len(), 1);
        assert_eq!(room.npcs[0].obj_name, "NPC_guide");
        assert_eq!(room.npcs[0].code, "text = hello");
        assert_eq!(room.npcs[0].instance_id, 2);

        assert_eq!(room.shops.len(), 1);
        assert_eq!(room.shops[0].instance_id, 3);

        assert_eq!(room.special_objects.len(), 1);
        assert_eq!(room.special_objects[0].obj_name, "obj_mailbox");
        assert_eq!(room.special_objects[0].code, "");
    }

    #[test]
    fn test_warp_fields_missing_or_not_numeric() {
        let room = parse(
            r#"<room><instances>
                <instance objName="warp_button" x="0" y="0" code="next_room = rm_town" id="1"/>
                <instance objName="warp_hor" x="0" y="0" id="2"/>
            </instances></room>"#,
        );

        for warp in &room.warps {
            assert_eq!(warp.next_room, None);
            assert_eq!(warp.new_x, None);
            assert_eq!(warp.new_y, None);
        }
        assert_eq!(room.warps[0].code, "next_room = rm_town");
    }

    #[test]
    fn test_collectibles_marker() {
        let with = parse("<room><code>music = 2\nrm_points = 1\nweather = 0</code></room>");
        assert!(with.has_collectibles);

        let without = parse("<room><code>rm_points = 0</code></room>");
        assert!(!without.has_collectibles);

        let spaced = parse("<room><code>rm_points=1</code></room>");
        assert!(!spaced.has_collectibles);

        let absent = parse("<room><width>10</width></room>");
        assert!(!absent.has_collectibles);
    }

    #[test]
    fn test_missing_sections_default() {
        let room = parse("<room><width></width></room>");
        assert_eq!((room.width, room.height), (0, 0));
        assert_eq!(room.index, 0);
        assert!(room.spawn_points.is_empty());
        assert!(room.warps.is_empty());
        assert!(room.npcs.is_empty());
        assert!(room.shops.is_empty());
        assert!(room.special_objects.is_empty());
    }

    #[test]
    fn test_bad_attributes_default_to_zero() {
        let room = parse(
            r#"<room><instances>
                <instance objName="NPC_a" x="left" code="" id="abc"/>
            </instances></room>"#,
        );
        let npc = &room.npcs[0];
        assert_eq!((npc.x, npc.y, npc.instance_id), (0, 0, 0));
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let err = parse_room(Path::new("rooms/broken.room.gmx"), "<room><width>")
            .expect_err("unclosed tags");
        assert!(matches!(err, DocumentError::Markup { .. }));
        assert!(err.to_string().contains("broken.room.gmx"));
    }
}
