use std::collections::{BTreeMap, HashMap};

use serde::{Serialize, Serializer};

/// Index given to rooms the manifest does not list.
pub const UNKNOWN_ROOM_INDEX: i64 = -1;

/// A single right-hand side out of an embedded `name = value` script.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CodeValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl CodeValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CodeValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, CodeValue::Int(_) | CodeValue::Float(_))
    }
}

impl std::fmt::Display for CodeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodeValue::Int(v) => write!(f, "{v}"),
            CodeValue::Float(v) => write!(f, "{v}"),
            CodeValue::Str(v) => f.write_str(v),
        }
    }
}

/// Variables of one script; later assignments already overwrote earlier ones.
pub type CodeVars = HashMap<String, CodeValue>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpawnPoint {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarpKind {
    Vertical,
    Horizontal,
    Button,
    Other(String),
}

impl WarpKind {
    pub fn from_obj_name(name: &str) -> Self {
        match name {
            "warp_vert" => WarpKind::Vertical,
            "warp_hor" => WarpKind::Horizontal,
            "warp_button" => WarpKind::Button,
            other => WarpKind::Other(other.to_string()),
        }
    }
}

/// A transition point out of a room.
///
/// `next_room` is an index into the global room order, never an owning
/// reference: it may be a float, negative or past the end of the order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Warp {
    pub x: i32,
    pub y: i32,
    #[serde(rename = "type")]
    pub warp_type: String,
    pub next_room: Option<CodeValue>,
    pub new_x: Option<CodeValue>,
    pub new_y: Option<CodeValue>,
    /// Raw script, kept for consumers that need more than the three fields.
    #[serde(skip)]
    pub code: String,
}

impl Warp {
    pub fn kind(&self) -> WarpKind {
        WarpKind::from_obj_name(&self.warp_type)
    }

    /// Target index, only when the script assigned an integer.
    pub fn target_index(&self) -> Option<i64> {
        self.next_room.as_ref().and_then(CodeValue::as_int)
    }
}

/// Catalogued placed object: NPC, shop fixture or special object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instance {
    pub obj_name: String,
    pub x: i32,
    pub y: i32,
    pub code: String,
    pub instance_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    #[serde(skip)]
    pub name: String,
    pub index: i64,
    pub width: i32,
    pub height: i32,
    pub has_collectibles: bool,
    pub spawn_points: Vec<SpawnPoint>,
    pub warps: Vec<Warp>,
    pub npcs: Vec<Instance>,
    pub shops: Vec<Instance>,
    pub special_objects: Vec<Instance>,
}

impl Room {
    /// Room with no instances; the index is a placeholder until aggregation.
    pub fn empty(name: impl Into<String>, width: i32, height: i32, has_collectibles: bool) -> Self {
        Self {
            name: name.into(),
            index: 0,
            width,
            height,
            has_collectibles,
            spawn_points: Vec::new(),
            warps: Vec::new(),
            npcs: Vec::new(),
            shops: Vec::new(),
            special_objects: Vec::new(),
        }
    }
}

/// Canonical room ordering from the project manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomOrder {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl RoomOrder {
    pub fn new(names: Vec<String>) -> Self {
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            // first listing of a duplicated name keeps its slot
            index.entry(name.clone()).or_insert(i);
        }
        Self { names, index }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn name_of(&self, index: i64) -> Option<&str> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.names.get(i))
            .map(String::as_str)
    }

    /// Human readable target, `room_<n>` when the index is out of range.
    pub fn display_name(&self, index: i64) -> String {
        self.name_of(index)
            .map(str::to_string)
            .unwrap_or_else(|| format!("room_{index}"))
    }
}

impl Serialize for RoomOrder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.names)
    }
}

/// Immediately-after-parse representation handed from `parser` to `processor`.
#[derive(Debug, Clone, Default)]
pub struct RawProject {
    /// Rooms in processing order; duplicates are resolved later.
    pub rooms: Vec<Room>,
    pub room_order: Vec<String>,
}

/// One directed edge of the warp graph.
#[derive(Debug, Clone, PartialEq)]
pub struct WarpEdge<'a> {
    pub from: &'a Room,
    pub warp: &'a Warp,
    pub target: i64,
    pub target_name: String,
}

impl WarpEdge<'_> {
    pub fn in_range(&self, order: &RoomOrder) -> bool {
        order.name_of(self.target).is_some()
    }
}

/// Final output handed to `writer`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorldGraph {
    pub rooms: BTreeMap<String, Room>,
    pub room_order: RoomOrder,
}

impl WorldGraph {
    /// Rooms by ascending index, unknown rooms first, ties by name.
    pub fn rooms_by_index(&self) -> Vec<&Room> {
        let mut rooms: Vec<&Room> = self.rooms.values().collect();
        rooms.sort_by(|a, b| a.index.cmp(&b.index).then_with(|| a.name.cmp(&b.name)));
        rooms
    }

    /// Every warp with an integer target, in room-index then document order.
    pub fn edges(&self) -> Vec<WarpEdge<'_>> {
        self.rooms_by_index()
            .into_iter()
            .flat_map(|room| {
                room.warps.iter().filter_map(move |warp| {
                    warp.target_index().map(|target| WarpEdge {
                        from: room,
                        warp,
                        target,
                        target_name: self.room_order.display_name(target),
                    })
                })
            })
            .collect()
    }
}
