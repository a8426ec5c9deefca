//! Object-name catalogue and the rule table that sorts instances into
//! room collections.
//!
//! Rules are tried top to bottom and the first hit wins:
//!
//! 1. exact spawn marker            → [`Category::SpawnPoint`]
//! 2. `warp_` prefix                → [`Category::Warp`]
//! 3. `NPC_` prefix                 → [`Category::Npc`]
//! 4. one of [`ShopObject`]         → [`Category::Shop`]
//! 5. one of [`SpecialObject`]      → [`Category::Special`]
//! 6. anything else is dropped.

pub const SPAWN_MARKER: &str = "obj_slimepoint";
pub const WARP_PREFIX: &str = "warp_";
pub const NPC_PREFIX: &str = "NPC_";

macro_rules! catalogue {
    ($(#[$meta:meta])* $ty:ident { $($variant:ident => $name:literal,)* }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $ty {
            $($variant,)*
        }

        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant,)*];

            pub fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)*
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some($ty::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

catalogue! {
    /// Shop fixtures.
    ShopObject {
        ShopItem => "obj_shop_item",
        ShopCallItem => "obj_shop_call_item",
        SellSign => "obj_sell_sign",
    }
}

catalogue! {
    /// Interactive objects the server has to know the location of.
    SpecialObject {
        Bank => "obj_bank",
        Mailbox => "obj_mailbox",
        StorageBox => "obj_storage_box",
        SavePoint => "obj_save_bg",
        ClockStand => "obj_clock_stand",
        WarpCenter => "obj_warpcenter",
        ClanMachine => "obj_clan_machine",
        PostOffice => "obj_post_office",
        GumMachine => "obj_gum_machine",
        SodaMachine => "obj_soda_machine",
        Upgrader => "obj_upgrader",
        PlantingField => "Planting_Field",
        BuildingSpot => "Building_Spot",
        Drill => "obj_drill",
        RaceMachine => "obj_race_machine",
        RaceStartVertical => "obj_race_start_ver",
        RaceStartHorizontal => "obj_race_start_hor",
        RaceEndVertical => "obj_race_end_ver",
        RaceEndHorizontal => "obj_race_end_hor",
        Teleporter => "obj_teleporter",
        MusicChanger => "obj_music_changer",
        Billboard => "obj_billboard",
        Combinator => "obj_combinator",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    SpawnPoint,
    Warp,
    Npc,
    Shop(ShopObject),
    Special(SpecialObject),
}

/// Apply the rule table; `None` means the instance is discarded.
pub fn classify(obj_name: &str) -> Option<Category> {
    if obj_name == SPAWN_MARKER {
        Some(Category::SpawnPoint)
    } else if obj_name.starts_with(WARP_PREFIX) {
        Some(Category::Warp)
    } else if obj_name.starts_with(NPC_PREFIX) {
        Some(Category::Npc)
    } else if let Some(shop) = ShopObject::from_name(obj_name) {
        Some(Category::Shop(shop))
    } else {
        SpecialObject::from_name(obj_name).map(Category::Special)
    }
}
