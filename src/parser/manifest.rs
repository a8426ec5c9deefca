//! Project manifest (`*.project.gmx`) parser: yields the canonical room order.

use std::path::Path;

use roxmltree::Document;
use tracing::warn;

use crate::error::{DocumentError, DocumentResult};

pub const MANIFEST_SUFFIX: &str = ".project.gmx";

/// Name attribute of the `<rooms>` group holding the listing.
pub const ROOMS_SECTION: &str = "rooms";

/// Prefix each listed entry carries in the manifest.
pub const ROOM_PATH_PREFIX: &str = "rooms\\";

/// Room names in manifest order.
pub fn parse_manifest(path: &Path, xml: &str) -> DocumentResult<Vec<String>> {
    let doc = Document::parse(xml).map_err(|source| DocumentError::Markup {
        path: path.to_path_buf(),
        source,
    })?;

    let section = doc
        .descendants()
        .find(|n| n.has_tag_name("rooms") && n.attribute("name") == Some(ROOMS_SECTION))
        .ok_or_else(|| DocumentError::MissingSection {
            path: path.to_path_buf(),
            section: ROOMS_SECTION,
        })?;

    Ok(section
        .children()
        .filter(|n| n.has_tag_name("room"))
        .filter_map(|n| n.text())
        .filter(|text| !text.is_empty())
        .map(|text| text.replace(ROOM_PATH_PREFIX, ""))
        .collect())
}

/// Read and parse the manifest. Any failure degrades to an empty order.
pub fn load_manifest(path: &Path) -> Vec<String> {
    let parsed = std::fs::read_to_string(path)
        .map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|xml| parse_manifest(path, &xml));

    match parsed {
        Ok(order) => order,
        Err(e) => {
            warn!(error = %e, "room order unavailable, every room index will be unknown");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RoomOrder;

    const PATH: &str = "game.project.gmx";

    #[test]
    fn test_prefix_stripped_in_order() {
        let xml = r#"<assets>
            <sprites name="sprites"><sprite>sprites\spr_slime</sprite></sprites>
            <rooms name="rooms">
                <room>rooms\forest</room>
                <room>rooms\town</room>
            </rooms>
        </assets>"#;

        let names = parse_manifest(Path::new(PATH), xml).expect("valid manifest");
        assert_eq!(names, vec!["forest".to_string(), "town".to_string()]);

        let order = RoomOrder::new(names);
        assert_eq!(order.index_of("town"), Some(1));
    }

    #[test]
    fn test_empty_entries_and_nested_groups_skipped() {
        let xml = r#"<assets><rooms name="rooms">
            <room>rooms\a</room>
            <room></room>
            <room/>
            <rooms name="interiors"><room>rooms\inside</room></rooms>
            <room>rooms\b</room>
        </rooms></assets>"#;

        let names = parse_manifest(Path::new(PATH), xml).expect("valid manifest");
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_other_named_group_is_not_the_listing() {
        let xml = r#"<assets><rooms name="levels"><room>rooms\a</room></rooms></assets>"#;
        let err = parse_manifest(Path::new(PATH), xml).expect_err("no rooms section");
        assert!(matches!(err, DocumentError::MissingSection { section: "rooms", .. }));
    }

    #[test]
    fn test_unreadable_manifest_degrades_to_empty() {
        assert!(load_manifest(Path::new("does/not/exist.project.gmx")).is_empty());
    }
}
