//! Grid item ordering.
use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Once;

use crate::config::FolderPosition;
use crate::models::GridItem;

static MISSING_ID_WARNING: Once = Once::new();

/// Total order over grid items under a folder placement policy.
///
/// Folders are identified by id membership in `folder_ids`, matching how the
/// host stores folder groupings; the `kind` tag on the item is not consulted.
/// Ties are broken by display name, then by id, so repeated sorts of the same
/// grid always land in the same order.
pub fn compare_items(
    a: &GridItem,
    b: &GridItem,
    position: FolderPosition,
    folder_ids: &HashSet<String>,
) -> Ordering {
    let a_is_folder = is_folder(a, folder_ids);
    let b_is_folder = is_folder(b, folder_ids);

    if a_is_folder != b_is_folder {
        match position {
            FolderPosition::Top => {
                return if a_is_folder {
                    Ordering::Less
                } else {
                    Ordering::Greater
                };
            }
            FolderPosition::Bottom => {
                return if a_is_folder {
                    Ordering::Greater
                } else {
                    Ordering::Less
                };
            }
            // Folders interleave with applications by name.
            FolderPosition::Alphabetical => {}
        }
    }

    compare_names(a, b)
}

fn compare_names(a: &GridItem, b: &GridItem) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.id.cmp(&b.id))
}

// An entry without a resolvable id cannot be matched against the folder
// list, so it is treated as a plain application.
fn is_folder(item: &GridItem, folder_ids: &HashSet<String>) -> bool {
    if item.id.is_empty() {
        MISSING_ID_WARNING.call_once(|| {
            tracing::warn!("grid entry without an id, treating as an application");
        });
        return false;
    }
    folder_ids.contains(&item.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder_set(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|id| (*id).to_string()).collect()
    }

    fn sample_items() -> Vec<GridItem> {
        vec![
            GridItem::folder("folder1", "Zeta"),
            GridItem::folder("folder2", "accessories"),
            GridItem::application("gimp.desktop", "gimp"),
            GridItem::application("files-a.desktop", "Files"),
            GridItem::application("files-b.desktop", "Files"),
            GridItem::application("inkscape.desktop", "Inkscape"),
        ]
    }

    #[test]
    fn folders_sort_first_when_position_is_top() {
        let folders = folder_set(&["folder1"]);
        let folder = GridItem::folder("folder1", "Zeta");
        let app = GridItem::application("alpha.desktop", "Alpha");

        assert_eq!(
            compare_items(&folder, &app, FolderPosition::Top, &folders),
            Ordering::Less
        );
        assert_eq!(
            compare_items(&app, &folder, FolderPosition::Top, &folders),
            Ordering::Greater
        );
    }

    #[test]
    fn folders_sort_last_when_position_is_bottom() {
        let folders = folder_set(&["folder1"]);
        let folder = GridItem::folder("folder1", "Zeta");
        let app = GridItem::application("alpha.desktop", "Alpha");

        assert_eq!(
            compare_items(&folder, &app, FolderPosition::Bottom, &folders),
            Ordering::Greater
        );
        assert_eq!(
            compare_items(&app, &folder, FolderPosition::Bottom, &folders),
            Ordering::Less
        );
    }

    #[test]
    fn folders_interleave_by_name_when_position_is_alphabetical() {
        let folders = folder_set(&["folder1"]);
        let folder = GridItem::folder("folder1", "Zeta");
        let app = GridItem::application("alpha.desktop", "Alpha");

        assert_eq!(
            compare_items(&app, &folder, FolderPosition::Alphabetical, &folders),
            Ordering::Less
        );
    }

    #[test]
    fn names_compare_case_insensitively() {
        let a = GridItem::application("gimp.desktop", "gimp");
        let b = GridItem::application("inkscape.desktop", "Inkscape");

        assert_eq!(
            compare_items(&a, &b, FolderPosition::Top, &HashSet::new()),
            Ordering::Less
        );
    }

    #[test]
    fn equal_names_fall_back_to_id_order() {
        let a = GridItem::application("files-a.desktop", "Files");
        let b = GridItem::application("files-b.desktop", "Files");

        assert_eq!(
            compare_items(&a, &b, FolderPosition::Top, &HashSet::new()),
            Ordering::Less
        );
        assert_eq!(
            compare_items(&b, &a, FolderPosition::Top, &HashSet::new()),
            Ordering::Greater
        );
        assert_eq!(
            compare_items(&a, &a, FolderPosition::Top, &HashSet::new()),
            Ordering::Equal
        );
    }

    #[test]
    fn comparison_is_antisymmetric() {
        let folders = folder_set(&["folder1", "folder2"]);
        let items = sample_items();
        for position in [
            FolderPosition::Top,
            FolderPosition::Bottom,
            FolderPosition::Alphabetical,
        ] {
            for a in &items {
                for b in &items {
                    assert_eq!(
                        compare_items(a, b, position, &folders),
                        compare_items(b, a, position, &folders).reverse(),
                        "{} vs {} under {:?}",
                        a.id,
                        b.id,
                        position
                    );
                }
            }
        }
    }

    #[test]
    fn comparison_is_transitive() {
        let folders = folder_set(&["folder1", "folder2"]);
        let items = sample_items();
        for position in [
            FolderPosition::Top,
            FolderPosition::Bottom,
            FolderPosition::Alphabetical,
        ] {
            for a in &items {
                for b in &items {
                    for c in &items {
                        let ab = compare_items(a, b, position, &folders);
                        let bc = compare_items(b, c, position, &folders);
                        if ab == bc && ab != Ordering::Equal {
                            assert_eq!(
                                compare_items(a, c, position, &folders),
                                ab,
                                "{} {} {} under {:?}",
                                a.id,
                                b.id,
                                c.id,
                                position
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn repeated_sorts_land_in_the_same_order() {
        let folders = folder_set(&["folder1", "folder2"]);
        let mut first = sample_items();
        first.sort_by(|a, b| compare_items(a, b, FolderPosition::Top, &folders));

        let mut second = sample_items();
        second.reverse();
        second.sort_by(|a, b| compare_items(a, b, FolderPosition::Top, &folders));

        assert_eq!(first, second);
    }

    #[test]
    fn entries_without_an_id_are_treated_as_applications() {
        let folders = folder_set(&["folder1"]);
        let folder = GridItem::folder("folder1", "Accessories");
        let nameless = GridItem::application("", "Mystery");

        // Fail-open: the unidentified entry sorts with the applications.
        assert_eq!(
            compare_items(&nameless, &folder, FolderPosition::Top, &folders),
            Ordering::Greater
        );
        assert_eq!(
            compare_items(&nameless, &folder, FolderPosition::Bottom, &folders),
            Ordering::Less
        );
    }

    #[test]
    fn empty_folder_set_behaves_alphabetically() {
        let folder = GridItem::folder("folder1", "Zeta");
        let app = GridItem::application("alpha.desktop", "Alpha");

        assert_eq!(
            compare_items(&folder, &app, FolderPosition::Top, &HashSet::new()),
            Ordering::Greater
        );
    }
}
