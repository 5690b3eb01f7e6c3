use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ItemId;
use crate::store::DataStore;

use super::helpers::{parsed_quantity, set_editing_only, validated_name};

/// Opens the inline editor for one item: its edit flag goes on, every
/// other item's goes off.
pub fn begin<S: DataStore>(store: &mut S, id: ItemId) -> Result<CmdResult> {
    // Not-found is checked before any flag is touched.
    let item = store.get_item(id)?;
    set_editing_only(store, Some(item.id))?;

    let mut result = CmdResult::default().with_listed_items(store.list_items()?);
    result.add_message(CmdMessage::info(format!(
        "Editing ({}): {}",
        item.id, item.name
    )));
    result.affected_items.push(store.get_item(id)?);

    Ok(result)
}

/// Commits an edit: validates like add, overwrites the target's name and
/// quantity through replace-by-id, and clears every edit flag.
///
/// A validation failure leaves the store untouched, edit flag included,
/// so a UI can keep its editor open and re-prompt.
pub fn finish<S: DataStore>(
    store: &mut S,
    id: ItemId,
    name: &str,
    quantity: &str,
) -> Result<CmdResult> {
    let mut item = store.get_item(id)?;
    let name = validated_name(name)?;
    let quantity = parsed_quantity(quantity)?;

    item.name = name;
    item.quantity = quantity;
    item.is_editing = false;
    store.replace_item(&item)?;
    // Sweep the rest as well, in case an editor was left open elsewhere.
    set_editing_only(store, None)?;

    let mut result = CmdResult::default().with_listed_items(store.list_items()?);
    result.add_message(CmdMessage::success(format!(
        "Saved ({}): {}",
        item.id, item.name
    )));
    result.affected_items.push(item);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::CartzError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::MemoryStore;

    fn editing_ids<S: DataStore>(store: &S) -> Vec<ItemId> {
        store
            .list_items()
            .unwrap()
            .into_iter()
            .filter(|i| i.is_editing)
            .map(|i| i.id)
            .collect()
    }

    #[test]
    fn begin_marks_exactly_one_item() {
        let mut store = StoreFixture::new().with_items(3).store;
        begin(&mut store, 2).unwrap();
        assert_eq!(editing_ids(&store), vec![2]);
    }

    #[test]
    fn begin_moves_the_flag_between_items() {
        let mut store = StoreFixture::new().with_items(3).store;
        begin(&mut store, 1).unwrap();
        begin(&mut store, 3).unwrap();
        assert_eq!(editing_ids(&store), vec![3]);
    }

    #[test]
    fn begin_on_unknown_id_changes_nothing() {
        let mut store = StoreFixture::new().with_items(2).store;
        assert!(matches!(
            begin(&mut store, 9),
            Err(CartzError::ItemNotFound(9))
        ));
        assert!(editing_ids(&store).is_empty());
    }

    #[test]
    fn finish_updates_fields_and_clears_all_flags() {
        let mut store = MemoryStore::new();
        add::run(&mut store, "Milk", "2").unwrap();
        add::run(&mut store, "Bread", "1").unwrap();
        begin(&mut store, 1).unwrap();

        let result = finish(&mut store, 1, "Oat Milk", "3").unwrap();
        assert_eq!(result.affected_items[0].name, "Oat Milk");
        assert_eq!(result.affected_items[0].quantity, 3);
        assert!(editing_ids(&store).is_empty());

        // Size and the other item's fields are untouched.
        let items = store.list_items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "Bread");
        assert_eq!(items[1].quantity, 1);
    }

    #[test]
    fn finish_sweeps_stray_editor_flags() {
        // Flags forced on two rows behind the commands' back.
        let mut store = StoreFixture::new()
            .with_editing_item("Milk", 2)
            .with_editing_item("Bread", 1)
            .store;

        finish(&mut store, 1, "Milk", "2").unwrap();
        assert!(editing_ids(&store).is_empty());
    }

    #[test]
    fn finish_validates_like_add() {
        let mut store = MemoryStore::new();
        add::run(&mut store, "Milk", "2").unwrap();
        begin(&mut store, 1).unwrap();

        assert!(matches!(
            finish(&mut store, 1, "  ", "3"),
            Err(CartzError::BlankName)
        ));
        assert!(matches!(
            finish(&mut store, 1, "Milk", "lots"),
            Err(CartzError::InvalidQuantity(_))
        ));

        // The failed commits changed nothing: values intact, editor
        // still open.
        let item = store.get_item(1).unwrap();
        assert_eq!(item.name, "Milk");
        assert_eq!(item.quantity, 2);
        assert!(item.is_editing);
    }

    #[test]
    fn finish_on_unknown_id_fails() {
        let mut store = StoreFixture::new().with_items(1).store;
        assert!(matches!(
            finish(&mut store, 9, "Milk", "2"),
            Err(CartzError::ItemNotFound(9))
        ));
    }
}
