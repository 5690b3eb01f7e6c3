use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ItemId;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: ItemId) -> Result<CmdResult> {
    let item = store.get_item(id)?;
    store.remove_item(id)?;

    let mut result = CmdResult::default().with_listed_items(store.list_items()?);
    result.add_message(CmdMessage::success(format!(
        "Removed ({}): {}",
        item.id, item.name
    )));
    result.affected_items.push(item);

    Ok(result)
}
