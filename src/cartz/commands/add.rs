use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::{parsed_quantity, validated_name};

pub fn run<S: DataStore>(store: &mut S, name: &str, quantity: &str) -> Result<CmdResult> {
    // Validate both inputs before touching the store, so a failed add is
    // a no-op.
    let name = validated_name(name)?;
    let quantity = parsed_quantity(quantity)?;

    let item = store.insert_item(name, quantity)?;
    let mut result = CmdResult::default().with_listed_items(store.list_items()?);
    result.add_message(CmdMessage::success(format!(
        "Added ({}): {}",
        item.id, item.name
    )));
    result.affected_items.push(item);

    Ok(result)
}
