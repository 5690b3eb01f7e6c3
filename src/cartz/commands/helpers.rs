use crate::error::{CartzError, Result};
use crate::model::ItemId;
use crate::store::DataStore;

/// Trims and validates a name about to be committed. Blank input (empty
/// or whitespace-only) is rejected; the trimmed form is what gets stored.
pub fn validated_name(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CartzError::BlankName);
    }
    Ok(trimmed.to_string())
}

/// Parses quantity text. Anything that is not a whole number of 0 or
/// more is rejected; there is no silent default.
pub fn parsed_quantity(input: &str) -> Result<u32> {
    input
        .trim()
        .parse()
        .map_err(|_| CartzError::InvalidQuantity(input.trim().to_string()))
}

/// Makes `target` the only editing item (or no item at all, for `None`),
/// replacing just the rows whose flag actually changes. This is where
/// the at-most-one-editing invariant is enforced.
pub fn set_editing_only<S: DataStore>(store: &mut S, target: Option<ItemId>) -> Result<()> {
    for mut item in store.list_items()? {
        let editing = Some(item.id) == target;
        if item.is_editing != editing {
            item.is_editing = editing;
            store.replace_item(&item)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::DataStore;

    #[test]
    fn validated_name_trims() {
        assert_eq!(validated_name("  Milk  ").unwrap(), "Milk");
    }

    #[test]
    fn validated_name_rejects_blank() {
        assert!(matches!(validated_name(""), Err(CartzError::BlankName)));
        assert!(matches!(validated_name("   "), Err(CartzError::BlankName)));
    }

    #[test]
    fn parsed_quantity_accepts_zero_and_trims() {
        assert_eq!(parsed_quantity("0").unwrap(), 0);
        assert_eq!(parsed_quantity(" 12 ").unwrap(), 12);
    }

    #[test]
    fn parsed_quantity_rejects_non_numeric_and_negative() {
        assert!(matches!(
            parsed_quantity("two"),
            Err(CartzError::InvalidQuantity(_))
        ));
        assert!(matches!(
            parsed_quantity("-1"),
            Err(CartzError::InvalidQuantity(_))
        ));
        assert!(matches!(
            parsed_quantity("1.5"),
            Err(CartzError::InvalidQuantity(_))
        ));
        assert!(matches!(
            parsed_quantity(""),
            Err(CartzError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn set_editing_only_flips_exactly_one_flag_on() {
        let mut store = StoreFixture::new().with_items(3).store;
        set_editing_only(&mut store, Some(2)).unwrap();

        let editing: Vec<_> = store
            .list_items()
            .unwrap()
            .into_iter()
            .filter(|i| i.is_editing)
            .map(|i| i.id)
            .collect();
        assert_eq!(editing, vec![2]);
    }

    #[test]
    fn set_editing_only_none_clears_every_flag() {
        let mut store = StoreFixture::new()
            .with_editing_item("Milk", 2)
            .with_editing_item("Bread", 1)
            .store;
        set_editing_only(&mut store, None).unwrap();

        assert!(store.list_items().unwrap().iter().all(|i| !i.is_editing));
    }
}
