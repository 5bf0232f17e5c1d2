use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ProductId;
use crate::store::Inventory;

pub fn run(inventory: &mut Inventory, id: ProductId) -> Result<CmdResult> {
    let removed = inventory.remove(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product removed ({}): {}",
        removed.id, removed.name
    )));
    Ok(result.with_affected_products(vec![removed]))
}
