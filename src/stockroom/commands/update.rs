use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ProductId, ProductUpdate};
use crate::store::Inventory;

pub fn run(inventory: &mut Inventory, id: ProductId, update: &ProductUpdate) -> Result<CmdResult> {
    let product = inventory.apply(id, update)?.clone();

    let mut result = CmdResult::default();
    if update.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nothing to change for product {}",
            id
        )));
        return Ok(result);
    }

    result.add_message(CmdMessage::success(format!(
        "Product updated ({}): {}",
        product.id, product.name
    )));
    Ok(result.with_affected_products(vec![product]))
}
