use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;
use crate::store::Inventory;

pub fn run(inventory: &mut Inventory, product: Product) -> Result<CmdResult> {
    inventory.add(product.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product added ({}): {}",
        product.id, product.name
    )));
    Ok(result.with_affected_products(vec![product]))
}
