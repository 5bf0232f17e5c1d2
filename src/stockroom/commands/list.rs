use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::Inventory;

pub fn run(inventory: &Inventory) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_products(inventory.list_all().to_vec()))
}
