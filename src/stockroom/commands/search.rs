use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ProductId;
use crate::store::Inventory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    Id(ProductId),
    /// Case-sensitive substring match on the name. Without `all`, only the
    /// first match in store order is returned.
    Name { term: String, all: bool },
}

pub fn run(inventory: &Inventory, query: &SearchQuery) -> Result<CmdResult> {
    let found: Vec<_> = match query {
        SearchQuery::Id(id) => inventory.find_by_id(*id).into_iter().cloned().collect(),
        SearchQuery::Name { term, all: false } => {
            inventory.find_by_name(term).into_iter().cloned().collect()
        }
        SearchQuery::Name { term, all: true } => inventory
            .find_all_by_name(term)
            .into_iter()
            .cloned()
            .collect(),
    };

    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info("No matching product found."));
    }
    Ok(result.with_listed_products(found))
}
