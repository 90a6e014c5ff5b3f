use anyhow::Result;

use trivia_core::category_map;
use trivia_service::CategoryService;

use crate::connect;

pub(crate) async fn run() -> Result<()> {
    let service = CategoryService::new(connect().await?);
    let categories = service.list_categories().await?;
    println!("{}", serde_json::to_string_pretty(&category_map(&categories))?);
    Ok(())
}
