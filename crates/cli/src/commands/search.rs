use anyhow::Result;

use trivia_core::PageRequest;
use trivia_service::QuestionService;

use crate::connect;

pub(crate) async fn run(term: String, page: u32) -> Result<()> {
    let page = PageRequest::new(page)?;
    let service = QuestionService::new(connect().await?);
    let result = service.search_questions(&term, page).await?;
    let output = serde_json::json!({
        "questions": result.questions,
        "total_questions": result.total_questions,
        "page": page,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
