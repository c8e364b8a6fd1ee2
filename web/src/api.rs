use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use std::rc::Rc;
use trivia_core as trivia;
use trivia_protocol as protocol;

/// [`trivia::DataSource`] backed by the jService HTTP API.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct JService {
    base: Rc<str>,
}

impl JService {
    pub(crate) fn new(base: &str) -> Self {
        Self { base: base.into() }
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, gloo::net::Error> {
    log::debug!("GET {}", url);
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(gloo::net::Error::GlooError(format!(
            "{} answered with HTTP {}",
            url,
            response.status()
        )));
    }
    response.json().await
}

/// Keeps only playable clues, with markup stripped from every text.
pub(crate) fn category_data(detail: protocol::CategoryDetail) -> trivia::CategoryData {
    let total = detail.clues.len();
    let clues: Vec<_> = detail
        .clues
        .iter()
        .filter(|clue| clue.is_playable())
        .map(|clue| trivia::ClueData {
            question: clue.question_text(),
            answer: clue.answer_text(),
        })
        .collect();
    if clues.len() != total {
        log::debug!(
            "category {}: skipped {} unplayable clues",
            detail.id,
            total - clues.len()
        );
    }
    trivia::CategoryData {
        title: protocol::plain_text(&detail.title),
        clues,
    }
}

impl trivia::DataSource for JService {
    type Error = gloo::net::Error;

    async fn list_category_ids(&self) -> Result<Vec<trivia::CategoryId>, Self::Error> {
        let url = protocol::categories_url(&self.base, protocol::CATEGORY_POOL_SIZE);
        let categories: Vec<protocol::CategorySummary> = get_json(&url).await?;
        Ok(categories.into_iter().map(|cat| cat.id).collect())
    }

    async fn category_detail(
        &self,
        id: trivia::CategoryId,
    ) -> Result<trivia::CategoryData, Self::Error> {
        let url = protocol::category_url(&self.base, id);
        let detail: protocol::CategoryDetail = get_json(&url).await?;
        Ok(category_data(detail))
    }
}
