use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

/// The single-page chat UI, embedded in the binary.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(include_str!("../../static/index.html"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_index_serves_html() {
        let resp = index().await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
    }
}
