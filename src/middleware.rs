use axum::{
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

/// Every page here is HTML, and every request gets one log line.
pub async fn html_headers<B>(request: Request<B>, next: Next<B>) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let mut response = next.run(request).await;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    log::info!("{} {} -> {}", method, path, response.status());

    response
}
