use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Размер ответа в читаемом виде: `512 B`, `1.5 KB`, `2.0 MB`
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let value = bytes as f64;
    if value >= MB {
        format!("{:.1} MB", value / MB)
    } else if value >= KB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{} B", bytes)
    }
}

/// Логирование запросов: метод, путь, статус, время и реальный размер тела
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                status = parts.status.as_u16(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "{} {} body error: {}",
                method,
                uri.path(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let status = parts.status.as_u16();
    let elapsed_ms = start.elapsed().as_millis() as u64;
    let size = format_size(bytes.len());
    if parts.status.is_success() {
        tracing::info!(status, elapsed_ms, size = %size, "{} {}", method, uri.path());
    } else {
        tracing::warn!(status, elapsed_ms, size = %size, "{} {}", method, uri.path());
    }

    Response::from_parts(parts, Body::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(2 * 1024 * 1024), "2.0 MB");
    }
}
