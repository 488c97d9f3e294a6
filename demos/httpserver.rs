//! A small HTTP server showing fixed-length pages, error pages, and a
//! chunked response with trailers.
//!
//! Try it with:
//!
//! ```text
//! curl -v http://localhost:42069/
//! curl -v http://localhost:42069/yourproblem
//! curl -v --raw http://localhost:42069/stream/5
//! ```

use log::{error, info};
use sha2::{Digest, Sha256};
use rawhttp::{
    default_headers, HeaderMap, HttpServer, Request, ResponseError, ResponseWriter, StatusCode,
};

const PORT: u16 = 42069;

const BAD_REQUEST_PAGE: &str = "<html>
  <head>
    <title>400 Bad Request</title>
  </head>
  <body>
    <h1>Bad Request</h1>
    <p>Your request honestly kinda sucked.</p>
  </body>
</html>
";

const SERVER_ERROR_PAGE: &str = "<html>
  <head>
    <title>500 Internal Server Error</title>
  </head>
  <body>
    <h1>Internal Server Error</h1>
    <p>Okay, you know what? This one is on me.</p>
  </body>
</html>
";

const SUCCESS_PAGE: &str = "<html>
  <head>
    <title>200 OK</title>
  </head>
  <body>
    <h1>Success!</h1>
    <p>Your request was an absolute banger.</p>
  </body>
</html>
";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let server = HttpServer::serve_port(PORT, handler).await?;
    info!("Server started on port {PORT}");

    tokio::signal::ctrl_c().await?;

    server.close().await?;
    info!("Server gracefully stopped");
    Ok(())
}

fn handler(w: &mut ResponseWriter, req: &Request) {
    let target = req.target();
    let result = match target {
        "/yourproblem" => html_page(w, StatusCode::BAD_REQUEST, BAD_REQUEST_PAGE),
        "/myproblem" => html_page(w, StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_PAGE),
        _ => match target.strip_prefix("/stream/").map(str::parse::<usize>) {
            Some(Ok(lines)) => stream_lines(w, lines),
            Some(Err(_)) => html_page(w, StatusCode::BAD_REQUEST, BAD_REQUEST_PAGE),
            None => html_page(w, StatusCode::OK, SUCCESS_PAGE),
        },
    };

    if let Err(e) = result {
        error!("Failed to write response for {target}: {e}");
    }
}

fn html_page(w: &mut ResponseWriter, status: StatusCode, body: &str) -> Result<(), ResponseError> {
    let mut headers = default_headers(body.len());
    headers.replace("Content-Type", "text/html");

    w.write_status_line(status)?;
    w.write_headers(&headers)?;
    w.write_body(body.as_bytes())?;
    Ok(())
}

/// Send `lines` JSON lines as separate chunks, then report the body's size
/// and SHA-256 digest in trailers.
fn stream_lines(w: &mut ResponseWriter, lines: usize) -> Result<(), ResponseError> {
    let mut headers = default_headers(0);
    headers.remove("Content-Length");
    headers.replace("Content-Type", "application/json");
    headers.set("Transfer-Encoding", "chunked");
    headers.set("Trailer", "X-Content-SHA256, X-Content-Length");

    w.write_status_line(StatusCode::OK)?;
    w.write_headers(&headers)?;

    let mut hasher = Sha256::new();
    let mut total = 0;
    for id in 0..lines {
        let line = serde_json::json!({ "id": id, "message": "hello" }).to_string() + "\n";
        w.write_chunked_body(line.as_bytes())?;
        hasher.update(line.as_bytes());
        total += line.len();
    }
    w.write_chunked_body_done()?;

    let mut trailers = HeaderMap::new();
    trailers.set("X-Content-SHA256", format!("{:x}", hasher.finalize()));
    trailers.set("X-Content-Length", total.to_string());
    w.write_trailers(&trailers)
}
