//! Accept connections one at a time and print every request that arrives.
//!
//! Useful for seeing exactly what a client sends:
//!
//! ```text
//! curl -X POST -d '{"flavor":"dark mode"}' http://localhost:42069/coffee
//! ```

use log::{error, info};
use rawhttp::read_request;
use tokio::net::TcpListener;

const ADDR: &str = "0.0.0.0:42069";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let listener = TcpListener::bind(ADDR).await?;
    info!("Listening on {ADDR}");

    loop {
        let (mut socket, addr) = listener.accept().await?;
        info!("A connection has been accepted from {addr}");

        match read_request(&mut socket, 8).await {
            Ok(req) => {
                println!("Request line:");
                println!("- Method: {}", req.method());
                println!("- Target: {}", req.target());
                println!("- Version: {}", req.request_line.version);
                println!("Headers:");
                for (name, value) in req.headers.iter() {
                    println!("- {name}: {value}");
                }
                println!("Body:");
                println!("{}", String::from_utf8_lossy(&req.body));
            }
            Err(e) => error!("Error parsing request from {addr}: {e}"),
        }

        info!("Connection from {addr} has been closed");
    }
}
