use mock_backend::app;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let addr =
        std::env::var("MOCK_BACKEND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = TcpListener::bind(&addr).await?;
    println!("mock backend listening on http://{}", listener.local_addr()?);
    mock_backend::run(listener, app()).await
}
