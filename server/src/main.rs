#[tokio::main]
async fn main() {
    cardinal::start_server().await;
}
