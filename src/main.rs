#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    denver_listings::start_server().await;
}
