#[tokio::main]
async fn main() {
    labdesk_dashboard::run().await;
}
