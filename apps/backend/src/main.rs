#[tokio::main]
async fn main() -> anyhow::Result<()> {
    study_helper_backend::run().await
}
