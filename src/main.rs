use anyhow::Result;
use statsboard::cli::App;

#[tokio::main]
async fn main() -> Result<()> {
    let mut app = App::from_args()?;
    let args = statsboard::cli::Args::parse_args();

    app.run(args).await?;

    Ok(())
}
