use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = gatherup::cli::parse();
    app::run(args)
}
