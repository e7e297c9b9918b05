use anyhow::Result;
use genconf::cli::App;

fn main() -> Result<()> {
    let mut app = App::from_args()?;
    let args = genconf::cli::Args::parse_args();

    app.run(args)?;

    Ok(())
}
