use anyhow::{Result, bail};
use dsync_config::Config;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

pub fn handle(endpoint: Option<&str>, link: Option<&str>, _json: bool) -> Result<i32> {
    let cfg = Config::load()?;

    if let Some(name) = endpoint
        && !cfg.endpoints.contains_key(name)
    {
        bail!("unknown endpoint \"{name}\"");
    }
    if let Some(name) = link
        && !cfg.links.contains_key(name)
    {
        bail!("unknown link \"{name}\"");
    }

    if let Some(path) = &cfg.file_path {
        println!("Config: {}", path.display());
    }
    println!("Endpoints: {}", cfg.endpoints.len());
    println!("Links: {}", cfg.links.len());

    if std::io::stdout().is_terminal() {
        println!("{}", "OK".green().bold());
    } else {
        println!("OK");
    }
    Ok(0)
}
