use anyhow::{Context, Result};
use dsync_config::{DEFAULT_CONFIG_TEMPLATE, config_file_path};

pub fn handle(force: bool) -> Result<i32> {
    let cfg_path = config_file_path()?;

    match std::fs::metadata(&cfg_path) {
        Ok(_) if !force => {
            eprintln!("init: config already exists: {}", cfg_path.display());
            eprintln!("init: re-run with --force to overwrite");
            return Ok(1);
        }
        Ok(_) => {}
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(err).context("unable to stat config"),
    }

    if let Some(parent) = cfg_path.parent() {
        std::fs::create_dir_all(parent).context("unable to create config directory")?;
    }
    std::fs::write(&cfg_path, DEFAULT_CONFIG_TEMPLATE).context("unable to write config")?;

    println!("Wrote {}", cfg_path.display());
    Ok(0)
}
