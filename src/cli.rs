use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "localfiles",
    about = "Serve a local Movies/Series folder as a catalog and stream addon",
    long_about = None,
    version = env!("GIT_VERSION"),
)]
pub struct Args {
    /// Library root containing Movies/ and Series/<name>/<season>/ [default: /home/Library/Movies And Series]
    #[arg(env = "LOCAL_FILES_DIR")]
    pub root: Option<PathBuf>,

    /// HTTP port to listen on [default: 7000]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Addon name shown in the client's addon list
    #[arg(short, long)]
    pub name: Option<String>,

    /// Path to TOML config file (overrides default search: ./localfiles.toml, ~/.config/localfiles/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Bind to localhost only (127.0.0.1) instead of all interfaces
    #[arg(long)]
    pub localhost: bool,
}
