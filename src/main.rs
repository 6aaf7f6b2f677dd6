use clap::Parser;
use mesa::StartView;
use mesa::core::config;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "mesa", about = "Terminal catalog of restaurants you've visited")]
struct Args {
    /// Presentation mode at startup
    #[arg(short, long, value_enum)]
    view: Option<StartView>,

    /// Start with the dark palette
    #[arg(long)]
    dark: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("mesa: {e}, using defaults");
        Default::default()
    });
    let resolved = config::resolve(&file_config, args.view.map(Into::into), args.dark);

    // Initialize file logger - writes to mesa.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("mesa.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("Mesa starting up in {:?} view", resolved.start_view);

    mesa::tui::run(resolved)
}
