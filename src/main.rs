use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use kiln::config::{self, ConfigWatcher, SharedConfig};
use kiln::{gallery, RenderContext, Theme, Viewport};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const WATCH_POLL: Duration = Duration::from_millis(250);

#[derive(Debug)]
struct Options {
    viewport: Viewport,
    config_path: PathBuf,
    watch: bool,
    window: bool,
}

enum Command {
    Run(Options),
    Help,
    Version,
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = Options {
        viewport: Viewport::new(800.0, 600.0),
        config_path: config::get_config_path(),
        watch: false,
        window: false,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-v" | "--version" => return Ok(Command::Version),
            "--watch" => options.watch = true,
            "--window" => options.window = true,
            "--width" | "--height" | "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("Missing value for {}", arg))?;
                match arg.as_str() {
                    "--config" => options.config_path = PathBuf::from(value),
                    flag => {
                        let px: f32 = value
                            .parse()
                            .ok()
                            .filter(|v: &f32| v.is_finite() && *v > 0.0)
                            .ok_or_else(|| format!("Invalid value for {}: {}", flag, value))?;
                        if flag == "--width" {
                            options.viewport.width = px;
                        } else {
                            options.viewport.height = px;
                        }
                    }
                }
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(Command::Run(options))
}

fn print_help() {
    println!(
        "kiln {}
Renders the component gallery and prints its view tree as JSON

USAGE:
    kiln [OPTIONS]

OPTIONS:
    --width <PX>       Viewport width (default 800)
    --height <PX>      Viewport height (default 600)
    --config <PATH>    Tokens file (default ~/.config/kiln/tokens.toml)
    --watch            Re-render whenever the tokens file changes
    --window           Open the gallery in a window (requires the gpui feature)
    -h, --help         Print this help message
    -v, --version      Print version information

ENVIRONMENT:
    RUST_LOG           Set log level (error, warn, info, debug, trace)

EXAMPLES:
    kiln --width 1280               Desktop-tier gallery
    RUST_LOG=debug kiln --watch     Live-reload tokens with debug logging",
        VERSION
    );
}

fn print_gallery(shared: &SharedConfig, viewport: Viewport) {
    let theme = match shared.read() {
        Ok(cfg) => Theme::from_config(&cfg),
        Err(_) => {
            log::warn!("Tokens lock poisoned; rendering with defaults");
            Theme::default()
        }
    };
    let tree = gallery::build(&RenderContext::new(&theme, viewport));
    match serde_json::to_string_pretty(&tree) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize view tree: {}", e),
    }
}

fn watch(shared: SharedConfig, options: &Options) {
    let watcher = match ConfigWatcher::new(shared.clone(), options.config_path.clone()) {
        Ok(watcher) => watcher,
        Err(e) => {
            log::error!("Failed to watch tokens file: {}", e);
            std::process::exit(1);
        }
    };

    let running = Arc::new(AtomicBool::new(true));
    let flag = running.clone();
    if let Err(e) = ctrlc::set_handler(move || flag.store(false, Ordering::SeqCst)) {
        log::warn!("Failed to install signal handler: {}", e);
    }

    while running.load(Ordering::SeqCst) {
        if watcher.check_and_reload() {
            print_gallery(&shared, options.viewport);
        }
        std::thread::sleep(WATCH_POLL);
    }
    log::info!("Stopped watching");
}

#[cfg(feature = "gpui")]
fn open_window(shared: SharedConfig, viewport: Viewport) {
    kiln::gpui_app::run(shared, viewport, Box::new(gallery::build));
}

#[cfg(not(feature = "gpui"))]
fn open_window(_shared: SharedConfig, _viewport: Viewport) {
    eprintln!("kiln was built without the gpui feature; --window is unavailable.");
    std::process::exit(1);
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            print_help();
            return;
        }
        Ok(Command::Version) => {
            println!("kiln {}", VERSION);
            return;
        }
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("Try 'kiln --help' for more information.");
            std::process::exit(1);
        }
    };

    // Logs go to stderr so stdout stays valid JSON.
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    logger
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{} {:>5} {}] {}",
                chrono::Utc::now().to_rfc3339(),
                record.level(),
                record.target(),
                record.args()
            )?;
            buf.flush()
        })
        .init();

    log::info!("Starting kiln v{}", VERSION);
    log::debug!("Options: {:?}", options);

    let shared: SharedConfig = Arc::new(RwLock::new(config::load_config_from(
        &options.config_path,
    )));

    if options.window {
        open_window(shared, options.viewport);
        return;
    }

    print_gallery(&shared, options.viewport);
    if options.watch {
        watch(shared, &options);
    }
}
