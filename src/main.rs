use ascii_webcam::cli::{handle_config_action, print_presets, Args, Command, Settings};
use ascii_webcam::config::Config;
use ascii_webcam::converter::AsciiConverter;
use ascii_webcam::error::AppError;
use ascii_webcam::event_loop;
use ascii_webcam::source::{FrameSource, TestPattern};
use ascii_webcam::terminal::RawModeGuard;
use clap::Parser;

fn main() {
    // Logs go to stderr so they never mix with the painted frame.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if args.list_presets {
        print_presets();
        return;
    }

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        if let AppError::Convert(ref err) = e {
            if err.is_config_error() {
                eprintln!();
                print_presets();
            }
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = Config::load(args.config.as_deref())?;
    let settings = Settings::resolve(&args, &config)?;

    if let Some(Command::Config { action }) = args.command {
        return handle_config_action(action, &settings, args.config.as_deref());
    }

    let mut converter = AsciiConverter::new(settings.converter);
    let mut source = open_source(&settings)?;
    log::info!("ascii-webcam starting with source {}", source.name());

    let mut guard = RawModeGuard::enter()?;
    let mut stdout = std::io::stdout();
    let result = event_loop::run(source.as_mut(), &mut converter, &settings, &mut stdout);
    guard.exit()?;

    log::info!("ascii-webcam exiting");
    result
}

/// Camera when one is requested, otherwise the test pattern.
fn open_source(settings: &Settings) -> Result<Box<dyn FrameSource>, AppError> {
    let (width, height) = settings.source_size;
    match settings.camera {
        None => Ok(Box::new(TestPattern::new(width, height))),
        #[cfg(feature = "camera")]
        Some(index) => {
            let camera =
                ascii_webcam::source::CameraSource::open(index, width, height, settings.fps)?;
            Ok(Box::new(camera))
        }
        #[cfg(not(feature = "camera"))]
        Some(index) => Err(ascii_webcam::source::CaptureError::Device(format!(
            "camera {} requested but this build has no camera support (rebuild with --features camera)",
            index
        ))
        .into()),
    }
}
