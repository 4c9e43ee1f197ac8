extern crate bincal as lib;

use flexi_logger::{FileSpec, Logger};
use lib::app::App;
use lib::clock::LocalClock;
use lib::config::Format;
use lib::controller::{Controller, Options};
use lib::events::Dispatcher;
use lib::page::{page_document, render_page};
use lib::term::{render_text, TextStyle};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use structopt::StructOpt;
use termion::raw::IntoRawMode;
use termion::screen::AlternateScreen;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "bincal",
    about = "Calendar showing every day of the month in binary."
)]
pub struct Args {
    #[structopt(long = "id", help = "id of the calendar container element")]
    pub id: Option<String>,

    #[structopt(short = "m", long = "month", help = "first month to show (0 - 11)")]
    pub month: Option<i64>,

    #[structopt(short = "y", long = "year", help = "year of the first month (1970 - 2150)")]
    pub year: Option<i64>,

    #[structopt(short = "n", long = "count", help = "number of months to show (1 - 12)")]
    pub count: Option<i64>,

    #[structopt(short = "f", long = "format", help = "output format, html or text")]
    pub format: Option<Format>,

    #[structopt(
        short = "o",
        long = "output",
        help = "write to file instead of stdout",
        parse(from_os_str)
    )]
    pub output: Option<PathBuf>,

    #[structopt(
        short = "i",
        long = "interactive",
        help = "browse years interactively in the terminal"
    )]
    pub interactive: bool,

    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    let mut options = Options::from(config.calendar.clone());
    if let Some(id) = args.id {
        options.id = id;
    }
    options.month = args.month.or(options.month);
    options.year = args.year.or(options.year);
    options.count = args.count.or(options.count);

    let mut controller = Controller::new(LocalClock);

    if args.interactive {
        std::panic::set_hook(Box::new(|info| {
            // Switch back to the main screen before printing anything
            println!(
                "{}{}",
                termion::screen::ToMainScreen,
                termion::cursor::Show
            );

            println!("bincal ran into a fatal error!");
            println!("{}", info);
            println!("{:?}", backtrace::Backtrace::new());
        }));

        let stdout = io::stdout().into_raw_mode()?;
        let mut screen = AlternateScreen::from(stdout);
        write!(screen, "{}", termion::cursor::Hide)?;

        let mut app = App::new(controller, options)?;
        let result = app.run(Dispatcher::new(), &mut screen);

        write!(screen, "{}", termion::cursor::Show)?;
        screen.flush()?;
        result?;
        return Ok(());
    }

    let model = controller.render_calendar(options)?;
    let format = args.format.unwrap_or(config.output.format);

    let rendered = match format {
        Format::Html => {
            let mut doc = page_document(&model.container_id);
            lib::view::mount(&mut doc, &model)?;
            render_page(&config.output.title, &doc).into_string()
        }
        Format::Text => {
            let text_style = if args.output.is_none() && termion::is_tty(&io::stdout()) {
                TextStyle::default()
            } else {
                TextStyle::plain()
            };
            render_text(&model, text_style)
        }
    };

    match args.output {
        Some(path) => {
            fs::write(&path, rendered)?;
            log::info!("Calendar written to {}", path.display());
        }
        None => io::stdout().write_all(rendered.as_bytes())?,
    }

    Ok(())
}
