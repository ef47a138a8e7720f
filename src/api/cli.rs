use clap::Parser;

pub struct Cli;

impl Cli {
    pub fn run(&self) -> CliProgram {
        CliProgram::parse()
    }
}

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliProgram {
    #[arg(
        long,
        short,
        value_name = "NAME",
        help = "Name of the bookmark folder to convert",
        required_unless_present = "list_folders"
    )]
    pub folder: Option<String>,

    #[arg(
        long,
        short,
        value_name = "FILE_PATH",
        help = "Output PDF file path",
        default_value = "combined.pdf"
    )]
    pub output: String,

    #[arg(
        long,
        value_name = "FILE_PATH",
        help = "Custom path to the browser bookmarks file"
    )]
    pub bookmarks_file: Option<String>,

    #[arg(
        long,
        short,
        value_name = "SECONDS",
        help = "Per-page navigation timeout"
    )]
    pub timeout: Option<u64>,

    #[arg(
        long,
        short,
        value_name = "FILE_PATH",
        help = "Custom path to config file"
    )]
    pub config: Option<String>,

    #[arg(
        long,
        short,
        help = "List all bookmark folders and exit",
        default_value_t = false
    )]
    pub list_folders: bool,

    #[arg(long, short, help = "Enable verbose logging", default_value_t = false)]
    pub verbose: bool,

    #[arg(
        long,
        help = "Run the browser in visible mode (not headless)",
        default_value_t = false
    )]
    pub no_headless: bool,
}
