use anyhow::Result;
use clap::Parser;

/// The whole recipe is embedded constants, so there are no flags or inputs;
/// parsing still provides --help and --version.
#[derive(Debug, Parser)]
#[clap(
    name = "moodlebox-icon",
    about = "Generate the MoodleBox icon source image (orange gradient with black MB lettering)"
)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    moodlebox_icon::render::generate()
}
