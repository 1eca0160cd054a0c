use anyhow::Result;
use clap::Parser;
use robot_icons::icon_gen;

#[derive(Debug, Parser)]
#[clap(
    name = "robot-icons",
    version,
    about = "Generate the placeholder robot icons for the browser extension into ./icons"
)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    if let Some((message, status)) =
        icon_gen::missing_png_support(icon_gen::png_support_available())
    {
        eprintln!("{message}");
        std::process::exit(status);
    }

    icon_gen::generate_extension_icons()
}
