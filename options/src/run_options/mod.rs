pub mod check_options;

use clap::{Parser, Subcommand};

const DEFAULT_CONFIG_FILE_PATH: &str = "config.yaml";

#[derive(Parser)]
pub struct RunOptions {
    #[clap(subcommand)]
    pub command: RunCommand,
}

#[derive(Subcommand, Clone, Debug)]
pub enum RunCommand {
    /// Submit one still image file for uniform detection.
    Image(check_options::ImageOptions),
    /// Submit one video file for uniform detection.
    Video(check_options::VideoOptions),
    /// Open the camera and submit a frame every time Enter is pressed.
    Live(check_options::LiveOptions),
}
