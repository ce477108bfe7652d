use std::path::PathBuf;

use clap::Args;

#[derive(Args, Clone, Debug, Default)]
pub struct CommonOptions {
    /// The path to the config file
    /// If not provided, the default value is used, config.yaml
    #[clap(long, short('c'), default_value_os = super::DEFAULT_CONFIG_FILE_PATH)]
    pub config_file_path: PathBuf,
}

#[derive(Args, Clone, Debug)]
pub struct ImageOptions {
    /// The image file to submit
    pub file: PathBuf,

    #[clap(flatten)]
    pub common: CommonOptions,
}

#[derive(Args, Clone, Debug)]
pub struct VideoOptions {
    /// The video file to submit
    pub file: PathBuf,

    #[clap(flatten)]
    pub common: CommonOptions,
}

#[derive(Args, Clone, Debug, Default)]
pub struct LiveOptions {
    /// Camera device index, overriding the config file value
    #[clap(long)]
    pub camera_index: Option<u32>,

    #[clap(flatten)]
    pub common: CommonOptions,
}
