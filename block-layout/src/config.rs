use clap::Parser;

use crate::geometry::Size;

/// Generate a synthetic block layout and print which block occupies each grid cell.
#[derive(Clone, Debug, Parser)]
#[clap(name = "block-layout", version, about)]
pub struct GeneratorArgs {
    /// Number of blocks to place
    #[clap(short = 'n', long, default_value = "8")]
    pub count: usize,

    /// Random seed, any string
    #[clap(short, long, default_value = "42")]
    pub seed: String,

    /// Block size WIDTHxHEIGHT, may be repeated. Replaces the default catalog
    #[clap(long = "size", value_name = "WxH")]
    pub sizes: Vec<Size>,

    /// Place the --size values in the given order, cycling, instead of sampling them
    #[clap(long, requires = "sizes")]
    pub fixed: bool,
}

impl Default for GeneratorArgs {
    fn default() -> Self {
        Self {
            count: 8,
            seed: "42".to_string(),
            sizes: vec![],
            fixed: false,
        }
    }
}
