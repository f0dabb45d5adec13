use blake2::{digest::consts::U32, Blake2b, Digest};
use log::info;
use rand_chacha::rand_core::SeedableRng;

use crate::config::GeneratorArgs;
use crate::error::LayoutError;
use crate::layout::Layout;
use crate::rectangle::Rectangle;
use crate::source::{
    default_catalog, CatalogSizeSource, FixedSizeSource, NameGenerator, SequentialNames, SizeSource,
};

type Blake2b256 = Blake2b<U32>;

/// Turn any human readable seed into the 32 bytes ChaCha20 wants.
pub fn hash_seed(input: &str) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(input.as_bytes());
    hasher.finalize().into()
}

pub fn seeded_rng(seed: &str) -> rand_chacha::ChaCha20Rng {
    rand_chacha::ChaCha20Rng::from_seed(hash_seed(seed))
}

/// Generator drives a layout: each step asks the size source and name generator for the next
/// block and places it.
pub struct Generator<S, N>
where
    S: SizeSource,
    N: NameGenerator,
{
    sizes: S,
    names: N,
}

impl<S, N> Generator<S, N>
where
    S: SizeSource,
    N: NameGenerator,
{
    pub fn new(sizes: S, names: N) -> Self {
        Self { sizes, names }
    }

    pub fn place_next<'a>(&mut self, layout: &'a mut Layout) -> &'a Rectangle {
        let name = self.names.next_name();
        let size = self.sizes.next_size();
        layout.place(name, size)
    }

    pub fn generate(&mut self, count: usize) -> Layout {
        let mut layout = Layout::new();
        for _ in 0..count {
            self.place_next(&mut layout);
        }
        info!(
            "placed {} blocks, bounding box {}x{}",
            layout.len(),
            layout.width(),
            layout.height()
        );
        layout
    }
}

pub fn run(args: &GeneratorArgs) -> Result<Layout, LayoutError> {
    info!("generating {} blocks with seed {:?}", args.count, args.seed);
    let names = SequentialNames::default();
    if args.fixed {
        let sizes = FixedSizeSource::new(args.sizes.clone())?;
        return Ok(Generator::new(sizes, names).generate(args.count));
    }
    let catalog = if args.sizes.is_empty() {
        default_catalog()
    } else {
        args.sizes.clone()
    };
    let sizes = CatalogSizeSource::new(catalog, seeded_rng(&args.seed))?;
    Ok(Generator::new(sizes, names).generate(args.count))
}
