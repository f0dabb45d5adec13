use derivative::Derivative;
use rand::prelude::SliceRandom;

use crate::error::LayoutError;
use crate::geometry::Size;

/// Supplies the extent of each block to place.
pub trait SizeSource {
    fn next_size(&mut self) -> Size;
}

/// Supplies the name of each block to place.
pub trait NameGenerator {
    fn next_name(&mut self) -> String;
}

/// Catalog of small blocks sampled when no sizes are given.
pub fn default_catalog() -> Vec<Size> {
    [(1, 1), (1, 2), (1, 3), (2, 2), (2, 3)]
        .into_iter()
        .filter_map(|(w, h)| Size::new(w, h).ok())
        .collect()
}

/// Draws sizes uniformly, with replacement, from a fixed catalog.
pub struct CatalogSizeSource<R: rand::Rng> {
    catalog: Vec<Size>,
    rng: R,
}

impl<R: rand::Rng> CatalogSizeSource<R> {
    pub fn new(catalog: Vec<Size>, rng: R) -> Result<Self, LayoutError> {
        if catalog.is_empty() {
            return Err(LayoutError::EmptyCatalog);
        }
        Ok(Self { catalog, rng })
    }

    pub fn catalog(&self) -> &[Size] {
        &self.catalog
    }
}

impl<R: rand::Rng> SizeSource for CatalogSizeSource<R> {
    fn next_size(&mut self) -> Size {
        // The catalog is non-empty by construction so a choice always exists.
        match self.catalog.choose(&mut self.rng) {
            Some(size) => *size,
            None => self.catalog[0],
        }
    }
}

/// Replays a given sequence of sizes in order, starting over once it runs out.
#[derive(Clone, Debug)]
pub struct FixedSizeSource {
    sizes: Vec<Size>,
    position: usize,
}

impl FixedSizeSource {
    pub fn new(sizes: Vec<Size>) -> Result<Self, LayoutError> {
        if sizes.is_empty() {
            return Err(LayoutError::EmptyCatalog);
        }
        Ok(Self { sizes, position: 0 })
    }
}

impl SizeSource for FixedSizeSource {
    fn next_size(&mut self) -> Size {
        let size = self.sizes[self.position];
        self.position = (self.position + 1) % self.sizes.len();
        size
    }
}

/// Names blocks "1", "2", "3", ...
#[derive(Clone, Debug, Derivative)]
#[derivative(Default)]
pub struct SequentialNames {
    #[derivative(Default(value = "1"))]
    next: u64,
}

impl NameGenerator for SequentialNames {
    fn next_name(&mut self) -> String {
        let name = self.next.to_string();
        self.next += 1;
        name
    }
}

#[cfg(test)]
mod source_tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn sequential_names_start_at_one() {
        let mut names = SequentialNames::default();
        let generated: Vec<String> = (0..3).map(|_| names.next_name()).collect();
        assert_eq!(generated, vec!["1", "2", "3"]);
    }

    #[test]
    fn default_catalog_has_five_small_blocks() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog[4], Size::new(2, 3).unwrap());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let rng = rand_chacha::ChaCha20Rng::seed_from_u64(42);
        assert!(matches!(CatalogSizeSource::new(vec![], rng), Err(LayoutError::EmptyCatalog)));
        assert!(matches!(FixedSizeSource::new(vec![]), Err(LayoutError::EmptyCatalog)));
    }

    #[test]
    fn catalog_source_only_yields_catalog_sizes() {
        // === given ===
        let rng = rand_chacha::ChaCha20Rng::seed_from_u64(7);
        let mut source = CatalogSizeSource::new(default_catalog(), rng).unwrap();

        // === then ===
        for _ in 0..100 {
            let size = source.next_size();
            assert!(source.catalog().contains(&size));
        }
    }

    #[test]
    fn catalog_source_is_reproducible_for_a_seed() {
        let draw = |seed: u64| -> Vec<Size> {
            let rng = rand_chacha::ChaCha20Rng::seed_from_u64(seed);
            let mut source = CatalogSizeSource::new(default_catalog(), rng).unwrap();
            (0..32).map(|_| source.next_size()).collect()
        };
        assert_eq!(draw(3), draw(3));
    }

    #[test]
    fn fixed_source_cycles() {
        let sizes = vec![Size::new(1, 1).unwrap(), Size::new(2, 3).unwrap()];
        let mut source = FixedSizeSource::new(sizes.clone()).unwrap();
        let replayed: Vec<Size> = (0..5).map(|_| source.next_size()).collect();
        assert_eq!(replayed, vec![sizes[0], sizes[1], sizes[0], sizes[1], sizes[0]]);
    }
}
