//! Core CLI commands for building quizzes
//!
//! `quiz` looks lyrics up online; `mask` works on text you already have.
//! Both share the masking flags in [`MaskingArgs`].

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::quiz::MaskOptions;
use crate::core::text::MaskMode;
use crate::services::SimpleServices;

pub mod mask;
pub mod quiz;

#[derive(Args, Debug, Clone, Default)]
pub struct MaskingArgs {
    /// Number of words to replace (1-20, default from config)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u8).range(1..=20))]
    pub count: Option<u8>,

    /// Additional words to exclude from masking, comma-separated
    #[arg(long, default_value = "")]
    pub add: String,

    /// Words to delete from the exclusion list, comma-separated
    #[arg(long, default_value = "")]
    pub remove: String,

    /// How words are sampled (default from config)
    #[arg(long, value_enum)]
    pub mode: Option<MaskMode>,

    /// Seed for reproducible masking
    #[arg(long)]
    pub seed: Option<u64>,
}

impl MaskingArgs {
    pub fn options(&self, services: &SimpleServices) -> MaskOptions {
        services.mask_options(
            &self.add,
            &self.remove,
            self.count.map(usize::from),
            self.mode,
        )
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use rand::Rng;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let args = MaskingArgs {
            seed: Some(42),
            ..MaskingArgs::default()
        };
        let a: u64 = args.rng().gen();
        let b: u64 = args.rng().gen();
        assert_eq!(a, b);
    }

    #[test]
    fn test_options_use_config_defaults() {
        let services = SimpleServices::new(Config::default());
        let options = MaskingArgs::default().options(&services);
        assert_eq!(options.count, 10);
        assert_eq!(options.mode, MaskMode::Occurrences);

        let args = MaskingArgs {
            count: Some(3),
            mode: Some(MaskMode::Distinct),
            ..MaskingArgs::default()
        };
        let options = args.options(&services);
        assert_eq!(options.count, 3);
        assert_eq!(options.mode, MaskMode::Distinct);
    }
}
