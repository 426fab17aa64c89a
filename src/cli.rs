use crate::error::ArgsError;
use crate::simulation::SeedStrategy;

/// `glider-life [empty|pattern|random] [SEED]`, `gun` is an alias for `pattern`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Args {
    pub strategy: SeedStrategy,
    /// Fixed RNG seed, entropy when absent
    pub seed: Option<u64>,
}

impl Args {
    /// Parse the arguments after the program name
    pub fn parse<I>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        if let Some(strategy) = args.next() {
            parsed.strategy = strategy.as_ref().parse()?;
        }
        if let Some(seed) = args.next() {
            let seed = seed.as_ref();
            parsed.seed = Some(seed.parse().map_err(|_| ArgsError::Seed(seed.to_string()))?);
        }
        if let Some(extra) = args.next() {
            return Err(ArgsError::Unexpected(extra.as_ref().to_string()));
        }

        Ok(parsed)
    }
}
