use anyhow::{Context, Result};
use sparselife::FillMode;
use std::{str::FromStr, time::Duration};

const DEFAULT_WIDTH: i32 = 40;
const DEFAULT_HEIGHT: i32 = 20;
const DEFAULT_CONSOLE_SLEEP_MILLIS: u64 = 500;
const DEFAULT_HEADLESS_GENS: usize = 1000;

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn options() -> getopts::Options {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "render every generation to the terminal");
        opts.optopt("t", "threads", "partitions for the neighbour count", "N");
        opts.optopt("o", "output", "write the final board as RLE", "FILE");
        opts.optopt("i", "input", "read the initial board from RLE", "FILE");
        opts.optopt("w", "width", "set seed width", "WIDTH");
        opts.optopt("h", "height", "set seed height", "HEIGHT");
        opts.optopt("f", "fill", "random, alternating, all or empty", "TYPE");
        opts.optopt("", "seed", "seed for the random fill", "SEED");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt("", "stats", "write stats csv to file", "FILE");
        opts
    }

    /// Parses the arguments, `Ok(None)` when only help was requested
    pub fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>> {
        let opts = Self::options();
        let matches = opts
            .parse(args.iter().map(T::as_ref))
            .context("invalid arguments")?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: sparselife [options]"));
            return Ok(None);
        }

        let args = Self { matches };
        args.validate()?;
        Ok(Some(args))
    }
    pub fn from_env() -> Result<Option<Self>> {
        let env = std::env::args().skip(1).collect::<Vec<_>>();
        Self::new(&env)
    }

    /// Parses every valued option once so the getters cannot fail later
    fn validate(&self) -> Result<()> {
        self.get::<i32>("width")?;
        self.get::<i32>("height")?;
        self.get::<u64>("seed")?;
        self.get::<u64>("sleep")?;
        self.get::<usize>("gens")?;
        self.get::<usize>("threads")?;
        self.fill_mode()?;
        Ok(())
    }

    fn get<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.matches
            .opt_get(name)
            .with_context(|| format!("invalid value for --{name}"))
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }
    pub fn threads(&self) -> usize {
        self.get("threads").ok().flatten().unwrap_or(1)
    }

    pub fn generations(&self) -> usize {
        let default = if self.console() {
            usize::MAX // until interrupted
        } else {
            DEFAULT_HEADLESS_GENS
        };
        self.get("gens").ok().flatten().unwrap_or(default)
    }
    pub fn sleep(&self) -> Option<Duration> {
        match self.get("sleep").ok().flatten() {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if self.console() => Some(Duration::from_millis(DEFAULT_CONSOLE_SLEEP_MILLIS)),
            None => None,
        }
    }

    pub fn grid_size(&self) -> (i32, i32) {
        (
            self.get("width").ok().flatten().unwrap_or(DEFAULT_WIDTH),
            self.get("height").ok().flatten().unwrap_or(DEFAULT_HEIGHT),
        )
    }
    pub fn seed(&self) -> Option<u64> {
        self.get("seed").ok().flatten()
    }
    pub fn fill_mode(&self) -> Result<FillMode> {
        match self.matches.opt_str("fill") {
            Some(mode) => Ok(mode.parse()?),
            None => Ok(FillMode::default()),
        }
    }

    pub fn output_file(&self) -> Option<String> {
        self.matches.opt_str("output")
    }
    pub fn input_file(&self) -> Option<String> {
        self.matches.opt_str("input")
    }

    pub fn stats_file(&self) -> Option<String> {
        self.matches.opt_str("stats")
    }
}
