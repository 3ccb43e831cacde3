//! Command-line settings for the terminal driver.
//!
//! Flags are read by hand in the same `--flag value` form throughout:
//! `--self-play <plies>`, `--seed <n>`, `--fen "<placement> <side>"`.
//! Log verbosity is taken from `RUST_LOG`.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Play this many random plies instead of reading moves from stdin.
    pub self_play_plies: Option<u32>,
    pub seed: Option<u64>,
    /// Starting position; the standard setup when absent.
    pub fen: Option<String>,
}

impl RunConfig {
    /// Parse program arguments, excluding the program name.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut config = RunConfig::default();
        let mut i = 0;

        while i < args.len() {
            let flag = args[i].as_str();
            let value = || {
                args.get(i + 1)
                    .map(String::as_str)
                    .ok_or_else(|| format!("missing value for {flag}"))
            };

            match flag {
                "--self-play" => config.self_play_plies = Some(parse_value(flag, value()?)?),
                "--seed" => config.seed = Some(parse_value(flag, value()?)?),
                "--fen" => config.fen = Some(value()?.to_owned()),
                _ => return Err(format!("unknown argument: {flag}")),
            }
            i += 2;
        }

        Ok(config)
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, raw: &str) -> Result<T, String> {
    raw.parse::<T>()
        .map_err(|_| format!("invalid value for {flag}: {raw}"))
}
