use std::{path::PathBuf, str::FromStr, time::Duration};

use crate::{error::ConfigError, pos, Pattern, Pos, SimConfig, ViewMode, Viewport};

pub const USAGE: &str = "\
usage: sparse-life [options]

  --pattern <name>       seed pattern: glider, gun, blinker, block (default glider)
  --offset <x>,<y>       translate the seed pattern
  --load <path>          start from a saved universe, the seed is used if it is missing
  --save <path>          write the final generation to <path>
  --generations <n>      number of generations to show
  --delay <ms>           pause between generations
  --padding <n>          auto-pan margin around the live cells
  --max-view <n>         auto-pan limit on rows and columns
  --fixed <x>,<y>,<size> show a fixed square window instead of auto-panning
  --grid <rows>,<cols>   use a bounded dense grid instead of the unbounded universe
  --no-clear             print frames one after the other instead of redrawing
  --help                 show this message";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Universe {
    Sparse,
    Grid { rows: usize, cols: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub pattern: Pattern,
    pub offset: Pos,
    pub load: Option<PathBuf>,
    pub save: Option<PathBuf>,
    pub universe: Universe,
    pub mode: ViewMode,
    pub sim: SimConfig,
    pub clear: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Config),
    Help,
}

/// Options as given, before pattern-dependent defaults are filled in.
#[derive(Debug, Default)]
struct Options {
    pattern: Option<Pattern>,
    offset: Option<Pos>,
    load: Option<PathBuf>,
    save: Option<PathBuf>,
    generations: Option<usize>,
    delay: Option<u64>,
    padding: Option<usize>,
    max_view: Option<usize>,
    fixed: Option<Viewport>,
    grid: Option<(usize, usize)>,
    no_clear: bool,
}

impl Config {
    /// Parses the arguments following the program name.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Command, ConfigError> {
        let mut options = Options::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let mut value = |option: &'static str| args.next().ok_or(ConfigError::MissingValue(option));
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--pattern" => options.pattern = Some(value("--pattern")?.parse()?),
                "--offset" => {
                    let [x, y] = numbers::<2, i64>("--offset", &value("--offset")?)?;
                    options.offset = Some(pos!(x, y));
                }
                "--load" => options.load = Some(value("--load")?.into()),
                "--save" => options.save = Some(value("--save")?.into()),
                "--generations" => options.generations = Some(number("--generations", &value("--generations")?)?),
                "--delay" => options.delay = Some(number("--delay", &value("--delay")?)?),
                "--padding" => options.padding = Some(number("--padding", &value("--padding")?)?),
                "--max-view" => {
                    let max_view = number("--max-view", &value("--max-view")?)?;
                    options.max_view = Some(positive("--max-view", max_view)?);
                }
                "--fixed" => {
                    let [x, y, size] = numbers::<3, i64>("--fixed", &value("--fixed")?)?;
                    let size = usize::try_from(size)
                        .ok()
                        .filter(|&size| size > 0)
                        .ok_or_else(|| invalid("--fixed", &size.to_string()))?;
                    options.fixed = Some(Viewport::square(pos!(x, y), size));
                }
                "--grid" => {
                    let [rows, cols] = numbers::<2, usize>("--grid", &value("--grid")?)?;
                    options.grid = Some((positive("--grid", rows)?, positive("--grid", cols)?));
                }
                "--no-clear" => options.no_clear = true,
                _ => return Err(ConfigError::UnknownOption(arg.clone())),
            }
        }
        Ok(Command::Run(options.resolve()))
    }
}

impl Options {
    fn resolve(self) -> Config {
        let pattern = self.pattern.unwrap_or(Pattern::Glider);
        let (padding, max_view) = pattern.framing();
        let (generations, delay) = match pattern {
            Pattern::GliderGun => (200, 100),
            _ => (100, 200),
        };
        let universe = match self.grid {
            Some((rows, cols)) => Universe::Grid { rows, cols },
            None => Universe::Sparse,
        };
        let mode = match (self.fixed, universe) {
            (Some(viewport), _) => ViewMode::Fixed(viewport),
            (None, Universe::Grid { rows, cols }) if self.padding.is_none() && self.max_view.is_none() => {
                ViewMode::Fixed(Viewport {
                    origin: pos!(0, 0),
                    height: rows,
                    width: cols,
                })
            }
            _ => ViewMode::AutoPan {
                padding: self.padding.unwrap_or(padding),
                max_view: self.max_view.unwrap_or(max_view),
            },
        };
        Config {
            pattern,
            offset: self.offset.unwrap_or(pos!(0, 0)),
            load: self.load,
            save: self.save,
            universe,
            mode,
            sim: SimConfig {
                generations: self.generations.unwrap_or(generations),
                delay: Duration::from_millis(self.delay.unwrap_or(delay)),
            },
            clear: !self.no_clear,
        }
    }
}

fn invalid(option: &'static str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        option,
        value: value.to_string(),
        expected: "a number greater than zero",
    }
}

fn number<T: FromStr>(option: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        option,
        value: value.to_string(),
        expected: "an integer",
    })
}

fn numbers<const N: usize, T: FromStr>(option: &'static str, value: &str) -> Result<[T; N], ConfigError> {
    let parsed = value
        .split(',')
        .map(|part| number(option, part))
        .collect::<Result<Vec<T>, _>>()?;
    parsed.try_into().map_err(|_| ConfigError::InvalidValue {
        option,
        value: value.to_string(),
        expected: "comma separated integers",
    })
}

fn positive(option: &'static str, value: usize) -> Result<usize, ConfigError> {
    if value == 0 {
        return Err(invalid(option, "0"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, ConfigError> {
        Config::from_args(args.iter().map(|arg| arg.to_string()))
    }

    fn run_config(args: &[&str]) -> Config {
        match parse(args).unwrap() {
            Command::Run(config) => config,
            Command::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn test_defaults() {
        let config = run_config(&[]);
        assert_eq!(config.pattern, Pattern::Glider);
        assert_eq!(config.offset, pos!(0, 0));
        assert_eq!(config.universe, Universe::Sparse);
        assert_eq!(config.mode, ViewMode::default());
        assert_eq!(config.sim, SimConfig::default());
        assert!(config.clear);
        assert_eq!(config.load, None);
    }

    #[test]
    fn test_gun_defaults() {
        let config = run_config(&["--pattern", "gun"]);
        assert_eq!(config.pattern, Pattern::GliderGun);
        assert_eq!(
            config.mode,
            ViewMode::AutoPan {
                padding: 5,
                max_view: 40
            }
        );
        assert_eq!(config.sim.generations, 200);
        assert_eq!(config.sim.delay, Duration::from_millis(100));
    }

    #[test]
    fn test_overrides() {
        let config = run_config(&[
            "--pattern", "gun", "--offset", "-5,1000000000000", "--generations", "7", "--delay", "0",
            "--padding", "1", "--max-view", "12", "--save", "out.txt", "--no-clear",
        ]);
        assert_eq!(config.offset, pos!(-5, 1_000_000_000_000));
        assert_eq!(config.sim.generations, 7);
        assert_eq!(config.sim.delay, Duration::ZERO);
        assert_eq!(
            config.mode,
            ViewMode::AutoPan {
                padding: 1,
                max_view: 12
            }
        );
        assert_eq!(config.save, Some(PathBuf::from("out.txt")));
        assert!(!config.clear);
    }

    #[test]
    fn test_fixed_and_grid() {
        let config = run_config(&["--fixed", "-3,4,10"]);
        assert_eq!(config.mode, ViewMode::Fixed(Viewport::square(pos!(-3, 4), 10)));

        let config = run_config(&["--grid", "20,40"]);
        assert_eq!(config.universe, Universe::Grid { rows: 20, cols: 40 });
        assert_eq!(
            config.mode,
            ViewMode::Fixed(Viewport {
                origin: pos!(0, 0),
                height: 20,
                width: 40
            })
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse(&["--help"]), Ok(Command::Help));
        assert_eq!(parse(&["--bogus"]), Err(ConfigError::UnknownOption("--bogus".into())));
        assert_eq!(parse(&["--load"]), Err(ConfigError::MissingValue("--load")));
        assert!(matches!(
            parse(&["--max-view", "0"]),
            Err(ConfigError::InvalidValue { option: "--max-view", .. })
        ));
        assert!(matches!(
            parse(&["--offset", "1"]),
            Err(ConfigError::InvalidValue { option: "--offset", .. })
        ));
        assert!(matches!(
            parse(&["--grid", "0,5"]),
            Err(ConfigError::InvalidValue { option: "--grid", .. })
        ));
        assert!(matches!(
            parse(&["--fixed", "0,0,-2"]),
            Err(ConfigError::InvalidValue { option: "--fixed", .. })
        ));
        assert!(matches!(parse(&["--pattern", "ufo"]), Err(ConfigError::UnknownPattern(_))));
    }
}
