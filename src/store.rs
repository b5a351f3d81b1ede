//! Plain-text persistence: one `<x> <y>` line per live cell.
//!
//! Blank lines and lines starting with `#` are skipped when loading. Saved
//! files list cells in ascending `(x, y)` order so identical worlds always
//! produce identical files.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{error::StoreError, pos, Cell, Pos, World};

pub fn serialize<W>(world: &W) -> String
where
    W: World,
{
    let mut actives = world.actives();
    actives.sort_unstable();
    actives
        .into_iter()
        .map(|Pos { x, y }| format!("{x} {y}\n"))
        .collect()
}

/// Adds every cell listed in `text` to `world`, cells the world cannot hold
/// are dropped.
pub fn parse<W>(text: &str, mut world: W) -> Result<W, StoreError>
where
    W: World,
{
    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || line.starts_with('#') {
            continue;
        }
        let pos = parse_line(trimmed).ok_or_else(|| StoreError::Corrupt {
            line: index + 1,
            content: line.to_string(),
        })?;
        world.set(pos, Cell::Alive);
    }
    Ok(world)
}

fn parse_line(line: &str) -> Option<Pos> {
    let mut tokens = line.split_whitespace();
    let x = tokens.next()?.parse().ok()?;
    let y = tokens.next()?.parse().ok()?;
    tokens.next().is_none().then_some(pos!(x, y))
}

pub fn save<W>(world: &W, path: impl AsRef<Path>) -> Result<(), StoreError>
where
    W: World,
{
    let path = path.as_ref();
    fs::write(path, serialize(world)).map_err(|source| io_error(path, source))?;
    debug!(path = %path.display(), population = world.population(), "saved universe");
    Ok(())
}

/// Loads a saved universe into `world`.
///
/// A missing file is not an error: it yields `Ok(None)`, letting the caller
/// pick a fallback.
pub fn load<W>(path: impl AsRef<Path>, world: W) -> Result<Option<W>, StoreError>
where
    W: World,
{
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "no saved universe found");
            return Ok(None);
        }
        Err(source) => return Err(io_error(path, source)),
    };
    let world = parse(&text, world)?;
    debug!(path = %path.display(), population = world.population(), "loaded universe");
    Ok(Some(world))
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: PathBuf::from(path),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Grid, LiveSet, Pattern};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sparse-life-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_serialize_is_sorted() {
        let world: LiveSet = [pos!(2, 1), pos!(-3, 4), pos!(2, -8), pos!(0, 0)]
            .into_iter()
            .collect();
        assert_eq!(serialize(&world), "-3 4\n0 0\n2 -8\n2 1\n");
        assert_eq!(serialize(&LiveSet::new()), "");
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let text = "# saved by hand\n\n1 2\n   \n  3   -4  \n#5 5\n1 2\n";
        let world = parse(text, LiveSet::new()).unwrap();
        let expected: LiveSet = [pos!(1, 2), pos!(3, -4)].into_iter().collect();
        assert_eq!(world, expected);
    }

    #[test]
    fn test_parse_rejects_corrupt_lines() {
        for (text, line) in [
            ("1 2\n3\n", 2),
            ("1 2 3\n", 1),
            ("0 0\n\nx y\n", 3),
            ("1.5 2\n", 1),
        ] {
            match parse(text, LiveSet::new()) {
                Err(StoreError::Corrupt { line: got, .. }) => assert_eq!(got, line),
                other => panic!("expected corrupt data for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_into_grid_drops_outside() {
        let grid = parse("0 0\n4 1\n1 9\n-1 0\n3 3\n", Grid::new(4, 4)).unwrap();
        assert_eq!(grid.actives(), vec![pos!(0, 0), pos!(3, 3)]);
    }

    #[test]
    fn test_round_trip() {
        let path = temp_path("round-trip.txt");
        let world = Pattern::GliderGun.spawn(pos!(-1 << 40, 77));
        save(&world, &path).unwrap();
        let loaded = load(&path, LiveSet::new()).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, Some(world));
    }

    #[test]
    fn test_empty_round_trip_is_not_missing() {
        let path = temp_path("empty.txt");
        save(&LiveSet::new(), &path).unwrap();
        let loaded = load(&path, LiveSet::new()).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, Some(LiveSet::new()));
    }

    #[test]
    fn test_missing_file() {
        let path = temp_path("does-not-exist.txt");
        assert_eq!(load(&path, LiveSet::new()).unwrap(), None);
    }

    #[test]
    fn test_grid_round_trip() {
        let path = temp_path("grid.txt");
        let mut grid = Grid::new(20, 40);
        Pattern::Glider.place_on(&mut grid, pos!(0, 0));
        save(&grid, &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let loaded = load(&path, Grid::new(20, 40)).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(text, "1 2\n2 3\n3 1\n3 2\n3 3\n");
        assert_eq!(loaded, Some(grid));
    }
}
