//! ANSI colour helpers for terminal output.

use anyhow::{bail, Result};
use std::fmt;
use std::io::{self, Write};

pub const COLOUR_RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Returns the escape sequence for the `k`th entry of a five-colour palette, green through
/// cyan. Useful for colouring output by e.g. thread or recursion depth.
///
/// # Examples
///
/// ```
/// use raygeom::util::term;
/// assert_eq!(term::term_colour(0).unwrap(), term::GREEN);
/// assert!(term::term_colour(5).is_err());
/// ```
pub fn term_colour(k: u8) -> Result<String> {
    if k > 4 {
        bail!("term_colour(): palette index out of range: {k}");
    }
    Ok(format!("\x1b[3{}m", k + 2))
}

/// Writes `args` to `out` wrapped in `colour` and [`COLOUR_RESET`].
pub fn c_write(out: &mut impl Write, colour: &str, args: fmt::Arguments) -> io::Result<()> {
    write!(out, "{colour}")?;
    out.write_fmt(args)?;
    write!(out, "{COLOUR_RESET}")
}

pub fn c_print(colour: &str, args: fmt::Arguments) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    c_write(&mut lock, colour, args)?;
    lock.flush()
}

/// Like [`print!`], but coloured. Evaluates to an [`io::Result`].
///
/// ```
/// use raygeom::{c_printf, util::term};
/// c_printf!(term::YELLOW, "{} rays traced\n", 42).unwrap();
/// ```
#[macro_export]
macro_rules! c_printf {
    ($colour:expr, $($args:tt)+) => {
        $crate::util::term::c_print($colour, format_args!($($args)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette() {
        let palette = (0..5).map(|k| term_colour(k).unwrap()).collect::<Vec<_>>();
        assert_eq!(palette, vec![GREEN, YELLOW, BLUE, MAGENTA, CYAN]);
        assert!(term_colour(200).is_err());
    }

    #[test]
    fn c_write_wraps_in_colour() {
        let mut buf = Vec::new();
        c_write(&mut buf, RED, format_args!("{} {}", 1, "two")).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\x1b[31m1 two\x1b[0m");
    }
}
