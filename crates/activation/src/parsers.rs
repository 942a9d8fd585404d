//! Nuclide name parsing

// internal modules
use crate::nuclide::{IsomerState, Nuclide};
use actools_utils::StringExt;

// nom parser combinators
use nom::branch::alt;
use nom::character::complete::{alpha1, char, one_of};
use nom::combinator::opt;
use nom::error::{Error, ErrorKind};
use nom::{self, Err, IResult};

/// Leading [Nuclide] in a string, returning whatever is left over
///
/// Accepts `<symbol>[-|_]<mass number>[_]<isomer tag>`, with everything after
/// the symbol optional. Names such as `Co`, `co-60`, `Co60_m1`, `Co60m2` and
/// `Co60n` are all understood.
///
/// An isomer tag is only read after a mass number.
pub(crate) fn nuclide_from_str(i: &str) -> IResult<&str, Nuclide> {
    let (i, letters) = symbol(i)?;
    let (i, _) = opt(dash)(i)?;
    let (i, mass) = opt(mass_number)(i)?;

    let (i, state) = if mass.is_some() {
        isomer_tag(i)?
    } else {
        (i, IsomerState::Ground)
    };

    let nuclide = Nuclide {
        symbol: letters.to_lowercase().capitalise(),
        isotope: mass,
        state,
    };

    Ok((i, nuclide))
}

/// One or two letters
fn symbol(i: &str) -> IResult<&str, &str> {
    let (rest, letters) = alpha1(i)?;
    match letters.len() {
        1 | 2 => Ok((rest, letters)),
        _ => Err(Err::Error(Error::new(i, ErrorKind::Fail))),
    }
}

fn mass_number(i: &str) -> IResult<&str, u16> {
    nom::character::complete::u16(i)
}

/// `Co-60` and `Co_60` styles
fn dash(i: &str) -> IResult<&str, char> {
    one_of("-_")(i)
}

/// Optional isomer tag, ground state if missing
fn isomer_tag(i: &str) -> IResult<&str, IsomerState> {
    let (i, _) = opt(char('_'))(i)?;
    let (i, state) = opt(alt((numbered_state, lettered_state)))(i)?;
    Ok((i, state.unwrap_or_default()))
}

/// `m1`, `m2`, ... with `m0` taken as the ground state
fn numbered_state(i: &str) -> IResult<&str, IsomerState> {
    let (i, _) = one_of("mM")(i)?;
    let (i, level) = nom::character::complete::u8(i)?;
    let state = match level {
        0 => IsomerState::Ground,
        n => IsomerState::Excited(n),
    };
    Ok((i, state))
}

/// Single letter tags, `m`/`*` first, `n` second, `o` third
fn lettered_state(i: &str) -> IResult<&str, IsomerState> {
    let (i, letter) = one_of("gmno*")(i)?;
    let state = match letter {
        'g' => IsomerState::Ground,
        'n' => IsomerState::Excited(2),
        'o' => IsomerState::Excited(3),
        _ => IsomerState::Excited(1),
    };
    Ok((i, state))
}
