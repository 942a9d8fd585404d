//! Neutron reaction names and their ENDF MT numbers

// internal modules
use crate::error::{Error, Result};

/// Reaction names accepted in chain files and reaction lists
///
/// Covers the transmutation reactions that appear in depletion chains.
const REACTION_MT: [(&str, u32); 38] = [
    ("(n,2nd)", 11),
    ("(n,2n)", 16),
    ("(n,3n)", 17),
    ("fission", 18),
    ("(n,na)", 22),
    ("(n,n3a)", 23),
    ("(n,2na)", 24),
    ("(n,3na)", 25),
    ("(n,np)", 28),
    ("(n,n2a)", 29),
    ("(n,2n2a)", 30),
    ("(n,nd)", 32),
    ("(n,nt)", 33),
    ("(n,n3He)", 34),
    ("(n,nd2a)", 35),
    ("(n,nt2a)", 36),
    ("(n,4n)", 37),
    ("(n,2np)", 41),
    ("(n,3np)", 42),
    ("(n,n2p)", 44),
    ("(n,npa)", 45),
    ("(n,gamma)", 102),
    ("(n,p)", 103),
    ("(n,d)", 104),
    ("(n,t)", 105),
    ("(n,3He)", 106),
    ("(n,a)", 107),
    ("(n,2a)", 108),
    ("(n,3a)", 109),
    ("(n,2p)", 111),
    ("(n,pa)", 112),
    ("(n,t2a)", 113),
    ("(n,d2a)", 114),
    ("(n,pd)", 115),
    ("(n,pt)", 116),
    ("(n,da)", 117),
    ("(n,5n)", 152),
    ("(n,6n)", 153),
];

/// ENDF MT number for a reaction name
///
/// ```rust
/// # use actools_activation::reaction_mt;
/// assert_eq!(reaction_mt("(n,gamma)").unwrap(), 102);
/// assert_eq!(reaction_mt("(n,2n)").unwrap(), 16);
/// assert!(reaction_mt("(n,banana)").is_err());
/// ```
pub fn reaction_mt(name: &str) -> Result<u32> {
    REACTION_MT
        .iter()
        .find(|(reaction, _)| *reaction == name)
        .map(|(_, mt)| *mt)
        .ok_or_else(|| Error::UnknownReaction(name.to_string()))
}
