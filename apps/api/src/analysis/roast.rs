/// Results under this percentage get a roast.
pub const ROAST_THRESHOLD: f64 = 30.0;

const ROASTS: &[&str] = &[
    "Not a single tote bag in sight. Are you even trying?",
    "This is giving 'owns one hoodie and a Costco membership.'",
    "Zero matcha detected. Your barista doesn't know your name yet.",
    "The algorithm looked hard and found... a regular guy. Respect, honestly.",
    "Your bookshelf called. It wants at least one bell hooks title.",
    "Performativeness levels critically low. Consider a thrift store intervention.",
    "No vinyl, no film camera, no succulents. Bold choice.",
];

/// Picks a canned roast for low scores. `seed` selects the line so the same
/// analysis always gets the same one.
pub fn pick_roast(percentage: f64, seed: u128) -> Option<&'static str> {
    if percentage >= ROAST_THRESHOLD {
        return None;
    }
    let index = (seed % ROASTS.len() as u128) as usize;
    Some(ROASTS[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_roast_at_or_above_threshold() {
        assert_eq!(pick_roast(30.0, 1), None);
        assert_eq!(pick_roast(87.5, 1), None);
    }

    #[test]
    fn test_roast_below_threshold() {
        assert!(pick_roast(29.9, 0).is_some());
        assert!(pick_roast(0.0, u128::MAX).is_some());
    }

    #[test]
    fn test_seed_selects_line() {
        assert_eq!(pick_roast(0.0, 0), Some(ROASTS[0]));
        assert_eq!(pick_roast(0.0, ROASTS.len() as u128 + 2), Some(ROASTS[2]));
    }
}
