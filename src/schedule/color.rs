/// Hue in `[0, 360)` derived from a name.
///
/// Folds UTF-16 code units with `hash = unit + ((hash << 5) - hash)`, where
/// the shift wraps at 32 bits but the subtraction does not. Collisions are
/// fine; the value is cosmetic.
pub fn color_for(name: &str) -> u16 {
    let hash = name.encode_utf16().fold(0i64, |hash, unit| {
        let shifted = (hash as i32).wrapping_shl(5) as i64;
        i64::from(unit) + shifted - hash
    });
    hash.rem_euclid(360) as u16
}
