//! The informed host

use rand::Rng;

use crate::door::{Arrangement, Door};
use crate::error::Result;

/// The host knows where the prize is and always opens an empty door the
/// contestant did not pick.
pub struct Host;

impl Host {
    /// Pick the door to open.
    ///
    /// Contestant on the prize: fair coin between the two empty doors.
    /// Contestant on an empty door: the only other empty door, no entropy used.
    pub fn reveal<R: Rng + ?Sized>(arrangement: &Arrangement, first_choice: Door, rng: &mut R) -> Door {
        let prize = arrangement.prize_door();
        if first_choice == prize {
            let [a, b] = arrangement.non_prize_doors();
            if rng.gen_bool(0.5) {
                a
            } else {
                b
            }
        } else {
            Door::remaining(first_choice, prize)
        }
    }
}

/// Checked entry point taking a raw door number.
///
/// Fails with `GameError::InvalidDoor` when `first_choice` is outside 1..=3.
pub fn reveal_host_door<R: Rng + ?Sized>(
    arrangement: &Arrangement,
    first_choice: u8,
    rng: &mut R,
) -> Result<Door> {
    let first_choice = Door::new(first_choice)?;
    Ok(Host::reveal(arrangement, first_choice, rng))
}
