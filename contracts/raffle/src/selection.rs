use cosmwasm_std::{Uint128, Uint256};

/// Maps a random word to a position in a list of `count` entries.
///
/// The remainder is taken on the full 256 bit word and only narrowed afterwards.
/// Returns `None` for an empty list.
pub fn winner_index(random_word: Uint256, count: u32) -> Option<u32> {
    let index = random_word.checked_rem(Uint256::from(count)).ok()?;
    let index = Uint128::try_from(index).ok()?;
    u32::try_from(index.u128()).ok()
}
