use crate::model::*;

#[inline]
pub fn calc_seat_offset(base_seat: Seat, target_seat: Seat) -> Seat {
    (target_seat + SEAT - base_seat) % SEAT
}

// 下家
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    (seat + 1) % SEAT
}

#[inline]
pub fn calc_prevalent_wind(round: usize) -> Wind {
    Wind::from_index(round)
}

#[inline]
pub fn calc_seat_wind(dealer: Seat, seat: Seat) -> Wind {
    Wind::from_index(calc_seat_offset(dealer, seat))
}

#[inline]
pub fn inc_tile(tt: &mut TileTable, t: Tile) {
    tt[t.0][t.1] += 1;
}

#[inline]
pub fn dec_tile(tt: &mut TileTable, t: Tile) {
    tt[t.0][t.1] -= 1;
}

pub fn tiles_to_tile_table(tiles: &[Tile]) -> TileTable {
    let mut tt = TileTable::default();
    for &t in tiles {
        inc_tile(&mut tt, t);
    }
    tt
}

pub fn count_tile_table(tt: &TileTable) -> usize {
    tt.iter().map(|r| r.iter().sum::<usize>()).sum()
}

#[test]
fn test_seat_wind() {
    assert_eq!(calc_seat_wind(0, 0), Wind::East);
    assert_eq!(calc_seat_wind(1, 0), Wind::North);
    assert_eq!(calc_seat_wind(3, 1), Wind::West);
    assert_eq!(calc_prevalent_wind(1), Wind::South);
    assert_eq!(next_seat(3), 0);
}
