use super::shanten::{calc_shanten, SHANTEN_TENPAI, SHANTEN_WIN};
use crate::control::common::{count_tile_table, dec_tile, inc_tile};
use crate::model::*;

// [和了牌]
// 3n+1枚の手牌が聴牌している場合, 和了牌のリストを返却
// 聴牌していない場合は空のリストを返却
// 34種すべてを1枚ずつ加えて和了形になるかを確認する
pub fn calc_waits(hand: &TileTable) -> Vec<Tile> {
    if count_tile_table(hand) % 3 != 1 || calc_shanten(hand) != SHANTEN_TENPAI {
        return vec![];
    }

    let mut tt = *hand;
    let mut res = vec![];
    for t in Tile::all() {
        inc_tile(&mut tt, t);
        if calc_shanten(&tt) == SHANTEN_WIN {
            res.push(t);
        }
        dec_tile(&mut tt, t);
    }
    res
}

#[inline]
pub fn is_win(hand: &TileTable) -> bool {
    count_tile_table(hand) % 3 == 2 && calc_shanten(hand) == SHANTEN_WIN
}

#[inline]
pub fn is_tenpai(hand: &TileTable) -> bool {
    count_tile_table(hand) % 3 == 1 && calc_shanten(hand) == SHANTEN_TENPAI
}

// [聴牌になる打牌]
// 3n+2枚の手牌から打牌して聴牌になる牌と,その場合の和了牌のリスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenpai {
    pub discard_tile: Tile,
    pub waits: Vec<Tile>,
}

pub fn calc_discards_to_tenpai(hand: &TileTable) -> Vec<Tenpai> {
    if count_tile_table(hand) % 3 != 2 {
        return vec![];
    }

    let mut tt = *hand;
    let mut res = vec![];
    for t in Tile::all() {
        if tt[t.0][t.1] == 0 {
            continue;
        }
        dec_tile(&mut tt, t);
        let waits = calc_waits(&tt);
        if !waits.is_empty() {
            res.push(Tenpai {
                discard_tile: t,
                waits,
            });
        }
        inc_tile(&mut tt, t);
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::string::{tile_table_from_string, tiles_from_string};

    fn waits(exp: &str) -> Vec<Tile> {
        calc_waits(&tile_table_from_string(exp).unwrap())
    }

    #[test]
    fn test_waits() {
        // 九蓮宝燈
        assert_eq!(
            waits("m1112345678999"),
            tiles_from_string("m123456789").unwrap()
        );
        assert_eq!(waits("m123456789p1235"), tiles_from_string("p5").unwrap());
        assert_eq!(waits("m123456789p2355"), tiles_from_string("p14").unwrap());
        assert_eq!(waits("m123456789p1299"), tiles_from_string("p3").unwrap());
        assert_eq!(waits("m1133p2244s5566z7"), tiles_from_string("z7").unwrap());
        assert_eq!(
            waits("m19p19s19z1234567"),
            tiles_from_string("m19p19s19z1234567").unwrap()
        );
        assert!(waits("m147p258s369z1234").is_empty());
        // 3n+2枚は対象外
        assert!(waits("m123456789p12355").is_empty());
    }

    #[test]
    fn test_discards_to_tenpai() {
        let tt = tile_table_from_string("m123456789p2355z1").unwrap();
        let res = calc_discards_to_tenpai(&tt);
        let discards: Vec<Tile> = res.iter().map(|r| r.discard_tile).collect();
        assert!(discards.contains(&Tile(TZ, 1)));
        let z1 = res.iter().find(|r| r.discard_tile == Tile(TZ, 1)).unwrap();
        assert_eq!(z1.waits, tiles_from_string("p14").unwrap());
        assert!(is_win(&tile_table_from_string("m123456789p12355").unwrap()));
        assert!(is_tenpai(&tile_table_from_string("m123456789p1235").unwrap()));
    }
}
