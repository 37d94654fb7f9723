use super::common::tiles_to_tile_table;
use crate::model::*;

// "m123p406z77" 形式の文字列から牌のリストを生成. 0は赤5
pub fn instances_from_string(exp: &str) -> Result<Vec<TileInstance>, ParseError> {
    let mut tiles = vec![];
    let mut ti = None;
    for ch in exp.chars() {
        match ch {
            'm' | 'p' | 's' | 'z' => ti = tile_type_from_char(ch),
            '0'..='9' => {
                let ti = ti.ok_or_else(|| ParseError::new(exp, "tile number before tile type"))?;
                let ni = ch.to_digit(10).unwrap_or(0) as Tnum;
                let is_red = ni == 0 && ti != TZ;
                let t = Tile(ti, if is_red { 5 } else { ni });
                if !t.is_valid() {
                    return Err(ParseError::new(exp, &format!("invalid tile: {}{}", tile_type_to_char(ti), ch)));
                }
                tiles.push(TileInstance::new(t, is_red));
            }
            ' ' | ',' => {}
            _ => return Err(ParseError::new(exp, &format!("invalid char: '{}'", ch))),
        }
    }
    Ok(tiles)
}

pub fn tiles_from_string(exp: &str) -> Result<Vec<Tile>, ParseError> {
    Ok(instances_from_string(exp)?.iter().map(|t| t.tile).collect())
}

pub fn tile_table_from_string(exp: &str) -> Result<TileTable, ParseError> {
    Ok(tiles_to_tile_table(&tiles_from_string(exp)?))
}

// 牌のリストを "m123p456z1" 形式に変換 (入力の順序を保つ)
pub fn tiles_to_string(tiles: &[Tile]) -> String {
    let mut res = String::new();
    let mut last = None;
    for t in tiles {
        if last != Some(t.0) {
            res.push(tile_type_to_char(t.0));
            last = Some(t.0);
        }
        res.push_str(&t.1.to_string());
    }
    res
}

pub fn instances_to_string(tiles: &[TileInstance]) -> String {
    let mut res = String::new();
    let mut last = None;
    for t in tiles {
        if last != Some(t.tile.0) {
            res.push(tile_type_to_char(t.tile.0));
            last = Some(t.tile.0);
        }
        res.push_str(&(if t.is_red { 0 } else { t.tile.1 }).to_string());
    }
    res
}

pub fn tile_table_to_string(tt: &TileTable) -> String {
    let mut tiles = vec![];
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            for _ in 0..tt[ti][ni] {
                tiles.push(Tile(ti, ni));
            }
        }
    }
    tiles_to_string(&tiles)
}

#[test]
fn test_tiles_from_string() {
    let tiles = tiles_from_string("m123p406z77").unwrap();
    assert_eq!(tiles.len(), 8);
    assert_eq!(tiles[4], Tile(TP, 5));
    assert_eq!(tiles[7], Tile(TZ, DR));
    assert_eq!(tiles_to_string(&tiles), "m123p456z77");

    let inst = instances_from_string("s055").unwrap();
    assert_eq!(inst.iter().filter(|t| t.is_red).count(), 1);
    assert_eq!(instances_to_string(&inst), "s055");

    assert!(tiles_from_string("123").is_err());
    assert!(tiles_from_string("z8").is_err());
    assert!(tiles_from_string("m1x").is_err());
}
