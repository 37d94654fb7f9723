use std::collections::VecDeque;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use super::string::instances_from_string;
use crate::model::*;

// [Wall]
// 王牌のレイアウト (dead):
//   0~3: 嶺上牌
//   4, 6, 8, 10, 12: ドラ表示牌
//   5, 7, 9, 11, 13: 裏ドラ表示牌
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    pub live: VecDeque<TileInstance>, // ツモ山 (先頭から取る)
    pub dead: Vec<TileInstance>,      // 王牌 14枚 (嶺上牌を取ってもレイアウトは不変)
    pub n_replacement: usize,         // 使用済みの嶺上牌の数
    pub n_dora: usize,                // 公開済みのドラ表示牌の数
}

impl Wall {
    pub fn build<R: Rng>(include_red: bool, rng: &mut R) -> Self {
        let mut tiles = all_instances(include_red);
        tiles.shuffle(rng);
        Self::split(tiles)
    }

    // 並びを指定した牌山 (136枚, 末尾14枚が王牌)
    pub fn from_tiles(tiles: Vec<TileInstance>) -> Option<Self> {
        if tiles.len() != TOTAL_TILES {
            return None;
        }
        Some(Self::split(tiles))
    }

    fn split(mut tiles: Vec<TileInstance>) -> Self {
        let dead = tiles.split_off(tiles.len() - DEAD_WALL);
        Self {
            live: tiles.into(),
            dead,
            n_replacement: 0,
            n_dora: 1,
        }
    }

    #[inline]
    pub fn draw(&mut self) -> Option<TileInstance> {
        self.live.pop_front()
    }

    pub fn draw_replacement(&mut self) -> Option<TileInstance> {
        if self.n_replacement >= MAX_REPLACEMENT {
            return None;
        }
        let t = self.dead.get(self.n_replacement).copied()?;
        self.n_replacement += 1;
        Some(t)
    }

    // 槓の度に1枚ずつ (最大5枚)
    pub fn reveal_next_dora(&mut self) -> Option<TileInstance> {
        if self.n_dora >= MAX_DORA {
            return None;
        }
        let t = self.dead.get(MAX_REPLACEMENT + 2 * self.n_dora).copied()?;
        self.n_dora += 1;
        Some(t)
    }

    pub fn dora_indicators(&self) -> Vec<TileInstance> {
        (0..self.n_dora)
            .filter_map(|i| self.dead.get(MAX_REPLACEMENT + 2 * i).copied())
            .collect()
    }

    pub fn ura_dora_indicators(&self) -> Vec<TileInstance> {
        (0..self.n_dora)
            .filter_map(|i| self.dead.get(MAX_REPLACEMENT + 2 * i + 1).copied())
            .collect()
    }

    // ドラ表示牌ではなく実際のドラ
    pub fn doras(&self) -> Vec<Tile> {
        self.dora_indicators()
            .iter()
            .map(|t| t.tile.next_dora())
            .collect()
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.live.len()
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.live.is_empty()
    }

    #[inline]
    pub fn replacements_left(&self) -> usize {
        MAX_REPLACEMENT - self.n_replacement
    }

    // 牌山 + 王牌に残っている牌の数
    pub fn tile_count(&self) -> usize {
        self.live.len() + self.dead.len().saturating_sub(self.n_replacement)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &TileInstance> {
        self.live.iter().chain(self.dead.iter())
    }
}

// 136枚の牌 (赤5ありの場合は各色の5のうち1枚が赤)
pub fn all_instances(include_red: bool) -> Vec<TileInstance> {
    let mut tiles = Vec::with_capacity(TOTAL_TILES);
    for t in Tile::all() {
        for n in 0..TILE {
            let is_red = include_red && t.is_suit() && t.1 == 5 && n == 0;
            tiles.push(TileInstance::new(t, is_red));
        }
    }
    tiles
}

pub fn create_wall(seed: u64, include_red: bool) -> Wall {
    let mut rng = StdRng::seed_from_u64(seed);
    Wall::build(include_red, &mut rng)
}

// デバッグ,テスト用に作為的な牌山を生成 指定がない場所はシード値に従ってランダムに生成
// hands: 各座席の配牌 (最大13枚), draws: 親の14枚目から順に鳴きがない場合のツモ
pub fn create_wall_debug(
    seed: u64,
    dealer: Seat,
    hands: &[&str; SEAT],
    draws: &str,
    include_red: bool,
) -> Result<Wall, ParseError> {
    let mut pool = all_instances(include_red);
    let mut take = |exp: &str, limit: usize| -> Result<Vec<TileInstance>, ParseError> {
        let req = instances_from_string(exp)?;
        if req.len() > limit {
            return Err(ParseError::new(exp, "too many tiles"));
        }
        let mut v = vec![];
        for r in req {
            let i = pool
                .iter()
                .position(|t| t.tile == r.tile && t.is_red == r.is_red)
                .ok_or_else(|| ParseError::new(exp, &format!("no tile left: {}", r)))?;
            v.push(pool.swap_remove(i));
        }
        Ok(v)
    };

    let mut seat_hands = vec![];
    for h in hands {
        seat_hands.push(take(h, HAND)?);
    }
    let mut live_draws = take(draws, TOTAL_TILES - DEAD_WALL - HAND * SEAT)?;

    // 余った牌をランダムにシャッフルして隙間を埋める
    let mut rng = StdRng::seed_from_u64(seed);
    pool.sort();
    pool.shuffle(&mut rng);
    for h in &mut seat_hands {
        let n = HAND - h.len();
        h.extend(pool.drain(pool.len() - n..));
    }
    let dead = pool.split_off(pool.len() - DEAD_WALL);
    live_draws.append(&mut pool);

    // 配牌順 (親から4枚ずつ3巡, 1枚ずつ1巡) に並べる
    let mut live = VecDeque::new();
    for r in 0..4 {
        for o in 0..SEAT {
            let h = &seat_hands[(dealer + o) % SEAT];
            let (b, e) = if r < 3 { (r * 4, r * 4 + 4) } else { (12, 13) };
            live.extend(h[b..e].iter().copied());
        }
    }
    live.extend(live_draws);

    Ok(Wall {
        live,
        dead,
        n_replacement: 0,
        n_dora: 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build() {
        let wall = create_wall(1, true);
        assert_eq!(wall.tile_count(), TOTAL_TILES);
        assert_eq!(wall.remaining(), TOTAL_TILES - DEAD_WALL);
        let mut all: Vec<TileInstance> = wall.live.iter().copied().collect();
        all.extend(wall.dead.iter().copied());
        let reds: Vec<&TileInstance> = all.iter().filter(|t| t.is_red).collect();
        assert_eq!(reds.len(), 3);
        for ti in [TM, TP, TS] {
            assert_eq!(reds.iter().filter(|t| t.tile == Tile(ti, 5)).count(), 1);
        }
        for t in Tile::all() {
            assert_eq!(all.iter().filter(|x| x.tile == t).count(), TILE);
        }

        let wall = create_wall(1, false);
        assert!(wall.live.iter().all(|t| !t.is_red));

        let tiles: Vec<TileInstance> = wall.tiles().copied().collect();
        let wall2 = Wall::from_tiles(tiles).unwrap();
        assert_eq!(wall2, wall);
        assert!(Wall::from_tiles(vec![]).is_none());
    }

    #[test]
    fn test_same_seed_same_order() {
        let a: Vec<Tile> = create_wall(7, true).live.iter().map(|t| t.tile).collect();
        let b: Vec<Tile> = create_wall(7, true).live.iter().map(|t| t.tile).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_dead_wall() {
        let mut wall = create_wall(3, false);
        assert_eq!(wall.dora_indicators(), vec![wall.dead[4]]);
        assert_eq!(wall.ura_dora_indicators(), vec![wall.dead[5]]);

        for i in 0..MAX_REPLACEMENT {
            assert_eq!(wall.draw_replacement(), Some(wall.dead[i]));
        }
        assert_eq!(wall.draw_replacement(), None);
        assert_eq!(wall.replacements_left(), 0);

        for _ in 1..MAX_DORA {
            assert!(wall.reveal_next_dora().is_some());
        }
        assert_eq!(wall.reveal_next_dora(), None);
        let ind: Vec<TileInstance> = [4, 6, 8, 10, 12].iter().map(|&i| wall.dead[i]).collect();
        assert_eq!(wall.dora_indicators(), ind);
        assert_eq!(wall.doras()[0], ind[0].tile.next_dora());
    }

    #[test]
    fn test_draw_until_exhausted() {
        let mut wall = create_wall(5, true);
        for _ in 0..TOTAL_TILES - DEAD_WALL {
            assert!(wall.draw().is_some());
        }
        assert!(wall.is_exhausted());
        assert_eq!(wall.draw(), None);
    }

    #[test]
    fn test_debug_wall() {
        let hands = ["m123456789p1122", "", "z1111", ""];
        let wall = create_wall_debug(0, 2, &hands, "s9p3", true).unwrap();
        assert_eq!(wall.tile_count(), TOTAL_TILES);
        // 最初の4枚は親(座席2)の配牌
        let first: Vec<Tile> = wall.live.iter().take(4).map(|t| t.tile).collect();
        assert_eq!(first, vec![Tile(TZ, 1); 4]);
        // 座席0は親から3番目
        let s0: Vec<Tile> = wall.live.iter().skip(8).take(4).map(|t| t.tile).collect();
        assert_eq!(s0, vec![Tile(TM, 1), Tile(TM, 2), Tile(TM, 3), Tile(TM, 4)]);
        assert_eq!(wall.live[HAND * SEAT].tile, Tile(TS, 9));

        assert!(create_wall_debug(0, 0, &["z11111", "", "", ""], "", true).is_err());
    }
}
