use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeldType {
    Chi,
    Pon,
    Kan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KanType {
    Ankan,      // 暗槓
    Daiminkan,  // 大明槓
    Shouminkan, // 加槓
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    pub meld_type: MeldType,
    pub kan_type: Option<KanType>,
    pub tiles: Vec<TileInstance>, // 表示順にソート済み
    pub is_open: bool,
    pub from: Option<Seat>, // 鳴いた牌の持ち主 (暗槓はNone)
}

impl Meld {
    pub fn chi(mut tiles: Vec<TileInstance>, from: Seat) -> Self {
        tiles.sort();
        Self {
            meld_type: MeldType::Chi,
            kan_type: None,
            tiles,
            is_open: true,
            from: Some(from),
        }
    }

    pub fn pon(mut tiles: Vec<TileInstance>, from: Seat) -> Self {
        tiles.sort();
        Self {
            meld_type: MeldType::Pon,
            kan_type: None,
            tiles,
            is_open: true,
            from: Some(from),
        }
    }

    pub fn kan(mut tiles: Vec<TileInstance>, kan_type: KanType, from: Option<Seat>) -> Self {
        tiles.sort();
        Self {
            meld_type: MeldType::Kan,
            kan_type: Some(kan_type),
            tiles,
            is_open: kan_type != KanType::Ankan,
            from,
        }
    }

    // 加槓: ポンに4枚目を追加
    pub fn upgrade_to_kan(&mut self, t: TileInstance) {
        debug_assert!(self.meld_type == MeldType::Pon);
        self.meld_type = MeldType::Kan;
        self.kan_type = Some(KanType::Shouminkan);
        self.tiles.push(t);
        self.tiles.sort();
    }

    // 面子を構成する牌の定義 (チーの場合は最小の牌)
    #[inline]
    pub fn tile(&self) -> Tile {
        self.tiles[0].tile
    }

    // 手牌の枚数として扱う数 (槓子も3枚として数える)
    #[inline]
    pub fn hand_slots(&self) -> usize {
        3
    }

    pub fn is_valid_shape(&self) -> bool {
        let defs: Vec<Tile> = self.tiles.iter().map(|t| t.tile).collect();
        match self.meld_type {
            MeldType::Chi => defs.len() == 3 && is_run(defs[0], defs[1], defs[2]),
            MeldType::Pon => defs.len() == 3 && defs.iter().all(|&t| t == defs[0]),
            MeldType::Kan => defs.len() == 4 && defs.iter().all(|&t| t == defs[0]),
        }
    }
}

// 3枚が同じ種類の連続した数牌かどうか (順不同)
pub fn is_run(a: Tile, b: Tile, c: Tile) -> bool {
    let mut v = [a, b, c];
    v.sort();
    v[0].is_suit()
        && v[0].0 == v[1].0
        && v[1].0 == v[2].0
        && v[0].1 + 1 == v[1].1
        && v[1].1 + 1 == v[2].1
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: Vec<String> = self.tiles.iter().map(|t| t.to_string()).collect();
        match self.from {
            Some(from) => write!(f, "{}({})", s.join("|"), from),
            None => write!(f, "{}", s.join("|")),
        }
    }
}
