use std::sync::atomic::{AtomicU32, Ordering};

use serde::{de, ser};

use super::*;

// [Tile]
// 牌の定義 (種別, 数字). 同じ定義の牌は区別しない.
// 字牌は z1~z4 が風牌(東南西北), z5~z7 が三元牌(白發中)
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile(pub Type, pub Tnum); // (type index, number index)

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Man,
    Pin,
    Sou,
    Wind,
    Dragon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wind {
    East,
    South,
    West,
    North,
}

impl Wind {
    pub const ALL: [Wind; SEAT] = [Wind::East, Wind::South, Wind::West, Wind::North];

    #[inline]
    pub fn from_index(i: usize) -> Self {
        Self::ALL[i % SEAT]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dragon {
    White,
    Green,
    Red,
}

impl Tile {
    pub fn suited(kind: Kind, rank: Tnum) -> Option<Self> {
        if !(1..=9).contains(&rank) {
            return None;
        }
        match kind {
            Kind::Man => Some(Self(TM, rank)),
            Kind::Pin => Some(Self(TP, rank)),
            Kind::Sou => Some(Self(TS, rank)),
            Kind::Wind | Kind::Dragon => None,
        }
    }

    #[inline]
    pub fn wind(w: Wind) -> Self {
        Self(TZ, WE + w as usize)
    }

    #[inline]
    pub fn dragon(d: Dragon) -> Self {
        Self(TZ, DW + d as usize)
    }

    // 34種の牌の通し番号 (0~33)
    #[inline]
    pub fn from_index(i: usize) -> Self {
        Self(i / 9, i % 9 + 1)
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.0 * 9 + self.1 - 1
    }

    // 全34種の牌 (表示順)
    pub fn all() -> impl Iterator<Item = Tile> {
        (0..KIND).map(Self::from_index)
    }

    pub fn from_symbol(s: &str) -> Result<Self, ParseError> {
        let err = |message: &str| ParseError::new(s, message);
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(err("tile symbol must be 2 chars"));
        }
        let ti = tile_type_from_char(chars[0]).ok_or_else(|| err("invalid tile type"))?;
        let ni = chars[1]
            .to_digit(10)
            .ok_or_else(|| err("invalid tile number"))? as Tnum;
        let t = Self(ti, if ni == 0 && ti != TZ { 5 } else { ni });
        if t.is_valid() {
            Ok(t)
        } else {
            Err(err("tile out of range"))
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        match self.0 {
            TM | TP | TS => (1..=9).contains(&self.1),
            TZ => (WE..=DR).contains(&self.1),
            _ => false,
        }
    }

    pub fn kind(&self) -> Kind {
        match self.0 {
            TM => Kind::Man,
            TP => Kind::Pin,
            TS => Kind::Sou,
            _ if self.1 <= WN => Kind::Wind,
            _ => Kind::Dragon,
        }
    }

    // 数牌の場合は数字, 字牌の場合はNone
    #[inline]
    pub fn rank(&self) -> Option<Tnum> {
        if self.is_suit() {
            Some(self.1)
        } else {
            None
        }
    }

    pub fn as_wind(&self) -> Option<Wind> {
        if self.is_wind() {
            Some(Wind::ALL[self.1 - WE])
        } else {
            None
        }
    }

    pub fn as_dragon(&self) -> Option<Dragon> {
        match (self.0, self.1) {
            (TZ, DW) => Some(Dragon::White),
            (TZ, DG) => Some(Dragon::Green),
            (TZ, DR) => Some(Dragon::Red),
            _ => None,
        }
    }

    // 数牌
    #[inline]
    pub fn is_suit(&self) -> bool {
        self.0 != TZ
    }

    // 字牌
    #[inline]
    pub fn is_honor(&self) -> bool {
        self.0 == TZ
    }

    // 么九牌
    #[inline]
    pub fn is_end(&self) -> bool {
        self.0 == TZ || self.1 == 1 || self.1 == 9
    }

    // 風牌
    #[inline]
    pub fn is_wind(&self) -> bool {
        self.0 == TZ && (WE..=WN).contains(&self.1)
    }

    // 三元牌
    #[inline]
    pub fn is_dragon(&self) -> bool {
        self.0 == TZ && (DW..=DR).contains(&self.1)
    }

    // ドラ表示牌から実際のドラを返却
    pub fn next_dora(self) -> Self {
        let Tile(ti, ni) = self;
        let ni = if ti != TZ {
            ni % 9 + 1
        } else {
            match ni {
                WN => WE,
                DR => DW,
                _ => ni + 1,
            }
        };
        Self(ti, ni)
    }
}

#[inline]
pub fn equal_definition(a: &TileInstance, b: &TileInstance) -> bool {
    a.tile == b.tile
}

pub fn tile_type_from_char(ch: char) -> Option<Type> {
    match ch {
        'm' => Some(TM),
        'p' => Some(TP),
        's' => Some(TS),
        'z' => Some(TZ),
        _ => None,
    }
}

pub fn tile_type_to_char(ti: Type) -> char {
    ['m', 'p', 's', 'z'][ti]
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", tile_type_to_char(self.0), self.1)
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl ser::Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct TileVisitor;

impl<'de> de::Visitor<'de> for TileVisitor {
    type Value = Tile;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("tile symbol")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Tile::from_symbol(v).map_err(E::custom)
    }
}

impl<'de> de::Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(TileVisitor)
    }
}

// [TileInstance]
// 物理的な牌一枚. 同じ定義の牌(例: 2枚の5索)をidで区別する.
static NEXT_TILE_ID: AtomicU32 = AtomicU32::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileInstance {
    pub id: TileId,
    pub tile: Tile,
    pub is_red: bool, // 赤5
}

impl TileInstance {
    pub fn new(tile: Tile, is_red: bool) -> Self {
        debug_assert!(!is_red || (tile.is_suit() && tile.1 == 5));
        let id = TileId(NEXT_TILE_ID.fetch_add(1, Ordering::Relaxed));
        Self { id, tile, is_red }
    }
}

// 復元した牌とidが重複しないように採番を進める
pub fn reserve_tile_ids(max: TileId) {
    NEXT_TILE_ID.fetch_max(max.0 + 1, Ordering::Relaxed);
}

impl PartialOrd for TileInstance {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// 表示順: 牌の定義 -> 赤5 -> id
impl Ord for TileInstance {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.tile
            .cmp(&other.tile)
            .then(other.is_red.cmp(&self.is_red))
            .then(self.id.cmp(&other.id))
    }
}

impl fmt::Display for TileInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_red {
            write!(f, "{}0", tile_type_to_char(self.tile.0))
        } else {
            write!(f, "{}", self.tile)
        }
    }
}

// [TileTable]
// 牌の定義ごとの枚数 (4x10の配列, 数字0の列は未使用)
pub type TileRow = [usize; TNUM];
pub type TileTable = [TileRow; TYPE];
