use super::*;
use crate::util::misc::vec_to_string;

// [Furiten]
// いずれかがtrueの場合ロン不可 (ツモには影響しない)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Furiten {
    pub permanent: bool, // 自分の捨て牌に和了牌がある (局終了まで解除されない)
    pub temporary: bool, // ロンを見逃した (次の巡目のツモで解除)
    pub riichi: bool,    // リーチ中にロンを見逃した (局終了まで解除されない)
}

impl Furiten {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.permanent || self.temporary || self.riichi
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discard {
    pub tile: TileInstance,
    pub turn: usize,
    pub is_drawn: bool,           // ツモ切りフラグ
    pub is_riichi: bool,          // リーチ宣言牌
    pub called_by: Option<Seat>,  // 鳴かれた場合にセット
}

impl fmt::Display for Discard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tile)?;
        if self.is_riichi {
            write!(f, "*")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub seat: Seat, // 座席番号(場・局が変わってもゲーム終了まで不変)
    pub name: String,
    pub score: Score,
    pub hand: Vec<TileInstance>, // 手牌 (鳴いた牌は含まない)
    pub melds: Vec<Meld>,
    pub discards: Vec<Discard>,

    pub riichi_turn: Option<usize>, // リーチを宣言したターン
    pub riichi_stick: bool,         // リーチ棒を供託済み
    pub is_ippatsu: bool,           // 一発 リーチ後の次の打牌または鳴きでfalse
    pub furiten: Furiten,
}

impl Player {
    pub fn new(seat: Seat, name: &str, score: Score) -> Self {
        Self {
            seat,
            name: name.to_string(),
            score,
            hand: vec![],
            melds: vec![],
            discards: vec![],
            riichi_turn: None,
            riichi_stick: false,
            is_ippatsu: false,
            furiten: Furiten::default(),
        }
    }

    // 局開始時の初期化 (座席,名前,点数以外)
    pub fn reset(&mut self) {
        *self = Self::new(self.seat, &self.name, self.score);
    }

    #[inline]
    pub fn is_riichi(&self) -> bool {
        self.riichi_turn.is_some()
    }

    #[inline]
    pub fn has_open_meld(&self) -> bool {
        self.melds.iter().any(|m| m.is_open)
    }

    // 手牌の枚数 (槓子も3枚として数える)
    #[inline]
    pub fn hand_size(&self) -> usize {
        self.hand.len() + self.melds.iter().map(|m| m.hand_slots()).sum::<usize>()
    }

    // 手牌 (鳴いた牌を除く) を牌の定義ごとの枚数に変換
    pub fn tile_table(&self) -> TileTable {
        let mut tt = TileTable::default();
        for t in &self.hand {
            tt[t.tile.0][t.tile.1] += 1;
        }
        tt
    }

    #[inline]
    pub fn find(&self, id: TileId) -> Option<Index> {
        self.hand.iter().position(|t| t.id == id)
    }

    #[inline]
    pub fn get(&self, id: TileId) -> Option<TileInstance> {
        self.hand.iter().find(|t| t.id == id).copied()
    }

    pub fn take(&mut self, id: TileId) -> Option<TileInstance> {
        let i = self.find(id)?;
        Some(self.hand.remove(i))
    }

    // 指定された定義の牌を先頭から最大n枚
    pub fn tiles_of(&self, t: Tile, n: usize) -> Vec<TileInstance> {
        self.hand.iter().filter(|h| h.tile == t).take(n).copied().collect()
    }

    pub fn sort_hand(&mut self) {
        self.hand.sort();
    }

    pub fn discarded_tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.discards.iter().map(|d| d.tile.tile)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut hand = self.hand.clone();
        hand.sort();
        writeln!(
            f,
            "seat: {}, name: {}, score: {}, riichi: {:?}, ippatsu: {}",
            self.seat, self.name, self.score, self.riichi_turn, self.is_ippatsu,
        )?;
        writeln!(
            f,
            "furiten: (permanent: {}, temporary: {}, riichi: {})",
            self.furiten.permanent, self.furiten.temporary, self.furiten.riichi,
        )?;
        writeln!(f, "hand: {}", vec_to_string(&hand))?;
        writeln!(f, "melds: {}", vec_to_string(&self.melds))?;
        write!(f, "discards: {}", vec_to_string(&self.discards))
    }
}
