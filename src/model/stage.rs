use super::*;
use crate::control::common::{calc_prevalent_wind, calc_seat_wind};
use crate::control::wall::Wall;
use crate::util::misc::vec_to_string;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Waiting, // 局開始前
    Playing, // 手番のプレイヤーの打牌待ち
    Calling, // 打牌に対する鳴き,ロン待ち
    Win,     // 局終了 (和了)
    Draw,    // 局終了 (流局)
}

impl Phase {
    #[inline]
    pub fn is_round_over(&self) -> bool {
        matches!(self, Phase::Win | Phase::Draw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoundResult {
    Tsumo {
        seat: Seat,
        tile: TileInstance,
    },
    Ron {
        winners: Vec<Seat>, // 放銃者の下家から順
        from: Seat,
        tile: TileInstance,
    },
    Draw {
        draw_type: DrawType,
        tenpai: [bool; SEAT],
    },
}

impl RoundResult {
    pub fn winners(&self) -> Vec<Seat> {
        match self {
            RoundResult::Tsumo { seat, .. } => vec![*seat],
            RoundResult::Ron { winners, .. } => winners.clone(),
            RoundResult::Draw { .. } => vec![],
        }
    }
}

// [Stage]
// 局の状態. StageControllerによってのみ更新される
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub rule: Rule,
    pub round: usize,         // 場 (東:0, 南:1, 西:2, 北:3)
    pub dealer: Seat,         // 局 (0~3 = 親のseat)
    pub honba: usize,         // 本場
    pub riichi_sticks: usize, // リーチ棒の供託
    pub phase: Phase,
    pub turn: Seat,        // 手番のプレイヤーの座席
    pub turn_count: usize, // 局開始時1, ツモ毎に+1
    pub wall: Wall,
    pub last_discard: Option<(Seat, TileInstance)>, // 鳴き,ロンの対象となる打牌
    pub pending_calls: Vec<CallOpportunity>,        // 未処理の鳴き,ロン
    pub ron_winners: Vec<Seat>,                     // ロン宣言済みのプレイヤー
    pub last_drawn: Option<TileInstance>,           // 手番のプレイヤーがこのターンにツモった牌
    pub result: Option<RoundResult>,
    pub players: [Player; SEAT],
    pub seed: u64,       // 対局のシード値
    pub hand_count: u64, // 局の通し番号 (牌山のシード値に使用)
    pub preset_wall: Option<Wall>, // 次の局開始で使用する牌山 (デバッグ,テスト用)
}

impl Stage {
    pub fn new(rule: Rule, names: &[String; SEAT], seed: u64) -> Self {
        let players = [0, 1, 2, 3].map(|s| Player::new(s, &names[s], rule.initial_score));
        Self {
            rule,
            round: 0,
            dealer: 0,
            honba: 0,
            riichi_sticks: 0,
            phase: Phase::Waiting,
            turn: 0,
            turn_count: 0,
            wall: Wall::default(),
            last_discard: None,
            pending_calls: vec![],
            ron_winners: vec![],
            last_drawn: None,
            result: None,
            players,
            seed,
            hand_count: 0,
            preset_wall: None,
        }
    }

    // 局ごとの牌山のシード値
    #[inline]
    pub fn wall_seed(&self) -> u64 {
        self.seed
            .wrapping_add(self.hand_count.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }

    #[inline]
    pub fn is_dealer(&self, seat: Seat) -> bool {
        seat == self.dealer
    }

    #[inline]
    pub fn get_prevalent_wind(&self) -> Wind {
        calc_prevalent_wind(self.round)
    }

    #[inline]
    pub fn get_seat_wind(&self, seat: Seat) -> Wind {
        calc_seat_wind(self.dealer, seat)
    }

    pub fn get_scores(&self) -> [Score; SEAT] {
        let mut scores = [0; SEAT];
        for s in 0..SEAT {
            scores[s] = self.players[s].score;
        }
        scores
    }

    // 手牌,副露,捨て牌,牌山の総数 (常に136)
    pub fn count_tiles(&self) -> usize {
        let mut n = self.wall.tile_count();
        for p in &self.players {
            n += p.hand.len();
            n += p.melds.iter().map(|m| m.tiles.len()).sum::<usize>();
            // 鳴かれた牌は副露側で数える
            n += p.discards.iter().filter(|d| d.called_by.is_none()).count();
        }
        n
    }

    pub fn to_snapshot(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_snapshot(s: &str) -> Result<Self, serde_json::Error> {
        let stg: Self = serde_json::from_str(s)?;
        if let Some(max) = stg.max_tile_id() {
            reserve_tile_ids(max);
        }
        Ok(stg)
    }

    fn max_tile_id(&self) -> Option<TileId> {
        let mut ids: Vec<TileId> = self.wall.tiles().map(|t| t.id).collect();
        if let Some(w) = &self.preset_wall {
            ids.extend(w.tiles().map(|t| t.id));
        }
        for p in &self.players {
            ids.extend(p.hand.iter().map(|t| t.id));
            ids.extend(p.melds.iter().flat_map(|m| m.tiles.iter().map(|t| t.id)));
            ids.extend(p.discards.iter().map(|d| d.tile.id));
        }
        ids.into_iter().max()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "round: {:?}, dealer: {}, honba: {}, riichi_sticks: {}",
            self.get_prevalent_wind(),
            self.dealer,
            self.honba,
            self.riichi_sticks,
        )?;
        writeln!(
            f,
            "phase: {:?}, turn: {}, turn_count: {}, wall: {}, dora_indicators: {}",
            self.phase,
            self.turn,
            self.turn_count,
            self.wall.remaining(),
            vec_to_string(&self.wall.dora_indicators()),
        )?;
        if let Some((s, t)) = &self.last_discard {
            writeln!(f, "last_discard: {} (seat {})", t, s)?;
        }
        if !self.pending_calls.is_empty() {
            writeln!(f, "pending_calls: {}", vec_to_string(&self.pending_calls))?;
        }

        let boader = "-".to_string().repeat(80);
        write!(f, "{}", boader)?;
        for p in &self.players {
            writeln!(f)?;
            writeln!(f, "wind: {:?}", self.get_seat_wind(p.seat))?;
            writeln!(f, "{}", p)?;
            write!(f, "{}", boader)?;
        }
        writeln!(f)
    }
}
