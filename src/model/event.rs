use super::*;

// 画面演出,効果音,牌譜記録用. Stageを見ればわかる情報であっても演出に必要なものは含める
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TileDrawn(EventTileDrawn),           // ツモ
    TileDiscarded(EventTileDiscarded),   // 打牌
    MeldCalled(EventMeldCalled),         // チー,ポン,大明槓
    KanDeclared(EventKanDeclared),       // 暗槓,加槓
    DoraRevealed(EventDoraRevealed),     // 新ドラ
    RiichiDeclared(EventRiichiDeclared), // リーチ
    Tsumo(EventTsumo),                   // ツモ和了
    Ron(EventRon),                       // ロン和了 (ダブロンの場合は和了者ごと)
    Draw(EventDraw),                     // 流局
    RoundEnd(EventRoundEnd),             // 局終了
}

impl Event {
    #[inline]
    pub fn tile_drawn(seat: Seat, tile: TileInstance, is_replacement: bool, wall_count: usize) -> Self {
        Self::TileDrawn(EventTileDrawn {
            seat,
            tile,
            is_replacement,
            wall_count,
        })
    }

    #[inline]
    pub fn tile_discarded(seat: Seat, tile: TileInstance, is_drawn: bool, is_riichi: bool) -> Self {
        Self::TileDiscarded(EventTileDiscarded {
            seat,
            tile,
            is_drawn,
            is_riichi,
        })
    }

    #[inline]
    pub fn meld_called(seat: Seat, meld: Meld) -> Self {
        Self::MeldCalled(EventMeldCalled { seat, meld })
    }

    #[inline]
    pub fn kan_declared(seat: Seat, meld: Meld) -> Self {
        Self::KanDeclared(EventKanDeclared { seat, meld })
    }

    #[inline]
    pub fn dora_revealed(indicator: TileInstance) -> Self {
        Self::DoraRevealed(EventDoraRevealed { indicator })
    }

    #[inline]
    pub fn riichi_declared(seat: Seat, riichi_sticks: usize) -> Self {
        Self::RiichiDeclared(EventRiichiDeclared {
            seat,
            riichi_sticks,
        })
    }

    #[inline]
    pub fn tsumo(seat: Seat, tile: TileInstance) -> Self {
        Self::Tsumo(EventTsumo { seat, tile })
    }

    #[inline]
    pub fn ron(seat: Seat, from: Seat, tile: TileInstance) -> Self {
        Self::Ron(EventRon { seat, from, tile })
    }

    #[inline]
    pub fn draw(draw_type: DrawType, tenpai: [bool; SEAT]) -> Self {
        Self::Draw(EventDraw { draw_type, tenpai })
    }

    #[inline]
    pub fn round_end(result: RoundResult, scores: [Score; SEAT]) -> Self {
        Self::RoundEnd(EventRoundEnd { result, scores })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTileDrawn {
    pub seat: Seat,
    pub tile: TileInstance,
    pub is_replacement: bool, // 嶺上牌
    pub wall_count: usize,    // 牌山残り枚数
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTileDiscarded {
    pub seat: Seat,
    pub tile: TileInstance,
    pub is_drawn: bool,  // ツモ切り
    pub is_riichi: bool, // リーチ宣言牌
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMeldCalled {
    pub seat: Seat,
    pub meld: Meld,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventKanDeclared {
    pub seat: Seat,
    pub meld: Meld,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDoraRevealed {
    pub indicator: TileInstance, // ドラ表示牌
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRiichiDeclared {
    pub seat: Seat,
    pub riichi_sticks: usize, // 宣言後の供託本数
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTsumo {
    pub seat: Seat,
    pub tile: TileInstance, // 和了牌
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRon {
    pub seat: Seat,
    pub from: Seat, // 放銃者
    pub tile: TileInstance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraw {
    pub draw_type: DrawType,
    pub tenpai: [bool; SEAT], // 聴牌していたプレイヤー
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRoundEnd {
    pub result: RoundResult,
    pub scores: [Score; SEAT], // 供託精算後の点数
}

// [DrawType]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawType {
    Exhaustive, // 荒牌平局
}
