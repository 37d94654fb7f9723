use super::Listener;
use crate::model::*;
use crate::util::misc::vec_to_string;

// [EventPrinter]
#[derive(Debug, Default)]
pub struct EventPrinter {}

impl EventPrinter {
    pub fn new() -> Self {
        Self {}
    }
}

impl Listener for EventPrinter {
    fn notify_event(&mut self, stg: &Stage, event: &Event) {
        use Event::*;
        print!("(turn:{}) ", stg.turn_count);
        match event {
            TileDrawn(e) => {
                if e.is_replacement {
                    println!("seat {} Replacement {}", e.seat, e.tile);
                } else {
                    println!("seat {} Draw {} (wall: {})", e.seat, e.tile, e.wall_count);
                }
                if stg.turn_count == 1 && !e.is_replacement {
                    println!("{}", stg);
                }
            }
            TileDiscarded(e) => {
                println!(
                    "seat {} Discard {}{}{}",
                    e.seat,
                    e.tile,
                    if e.is_drawn { " (drawn)" } else { "" },
                    if e.is_riichi { " riichi" } else { "" }
                );
                println!("{}", stg.players[e.seat]);
            }
            MeldCalled(e) => {
                println!("seat {} Meld {:?} {}", e.seat, e.meld.meld_type, e.meld);
                println!("{}", stg.players[e.seat]);
            }
            KanDeclared(e) => {
                println!("seat {} Kan {:?} {}", e.seat, e.meld.kan_type, e.meld);
            }
            DoraRevealed(e) => {
                println!("Dora {}", e.indicator);
            }
            RiichiDeclared(e) => {
                println!("seat {} Riichi (sticks: {})", e.seat, e.riichi_sticks);
            }
            Tsumo(e) => {
                println!("seat {} Tsumo {}", e.seat, e.tile);
                println!("ura_dora: {}", vec_to_string(&stg.wall.ura_dora_indicators()));
            }
            Ron(e) => {
                println!("seat {} Ron {} from seat {}", e.seat, e.tile, e.from);
            }
            Draw(e) => {
                println!("Draw {:?} tenpai: {:?}", e.draw_type, e.tenpai);
            }
            RoundEnd(e) => {
                println!("RoundEnd {:?}", e.result);
                for s in 0..SEAT {
                    println!("player {}: {}", s, e.scores[s]);
                }
                println!("{}", stg);
            }
        }
    }
}
